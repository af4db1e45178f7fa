//! Shapes supported by the voxelizers.

pub use self::triangle::Triangle;

mod triangle;
