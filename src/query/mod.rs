//! Non-persistent geometric queries.
//!
//! The only query needed by the voxelizers is the exact triangle vs. AABB
//! intersection test.

pub use self::intersection_test::intersection_test_aabb_triangle;

mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
