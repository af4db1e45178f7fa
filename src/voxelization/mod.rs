//! Mesh-to-voxel conversion.
//!
//! Two strategies are available behind the [`Voxelizer`] trait:
//! [`GridVoxelizer`] tests every cell of a uniform grid against the mesh,
//! while [`OctreeVoxelizer`] adaptively subdivides only the occupied regions
//! of the bounding volume.

pub use self::grid_voxelizer::GridVoxelizer;
pub use self::mesh_snapshot::{MeshDataError, MeshSnapshot};
pub use self::octree_voxelizer::OctreeVoxelizer;
pub use self::volume_set::{VolumeProperties, VolumeSet};
pub use self::voxel::{Voxel, VoxelMaterial, Voxelization};

mod grid_voxelizer;
mod mesh_snapshot;
mod octree_voxelizer;
mod volume_set;
mod voxel;

use crate::bounding_volume::Aabb;

/// Trait implemented by everything that can voxelize a mesh snapshot into a
/// voxel sequence.
pub trait Voxelizer {
    /// Converts the part of `mesh` inside of `volume` into a sequence of
    /// voxels colored by `material`.
    ///
    /// Voxelization is a deterministic, pure computation: the same snapshot,
    /// volume, and material always produce the same voxel sequence. An empty
    /// mesh, or a `volume` with zero extent, yields an empty sequence.
    fn voxelize(
        &self,
        mesh: &MeshSnapshot,
        volume: &Aabb,
        material: &VoxelMaterial,
    ) -> Voxelization;
}
