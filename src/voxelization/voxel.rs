use crate::bounding_volume::Aabb;
use crate::math::{Point, Point2, Real, Vector};

/// A single axis-aligned, cubic volume element.
///
/// Voxels are emitted by the voxelizers, one per occupied grid cell or octree
/// leaf, and are immutable afterwards except for the volume id assigned by
/// [`VolumeSet::push`](crate::voxelization::VolumeSet::push).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voxel {
    /// The center of this voxel in world space.
    pub center: Point<Real>,
    /// The edge length of this voxel.
    pub size: Real,
    /// The RGB color of this voxel: the base material color, modulated by the
    /// vertex color sampled from the first triangle found inside the voxel.
    pub color: Vector<Real>,
    /// The texture coordinate sampled from the first triangle found inside
    /// this voxel, or the origin if the mesh has no texture coordinates.
    pub uv: Point2<Real>,
    /// Identifier of the voxel volume this voxel belongs to.
    ///
    /// This is `None` at emission time; it is assigned when the voxel is
    /// aggregated into a [`VolumeSet`](crate::voxelization::VolumeSet).
    pub volume: Option<u32>,
}

/// The base material of a voxelized mesh.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelMaterial {
    /// The base RGB color applied to every voxel of the mesh.
    pub color: Vector<Real>,
    /// An opaque handle to the material's texture, if it has one. Resolving
    /// the handle (e.g. to a slot of a texture array) is the renderer's job.
    pub texture: Option<u32>,
}

impl Default for VoxelMaterial {
    fn default() -> Self {
        Self {
            color: Vector::repeat(1.0),
            texture: None,
        }
    }
}

/// The result of one voxelization pass over one mesh snapshot.
pub struct Voxelization {
    /// The emitted voxels. The ordering is deterministic for a given mesh,
    /// bounding volume, and voxelizer configuration.
    pub voxels: Vec<Voxel>,
    /// The bounding volume actually voxelized. This can be larger than the
    /// volume given to the voxelizer: the grid rounds it up to whole cells,
    /// and the octree normalizes it to a cube.
    pub volume: Aabb,
    /// The material this pass was run with.
    pub material: VoxelMaterial,
}
