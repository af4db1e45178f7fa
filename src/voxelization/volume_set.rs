use crate::math::{Point, Real, Vector};
use crate::voxelization::{Voxel, Voxelization};

/// Properties shared by all the voxels of one voxelized mesh.
///
/// The voxels of a [`VolumeSet`] form one contiguous buffer; each volume owns
/// the range starting at `first_voxel` and holding `num_voxels` entries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolumeProperties {
    /// The slot of this volume's texture in [`VolumeSet::textures`], if the
    /// volume's material has one.
    pub texture_slot: Option<u32>,
    /// The index of this volume's first voxel in the flattened voxel buffer.
    pub first_voxel: u32,
    /// The number of voxels of this volume.
    pub num_voxels: u32,
    /// The base color of this volume's material.
    pub material_color: Vector<Real>,
    /// The center of this volume's bounding box.
    pub center: Point<Real>,
    /// The half-extents of this volume's bounding box.
    pub half_extents: Vector<Real>,
}

/// Aggregates the voxelizations of multiple meshes into one contiguous voxel
/// buffer plus one properties record per volume.
///
/// This is the hand-off point towards a renderer: the buffers it maintains can
/// be uploaded as-is, and every voxel carries the id of its volume's
/// properties record. Within one volume the voxel ordering of the original
/// voxelization pass is preserved, so a `(first_voxel, num_voxels)` pair
/// always recovers exactly the sequence that was pushed.
#[derive(Default)]
pub struct VolumeSet {
    voxels: Vec<Voxel>,
    volumes: Vec<VolumeProperties>,
    textures: Vec<u32>,
}

impl VolumeSet {
    /// Creates an empty volume set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one voxelization pass to this set and returns its volume id.
    ///
    /// The pass's voxels are moved to the end of the flattened buffer and get
    /// their [`Voxel::volume`] stamped with the new id. If the pass's material
    /// carries a texture handle, the handle is registered in the texture table
    /// and the volume references its slot.
    pub fn push(&mut self, voxelization: Voxelization) -> u32 {
        let id = self.volumes.len() as u32;
        let first_voxel = self.voxels.len() as u32;

        let texture_slot = voxelization.material.texture.map(|handle| {
            self.textures.push(handle);
            self.textures.len() as u32 - 1
        });

        self.volumes.push(VolumeProperties {
            texture_slot,
            first_voxel,
            num_voxels: voxelization.voxels.len() as u32,
            material_color: voxelization.material.color,
            center: voxelization.volume.center(),
            half_extents: voxelization.volume.half_extents(),
        });

        self.voxels
            .extend(voxelization.voxels.into_iter().map(|mut voxel| {
                voxel.volume = Some(id);
                voxel
            }));

        id
    }

    /// All the aggregated voxels, flattened in push order.
    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// The properties of every pushed volume, indexable by volume id.
    #[inline]
    pub fn volumes(&self) -> &[VolumeProperties] {
        &self.volumes
    }

    /// The registered texture handles; volumes reference them by slot.
    #[inline]
    pub fn textures(&self) -> &[u32] {
        &self.textures
    }

    /// The contiguous voxel range of the volume with the given id.
    #[inline]
    pub fn volume_voxels(&self, id: u32) -> &[Voxel] {
        let properties = &self.volumes[id as usize];
        let first = properties.first_voxel as usize;
        &self.voxels[first..first + properties.num_voxels as usize]
    }
}
