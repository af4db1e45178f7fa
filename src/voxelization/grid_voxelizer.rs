use crate::bounding_volume::Aabb;
use crate::math::{Point, Point2, Real, Vector};
use crate::query;
use crate::voxelization::{MeshSnapshot, Voxel, VoxelMaterial, Voxelization, Voxelizer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Voxelizes a mesh by testing every cell of a uniform grid against every
/// triangle.
///
/// The bounding volume is divided into cubic cells of edge `cell_size` (the
/// volume is rounded up to whole cells on each axis). A cell produces at most
/// one voxel: triangles are tested in mesh order and the first one
/// intersecting the cell provides the voxel's color and texture-coordinate
/// sample.
pub struct GridVoxelizer {
    /// The edge length of the cubic grid cells. Must be positive.
    pub cell_size: Real,
    /// Whether cells should be evaluated in parallel.
    ///
    /// This only has an effect if the crate is compiled with the `parallel`
    /// feature; without it, cells are always evaluated sequentially.
    pub parallel: bool,
}

impl GridVoxelizer {
    /// A grid voxelizer with the given cell size, evaluating cells sequentially.
    pub fn new(cell_size: Real) -> Self {
        Self {
            cell_size,
            parallel: false,
        }
    }
}

impl Voxelizer for GridVoxelizer {
    fn voxelize(
        &self,
        mesh: &MeshSnapshot,
        volume: &Aabb,
        material: &VoxelMaterial,
    ) -> Voxelization {
        let extents = volume.extents();
        let dims = [
            (extents.x / self.cell_size).ceil() as usize,
            (extents.y / self.cell_size).ceil() as usize,
            (extents.z / self.cell_size).ceil() as usize,
        ];
        let num_cells = dims[0] * dims[1] * dims[2];

        let grid_volume = Aabb::new(
            volume.mins,
            volume.mins
                + Vector::new(dims[0] as Real, dims[1] as Real, dims[2] as Real) * self.cell_size,
        );

        // Every cell uses the same box expressed in cell-local coordinates, so
        // its corner vertices are computed once for the whole pass.
        let cell_box = Aabb::new(
            Point::origin(),
            Point::origin() + Vector::repeat(self.cell_size),
        );
        let cell_vertices = cell_box.vertices();
        let half_cell = Vector::repeat(self.cell_size * 0.5);

        let fill_cell = |id: usize| -> Option<Voxel> {
            // Recover the grid coordinates from the x-major cell id. This is
            // the same mapping as a nested x → y → z traversal, so cell ids
            // are identical between the sequential and parallel paths.
            let x = id / (dims[1] * dims[2]);
            let y = (id / dims[2]) % dims[1];
            let z = id % dims[2];

            let corner =
                volume.mins + Vector::new(x as Real, y as Real, z as Real) * self.cell_size;
            let center = corner + half_cell;

            for (tri_id, idx) in mesh.indices().iter().enumerate() {
                // Triangle vertices relative to the cell's min corner.
                let triangle = mesh.triangle(tri_id).translated(&(-corner.coords));
                let normal = &mesh.normals()[tri_id];

                if query::details::intersection_test_aabb_triangle(
                    &cell_box,
                    &cell_vertices,
                    &triangle,
                    normal,
                ) {
                    // Sample the mesh attributes from the triangle's first vertex.
                    let first = idx[0] as usize;
                    let uv = if mesh.uvs().is_empty() {
                        Point2::origin()
                    } else {
                        mesh.uvs()[first]
                    };
                    let color = if mesh.colors().is_empty() {
                        material.color
                    } else {
                        material.color.component_mul(&mesh.colors()[first])
                    };

                    return Some(Voxel {
                        center,
                        size: self.cell_size,
                        color,
                        uv,
                        volume: None,
                    });
                }
            }

            None
        };

        let mut cells: Vec<Option<Voxel>> = vec![None; num_cells];

        // Each cell writes exclusively to its own preallocated slot, making
        // the parallel path a plain data-parallel map; the iterator joins all
        // cell tasks before the filter below runs.
        #[cfg(feature = "parallel")]
        if self.parallel {
            cells
                .par_iter_mut()
                .enumerate()
                .for_each(|(id, cell)| *cell = fill_cell(id));
        } else {
            for (id, cell) in cells.iter_mut().enumerate() {
                *cell = fill_cell(id);
            }
        }

        #[cfg(not(feature = "parallel"))]
        for (id, cell) in cells.iter_mut().enumerate() {
            *cell = fill_cell(id);
        }

        // Only occupied cells materialize into voxels, in cell id order.
        Voxelization {
            voxels: cells.into_iter().flatten().collect(),
            volume: grid_volume,
            material: *material,
        }
    }
}
