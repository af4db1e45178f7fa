use std::collections::VecDeque;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Point2, Real, Vector};
use crate::query;
use crate::shape::Triangle;
use crate::voxelization::{MeshSnapshot, Voxel, VoxelMaterial, Voxelization, Voxelizer};

/// Voxelizes a mesh with an adaptive octree over its bounding volume.
///
/// The tree is built lazily, in a single pass over the mesh triangles: a node
/// only ever materializes when a triangle actually intersects its region, so
/// empty subtrees are never allocated. Subdivision stops once a node's edge
/// length reaches `min_node_size`; every occupied leaf then becomes one voxel.
///
/// The bounding volume is normalized to a cube whose edge is a whole multiple
/// of `min_node_size` before construction, which keeps all emitted voxels
/// cubic.
pub struct OctreeVoxelizer {
    /// Nodes with an edge length smaller than or equal to this value become
    /// leaves and are not subdivided further. Must be positive.
    pub min_node_size: Real,
}

impl OctreeVoxelizer {
    /// An octree voxelizer with the given minimum node size.
    pub fn new(min_node_size: Real) -> Self {
        Self { min_node_size }
    }
}

struct OctreeNode {
    region: Aabb,
    // The region corners, cached because every triangle reaching this node
    // projects them on up to 13 separating axes.
    vertices: [Point<Real>; 8],
    // Decided once at construction, from the region dimensions.
    leaf: bool,
    occupied: bool,
    uv: Point2<Real>,
    color: Vector<Real>,
    children: [Option<Box<OctreeNode>>; 8],
}

impl OctreeNode {
    fn new(
        region: Aabb,
        vertices: [Point<Real>; 8],
        uv: Point2<Real>,
        color: Vector<Real>,
        min_node_size: Real,
    ) -> Self {
        Self {
            leaf: region.extents().x <= min_node_size,
            // Nodes only materialize when a triangle intersects their region.
            occupied: true,
            region,
            vertices,
            uv,
            color,
            children: Default::default(),
        }
    }
}

struct Octree {
    root: Option<Box<OctreeNode>>,
    min_node_size: Real,
}

impl Octree {
    fn insert(
        &mut self,
        region: Aabb,
        region_vertices: [Point<Real>; 8],
        triangle: &Triangle,
        normal: &Vector<Real>,
        uv: Point2<Real>,
        color: Vector<Real>,
    ) {
        let min_node_size = self.min_node_size;
        Self::insert_region(
            &mut self.root,
            region,
            region_vertices,
            triangle,
            normal,
            uv,
            color,
            min_node_size,
        );
    }

    /// Materializes `node` if needed, then recurses into every octant the
    /// triangle intersects.
    ///
    /// A freshly created node captures the attribute sample of the triangle
    /// that created it; triangles reaching an existing node never overwrite
    /// the sample it already holds.
    #[allow(clippy::too_many_arguments)]
    fn insert_region(
        node: &mut Option<Box<OctreeNode>>,
        region: Aabb,
        region_vertices: [Point<Real>; 8],
        triangle: &Triangle,
        normal: &Vector<Real>,
        uv: Point2<Real>,
        color: Vector<Real>,
        min_node_size: Real,
    ) {
        let node = node.get_or_insert_with(|| {
            Box::new(OctreeNode::new(
                region,
                region_vertices,
                uv,
                color,
                min_node_size,
            ))
        });

        if node.leaf {
            return;
        }

        for octant in 0..8 {
            let (child_region, child_vertices) = match &node.children[octant] {
                // Nodes created by an earlier triangle already cached their
                // region and corners.
                Some(child) => (child.region, child.vertices),
                None => {
                    let child_region = node.region.octant(octant);
                    (child_region, child_region.vertices())
                }
            };

            if query::details::intersection_test_aabb_triangle(
                &child_region,
                &child_vertices,
                triangle,
                normal,
            ) {
                Self::insert_region(
                    &mut node.children[octant],
                    child_region,
                    child_vertices,
                    triangle,
                    normal,
                    uv,
                    color,
                    min_node_size,
                );
            }
        }
    }

    /// Collects one voxel per occupied leaf, breadth-first from the root.
    ///
    /// Internal nodes never emit voxels themselves; only their leaf
    /// descendants do.
    fn harvest(&self, material: &VoxelMaterial) -> Vec<Voxel> {
        let mut voxels = Vec::new();
        let mut queue: VecDeque<&OctreeNode> = VecDeque::new();

        if let Some(root) = &self.root {
            queue.push_back(root);
        }

        while let Some(node) = queue.pop_front() {
            if node.leaf && node.occupied {
                voxels.push(Voxel {
                    center: node.region.center(),
                    size: node.region.extents().x,
                    color: material.color.component_mul(&node.color),
                    uv: node.uv,
                    volume: None,
                });
            } else {
                for child in node.children.iter().flatten() {
                    queue.push_back(child);
                }
            }
        }

        voxels
    }
}

impl Voxelizer for OctreeVoxelizer {
    fn voxelize(
        &self,
        mesh: &MeshSnapshot,
        volume: &Aabb,
        material: &VoxelMaterial,
    ) -> Voxelization {
        // Normalize the volume to a cube spanning a whole number of cells of
        // size `min_node_size` on the volume's largest axis.
        let extents = volume.extents();
        let cells_x = (extents.x / self.min_node_size).ceil() as u32;
        let cells_y = (extents.y / self.min_node_size).ceil() as u32;
        let cells_z = (extents.z / self.min_node_size).ceil() as u32;
        let max_dim = cells_x.max(cells_y).max(cells_z);

        let root_region = Aabb::new(
            volume.mins,
            volume.mins + Vector::repeat(max_dim as Real * self.min_node_size),
        );
        let root_vertices = root_region.vertices();

        let mut octree = Octree {
            root: None,
            min_node_size: self.min_node_size,
        };

        for (tri_id, idx) in mesh.indices().iter().enumerate() {
            let triangle = mesh.triangle(tri_id);
            let normal = &mesh.normals()[tri_id];

            if !query::details::intersection_test_aabb_triangle(
                &root_region,
                &root_vertices,
                &triangle,
                normal,
            ) {
                continue;
            }

            // Sample the mesh attributes from the triangle's first vertex.
            let first = idx[0] as usize;
            let uv = if mesh.uvs().is_empty() {
                Point2::origin()
            } else {
                mesh.uvs()[first]
            };
            let color = if mesh.colors().is_empty() {
                Vector::repeat(1.0)
            } else {
                mesh.colors()[first]
            };

            octree.insert(root_region, root_vertices, &triangle, normal, uv, color);
        }

        Voxelization {
            voxels: octree.harvest(material),
            volume: root_region,
            material: *material,
        }
    }
}
