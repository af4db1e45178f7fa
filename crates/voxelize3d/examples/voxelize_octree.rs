extern crate nalgebra as na;

use na::{Point3, Vector3};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Isometry;
use voxelize3d::voxelization::{MeshSnapshot, OctreeVoxelizer, VoxelMaterial, Voxelizer};

fn main() {
    // A tetrahedron modeled in local space, then placed in the world with a
    // translation and a non-uniform scale.
    let local_vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

    let pos = Isometry::translation(2.0, 0.0, 0.0);
    let scale = Vector3::new(2.0, 1.0, 1.0);
    let mesh = MeshSnapshot::from_local_space(
        &pos,
        &scale,
        local_vertices,
        indices,
        Vec::new(),
        Vec::new(),
    )
    .unwrap();

    let volume = Aabb::new(Point3::new(2.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0));
    let material = VoxelMaterial {
        color: Vector3::new(0.2, 0.8, 0.2),
        texture: None,
    };

    let voxelizer = OctreeVoxelizer::new(0.25);
    let result = voxelizer.voxelize(&mesh, &volume, &material);

    println!(
        "octree voxelization emitted {} voxels inside {:?}",
        result.voxels.len(),
        result.volume
    );

    let min_size = result
        .voxels
        .iter()
        .map(|voxel| voxel.size)
        .fold(f32::INFINITY, f32::min);
    println!("smallest emitted voxel size: {}", min_size);
}
