extern crate nalgebra as na;

use na::{Point3, Vector3};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::voxelization::{GridVoxelizer, MeshSnapshot, VoxelMaterial, Voxelizer};

fn main() {
    // A unit quad made of two triangles, lying on the z = 0.5 plane.
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.5),
        Point3::new(1.0, 0.0, 0.5),
        Point3::new(1.0, 1.0, 0.5),
        Point3::new(0.0, 1.0, 0.5),
    ];
    let indices = vec![[0, 1, 2], [0, 2, 3]];
    let mesh = MeshSnapshot::new(vertices, indices, Vec::new(), Vec::new()).unwrap();

    let volume = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let material = VoxelMaterial {
        color: Vector3::new(0.8, 0.2, 0.2),
        texture: None,
    };

    let voxelizer = GridVoxelizer::new(0.25);
    let result = voxelizer.voxelize(&mesh, &volume, &material);

    println!(
        "voxelized the quad into {} voxels of size {}",
        result.voxels.len(),
        voxelizer.cell_size
    );

    for voxel in &result.voxels {
        println!("voxel at {}", voxel.center);
    }
}
