use na::{Point2, Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::voxelization::{GridVoxelizer, MeshSnapshot, Voxel, VoxelMaterial, Voxelizer};

fn red_material() -> VoxelMaterial {
    VoxelMaterial {
        color: Vector3::new(1.0, 0.0, 0.0),
        texture: None,
    }
}

fn single_triangle_mesh() -> MeshSnapshot {
    MeshSnapshot::new(
        vec![
            Point3::new(0.2, 0.2, 0.5),
            Point3::new(0.8, 0.2, 0.5),
            Point3::new(0.2, 0.8, 0.5),
        ],
        vec![[0, 1, 2]],
        Vec::new(),
        Vec::new(),
    )
    .unwrap()
}

fn random_soup(num_triangles: usize) -> MeshSnapshot {
    let mut rng = StdRng::seed_from_u64(42);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..num_triangles {
        let base = Point3::new(
            rng.gen::<f32>() * 2.5,
            rng.gen::<f32>() * 2.5,
            rng.gen::<f32>() * 2.5,
        );
        vertices.push(base);
        vertices.push(base + Vector3::new(rng.gen::<f32>() * 0.5, rng.gen(), 0.0) * 0.5);
        vertices.push(base + Vector3::new(0.0, rng.gen::<f32>() * 0.5, rng.gen()) * 0.5);

        let first = (i * 3) as u32;
        indices.push([first, first + 1, first + 2]);
    }

    MeshSnapshot::new(vertices, indices, Vec::new(), Vec::new()).unwrap()
}

#[test]
fn single_triangle_occupies_exactly_one_cell() {
    let mesh = single_triangle_mesh();
    let volume = Aabb::new(Point3::origin(), Point3::new(2.0, 2.0, 1.0));
    let voxelizer = GridVoxelizer::new(1.0);

    let result = voxelizer.voxelize(&mesh, &volume, &red_material());

    assert_eq!(result.voxels.len(), 1);
    assert_eq!(result.voxels[0].center, Point3::new(0.5, 0.5, 0.5));
    assert_eq!(result.volume, volume);
}

#[test]
fn end_to_end_single_triangle() {
    let mesh = single_triangle_mesh();
    let volume = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let voxelizer = GridVoxelizer::new(1.0);

    let result = voxelizer.voxelize(&mesh, &volume, &red_material());

    assert_eq!(
        result.voxels,
        vec![Voxel {
            center: Point3::new(0.5, 0.5, 0.5),
            size: 1.0,
            color: Vector3::new(1.0, 0.0, 0.0),
            uv: Point2::origin(),
            volume: None,
        }]
    );
    assert_eq!(result.material, red_material());
}

#[test]
fn attributes_are_sampled_from_the_first_vertex() {
    let mesh = MeshSnapshot::new(
        vec![
            Point3::new(0.2, 0.2, 0.5),
            Point3::new(0.8, 0.2, 0.5),
            Point3::new(0.2, 0.8, 0.5),
        ],
        vec![[0, 1, 2]],
        vec![
            Vector3::new(1.0, 0.5, 0.25),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ],
        vec![
            Point2::new(0.25, 0.75),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ],
    )
    .unwrap();

    let volume = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let material = VoxelMaterial {
        color: Vector3::new(0.5, 0.5, 0.5),
        texture: None,
    };
    let result = GridVoxelizer::new(1.0).voxelize(&mesh, &volume, &material);

    assert_eq!(result.voxels.len(), 1);
    assert_eq!(result.voxels[0].color, Vector3::new(0.5, 0.25, 0.125));
    assert_eq!(result.voxels[0].uv, Point2::new(0.25, 0.75));
}

#[test]
fn voxelization_is_deterministic() {
    let mesh = random_soup(40);
    let volume = Aabb::new(Point3::origin(), Point3::new(3.0, 3.0, 3.0));
    let voxelizer = GridVoxelizer::new(0.5);

    let first = voxelizer.voxelize(&mesh, &volume, &red_material());
    let second = voxelizer.voxelize(&mesh, &volume, &red_material());

    assert!(!first.voxels.is_empty());
    assert_eq!(first.voxels, second.voxels);
}

#[test]
fn voxel_centers_stay_inside_the_expanded_bounds() {
    let mesh = random_soup(40);
    let volume = Aabb::new(Point3::origin(), Point3::new(3.0, 3.0, 3.0));
    let cell_size = 0.5;
    let result = GridVoxelizer::new(cell_size).voxelize(&mesh, &volume, &red_material());

    let mins = volume.mins - Vector3::repeat(cell_size * 0.5);
    let maxs = volume.maxs + Vector3::repeat(cell_size * 0.5);

    for voxel in &result.voxels {
        for i in 0..3 {
            assert!(voxel.center[i] >= mins[i] && voxel.center[i] <= maxs[i]);
        }
    }
}

#[test]
fn empty_mesh_yields_no_voxels() {
    let mesh = MeshSnapshot::new(Vec::new(), Vec::new(), Vec::new(), Vec::new()).unwrap();
    let volume = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let result = GridVoxelizer::new(0.5).voxelize(&mesh, &volume, &red_material());
    assert!(result.voxels.is_empty());
}

#[test]
fn degenerate_volume_yields_no_voxels() {
    let mesh = single_triangle_mesh();
    let volume = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, 0.5));
    let result = GridVoxelizer::new(1.0).voxelize(&mesh, &volume, &red_material());
    assert!(result.voxels.is_empty());
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    let mesh = random_soup(40);
    let volume = Aabb::new(Point3::origin(), Point3::new(3.0, 3.0, 3.0));

    let sequential = GridVoxelizer::new(0.5).voxelize(&mesh, &volume, &red_material());
    let parallel = GridVoxelizer {
        cell_size: 0.5,
        parallel: true,
    }
    .voxelize(&mesh, &volume, &red_material());

    assert_eq!(sequential.voxels, parallel.voxels);
}
