use na::{Point3, Vector3};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::query::intersection_test_aabb_triangle;
use voxelize3d::shape::Triangle;

fn unit_box_test(tri: Triangle) -> bool {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let normal = tri
        .scaled_normal()
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros);
    intersection_test_aabb_triangle(&aabb, &aabb.vertices(), &tri, &normal)
}

#[test]
fn separated_triangle_does_not_intersect() {
    let tri = Triangle::new(
        Point3::new(2.0, 2.0, 2.0),
        Point3::new(3.0, 2.0, 2.0),
        Point3::new(2.0, 3.0, 2.0),
    );
    assert!(!unit_box_test(tri));
}

#[test]
fn piercing_triangle_intersects() {
    let tri = Triangle::new(
        Point3::new(0.5, 0.5, -1.0),
        Point3::new(0.5, 0.5, 2.0),
        Point3::new(0.5, -1.0, 0.5),
    );
    assert!(unit_box_test(tri));
}

#[test]
fn coplanar_face_triangle_intersects() {
    // Exactly coplanar with the z = 1 face of the box, inside the face's
    // extent. The comparisons are non-strict, so touching counts.
    let tri = Triangle::new(
        Point3::new(0.2, 0.2, 1.0),
        Point3::new(0.8, 0.2, 1.0),
        Point3::new(0.2, 0.8, 1.0),
    );
    assert!(unit_box_test(tri));
}

#[test]
fn vertex_touching_corner_intersects() {
    let tri = Triangle::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 1.0, 1.0),
        Point3::new(1.0, 2.0, 1.0),
    );
    assert!(unit_box_test(tri));
}
