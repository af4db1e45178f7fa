use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// Projects `points` onto `axis` and returns the projection interval.
///
/// The accumulation happens in double precision even when `Real` is `f32`, so
/// that the interval comparisons of the separating-axis tests don't report
/// false negatives at coplanar boundaries.
fn project(points: &[Point<Real>], axis: &Vector<Real>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for pt in points {
        let val = axis.x as f64 * pt.x as f64
            + axis.y as f64 * pt.y as f64
            + axis.z as f64 * pt.z as f64;
        min = min.min(val);
        max = max.max(val);
    }

    (min, max)
}

/// Tests if a triangle intersects an AABB, using the Separating Axis Theorem.
///
/// Thirteen candidate axes are checked: the three box face normals, the
/// triangle normal, and the nine cross products of the triangle edges with the
/// box edge directions. The triangle intersects the box iff none of them
/// separates the two shapes. All interval comparisons are exact and
/// non-strict, so shapes that merely touch count as intersecting.
///
/// `aabb_vertices` must be the corner vertices of `aabb` in the ordering of
/// [`Aabb::vertices`]; they are taken as an argument so that callers testing
/// many triangles against the same box compute them only once. Similarly,
/// `normal` is the triangle's precomputed unit normal.
///
/// A zero `normal` (from a degenerate triangle), as well as the zero axes
/// produced by cross products of parallel directions, project every vertex to
/// the zero interval. Such axes never separate, so degenerate triangles are
/// treated as possibly-intersecting rather than rejected.
pub fn intersection_test_aabb_triangle(
    aabb: &Aabb,
    aabb_vertices: &[Point<Real>; 8],
    triangle: &Triangle,
    normal: &Vector<Real>,
) -> bool {
    let tri_vertices = triangle.vertices();

    // Test the box face normals, i.e. the coordinate axes.
    for i in 0..3 {
        let (tri_min, tri_max) = project(&tri_vertices, &Vector::ith(i, 1.0));

        if tri_max < aabb.mins[i] as f64 || tri_min > aabb.maxs[i] as f64 {
            return false;
        }
    }

    // Test the triangle normal. The triangle projects to a single value on
    // it: its plane offset.
    let (tri_offset, _) = project(&tri_vertices[..1], normal);
    let (box_min, box_max) = project(aabb_vertices, normal);

    if box_max < tri_offset || box_min > tri_offset {
        return false;
    }

    // Test the cross products of the triangle edges with the box edge
    // directions. The box edge directions are the coordinate axes again, so
    // the cross products unfold to component shuffles.
    let edges = [
        tri_vertices[0] - tri_vertices[1],
        tri_vertices[1] - tri_vertices[2],
        tri_vertices[2] - tri_vertices[0],
    ];

    for edge in &edges {
        // edge.cross(Vector::{x, y, z}())
        let axes = [
            Vector::new(0.0, edge.z, -edge.y),
            Vector::new(-edge.z, 0.0, edge.x),
            Vector::new(edge.y, -edge.x, 0.0),
        ];

        for axis in &axes {
            let (box_min, box_max) = project(aabb_vertices, axis);
            let (tri_min, tri_max) = project(&tri_vertices, axis);

            if box_max < tri_min || box_min > tri_max {
                return false;
            }
        }
    }

    // No separating axis found.
    true
}
