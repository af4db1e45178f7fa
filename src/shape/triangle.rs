//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        *Self::from_array(&arr)
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates the reference to a triangle from the reference to an array of three points.
    pub fn from_array(arr: &[Point<Real>; 3]) -> &Triangle {
        unsafe { std::mem::transmute(arr) }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns this triangle shifted by `shift`.
    ///
    /// The voxelizers use this to express triangle vertices relative to a
    /// grid cell's minimum corner.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Triangle {
        Triangle::new(self.a + shift, self.b + shift, self.c + shift)
    }

    /// A vector normal to this triangle, with a norm equal to twice its area.
    ///
    /// The normal follows the winding order of the vertices: it is the cross
    /// product of the first two edges. Degenerate triangles yield the zero
    /// vector.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }
}
