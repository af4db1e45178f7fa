//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum
/// corners. Its edges are always parallel to the coordinate axes, making
/// intersection tests against it very cheap. Both voxelizers of this crate
/// work exclusively with AABB regions: grid cells and octree nodes are AABBs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// `mins` must be smaller than `maxs` on every axis.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB, i.e. its dimension along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() * 0.5
    }

    /// The eight corner vertices of this AABB.
    ///
    /// The i-th vertex is shifted away from `self.mins` along the axes selected
    /// by the bits of `i`: bit 0 selects X, bit 1 selects Y, bit 2 selects Z.
    ///
    /// ```text
    ///    y           2 - 3
    ///    |         6 − 7 |
    ///    ___ x     |   | 1
    ///   /          4 - 5
    ///  z
    /// ```
    ///
    /// [`Aabb::octant`] uses the same ordering, so the i-th octant of an AABB
    /// has the AABB's i-th vertex as one of its own corners.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// One of the eight sub-cells obtained by splitting this AABB at its center.
    ///
    /// `octant` must be in `0..8` and maps its bits to axes with the ordering
    /// of [`Aabb::vertices`].
    #[inline]
    pub fn octant(&self, octant: usize) -> Aabb {
        let half = self.half_extents();
        let shift = Vector::new(
            (octant & 0b001) as Real * half.x,
            ((octant >> 1) & 0b001) as Real * half.y,
            ((octant >> 2) & 0b001) as Real * half.z,
        );
        let mins = self.mins + shift;
        Aabb::new(mins, mins + half)
    }
}
