//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box.
///
/// In 2D this is an axis-aligned rectangle. The box is defined by its
/// extremal corners and the invariant `mins[i] <= maxs[i]` must hold on
/// every axis; constructors do not reorder the corners.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point<Real>,
    /// The point with the greatest coordinates of this AABB.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its extremal corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing the given set of points.
    ///
    /// Returns a degenerate AABB with `mins > maxs` if `pts` is empty.
    pub fn from_points<'a, I: IntoIterator<Item = &'a Point<Real>>>(pts: I) -> Aabb {
        let mut mins = Point::from(Vector::repeat(Real::MAX));
        let mut maxs = Point::from(Vector::repeat(-Real::MAX));

        for pt in pts {
            mins = mins.coords.inf(&pt.coords).into();
            maxs = maxs.coords.sup(&pt.coords).into();
        }

        Aabb::new(mins, maxs)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) / 2.0
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB (its area in 2D).
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents().product()
    }

    /// Does this AABB contain the given point?
    ///
    /// Points exactly on the boundary are inside.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        for i in 0..DIM {
            if pt[i] < self.mins[i] || pt[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does this AABB intersect `other`?
    ///
    /// Boxes sharing only a boundary are intersecting. This test is
    /// symmetric: `a.intersects(&b) == b.intersects(&a)`.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.maxs[i] || other.mins[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does this AABB fully contain `other`?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if other.mins[i] < self.mins[i] || other.maxs[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}
