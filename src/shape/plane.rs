//! Definition of the plane shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// A plane described by its general equation `normal · p + d = 0`.
///
/// In 2D this describes a line in normal form. The normal is stored as
/// given: routines that require a unit normal say so in their
/// documentation, and [`Plane::normalized`] converts to that form.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Plane {
    /// The normal of the plane. Not necessarily unit-length.
    pub normal: Vector<Real>,
    /// The constant term of the plane equation.
    pub d: Real,
}

impl Plane {
    /// Creates a new plane from its normal and constant term.
    #[inline]
    pub fn new(normal: Vector<Real>, d: Real) -> Plane {
        Plane { normal, d }
    }

    /// Creates the plane containing `point` with the given normal.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: Vector<Real>) -> Plane {
        let d = -normal.dot(&point.coords);
        Plane { normal, d }
    }

    /// Evaluates the plane equation at `pt`.
    ///
    /// This equals the signed distance from `pt` to the plane only when the
    /// normal is unit-length.
    #[inline]
    pub fn evaluate(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.d
    }

    /// The signed distance from `pt` to this plane, positive on the side
    /// the normal points toward.
    ///
    /// The normal of `self` must be unit-length.
    #[inline]
    pub fn signed_distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.evaluate(pt)
    }

    /// Returns the same plane with a unit-length normal, or `None` if the
    /// normal is too small to be normalized.
    pub fn normalized(&self) -> Option<Plane> {
        let norm = self.normal.norm();

        if norm < DEFAULT_EPSILON {
            None
        } else {
            Some(Plane {
                normal: self.normal / norm,
                d: self.d / norm,
            })
        }
    }

    /// Projects `pt` onto this plane.
    ///
    /// The normal of `self` must be unit-length.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        *pt - self.normal * self.evaluate(pt)
    }
}
