//! Oriented bounding box.

use crate::math::{Matrix, Point, Real, Vector, DIM};
use crate::shape::Aabb;

/// An Oriented Bounding Box.
///
/// The box is described by its center, a rotation matrix whose columns are
/// the local axes of the box, and its half-extents measured along those
/// axes. The columns of `axes` must be mutually orthonormal; none of the
/// queries taking an `Obb` re-validate this.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The orthonormal local axes of the box, as matrix columns.
    pub axes: Matrix<Real>,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new OBB from its center, local axes, and half-extents.
    #[inline]
    pub fn new(center: Point<Real>, axes: Matrix<Real>, half_extents: Vector<Real>) -> Obb {
        Obb {
            center,
            axes,
            half_extents,
        }
    }

    /// Creates an axis-aligned OBB equivalent to the given AABB.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Obb {
        Obb {
            center: aabb.center(),
            axes: Matrix::identity(),
            half_extents: aabb.half_extents(),
        }
    }

    /// The `i`-th local axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The vertices of this box.
    #[cfg(feature = "dim3")]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mut out = [self.center; 8];

        for (k, pt) in out.iter_mut().enumerate() {
            for i in 0..DIM {
                let sign = if k & (1 << i) != 0 { 1.0 } else { -1.0 };
                *pt += self.axis(i) * (self.half_extents[i] * sign);
            }
        }

        out
    }

    /// The vertices of this box.
    #[cfg(feature = "dim2")]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        let mut out = [self.center; 4];

        for (k, pt) in out.iter_mut().enumerate() {
            for i in 0..DIM {
                let sign = if k & (1 << i) != 0 { 1.0 } else { -1.0 };
                *pt += self.axis(i) * (self.half_extents[i] * sign);
            }
        }

        out
    }
}
