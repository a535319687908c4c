//! Definition of the triangle shape.

use crate::math::{Point, Real};
use crate::shape::Segment;

#[cfg(feature = "dim3")]
use {crate::math::Vector, na::Unit};

/// A triangle shape.
///
/// The winding order of the vertices is significant: the front-face
/// culling and swept-sphere routines treat `(b - a) × (c - a)` as the
/// outward normal, i.e. the vertices are counter-clockwise when seen from
/// the side the normal points toward.
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

/// Description of the location of a point on a triangle.
///
/// The seven regions are mutually exclusive: three vertices, three edges,
/// and the face interior.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-th edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment CA.
    OnEdge(u32, [Real; 2]),
    /// The point lies on the triangle interior.
    OnFace([Real; 3]),
}

impl TrianglePointLocation {
    /// The barycentric coordinates corresponding to this point location.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        let mut bcoords = [0.0; 3];

        match self {
            TrianglePointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            TrianglePointLocation::OnEdge(i, uv) => {
                let idx = match i {
                    0 => (0, 1),
                    1 => (1, 2),
                    2 => (2, 0),
                    _ => unreachable!(),
                };

                bcoords[idx.0] = uv[0];
                bcoords[idx.1] = uv[1];
            }
            TrianglePointLocation::OnFace(uvw) => {
                bcoords[0] = uvw[0];
                bcoords[1] = uvw[1];
                bcoords[2] = uvw[2];
            }
        }

        bcoords
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three edges of this triangle: AB, BC, and CA.
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The normal of this triangle scaled by twice its area.
    ///
    /// Points toward the side from which the vertices appear
    /// counter-clockwise.
    #[cfg(feature = "dim3")]
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    #[cfg(feature = "dim3")]
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[cfg(feature = "dim3")]
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() / 2.0
    }

    /// The area of this triangle.
    #[cfg(feature = "dim2")]
    #[inline]
    pub fn area(&self) -> Real {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.perp(&ac).abs() / 2.0
    }

    /// The signed distance from `pt` to the plane of this triangle,
    /// positive when the vertices appear counter-clockwise from `pt`.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[cfg(feature = "dim3")]
    pub fn signed_distance_to_plane(&self, pt: &Point<Real>) -> Option<Real> {
        let normal = self.normal()?;
        Some(normal.dot(&(pt - self.a)))
    }

    /// Computes the point at the given location.
    pub fn point_at(&self, location: &TrianglePointLocation) -> Point<Real> {
        let bcoords = location.barycentric_coordinates();
        self.a * bcoords[0] + self.b.coords * bcoords[1] + self.c.coords * bcoords[2]
    }
}
