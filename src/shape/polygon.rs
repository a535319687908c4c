//! Definition of the 2D convex polygon shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Segment;
use thiserror::Error;

/// Error indicating that a convex polygon could not be built from the
/// given vertices.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexPolygonError {
    /// Fewer than three vertices were given.
    #[error("a convex polygon requires at least 3 vertices")]
    TooFewVertices,
    /// The vertices are not in counter-clockwise convex position.
    #[error("the vertices do not describe a counter-clockwise convex polygon")]
    NotConvex,
}

/// A 2D convex polygon.
///
/// The vertices are in counter-clockwise order and the last vertex is
/// implicitly connected to the first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
}

impl ConvexPolygon {
    /// Creates a convex polygon from a counter-clockwise sequence of
    /// vertices.
    ///
    /// Fails if fewer than three vertices are given, or if two consecutive
    /// edges turn clockwise. Collinear consecutive edges are accepted.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<ConvexPolygon, ConvexPolygonError> {
        if points.len() < 3 {
            return Err(ConvexPolygonError::TooFewVertices);
        }

        let n = points.len();
        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            let turn = (curr - prev).perp(&(next - curr));

            if turn < -DEFAULT_EPSILON {
                return Err(ConvexPolygonError::NotConvex);
            }
        }

        Ok(ConvexPolygon { points })
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this polygon has no vertices. Always `false` for a
    /// successfully constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `i`-th directed edge of this polygon, including the implicit
    /// closing edge from the last vertex back to the first.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let a = self.points[i];
        let b = self.points[(i + 1) % self.points.len()];
        Segment::new(a, b)
    }

    /// The not-normalized outward normal of the `i`-th edge.
    #[inline]
    pub fn scaled_edge_normal(&self, i: usize) -> Vector<Real> {
        self.edge(i).scaled_normal()
    }
}
