//! Traits and structures for point projection.

use crate::math::{Point, Real};

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> PointProjection {
        PointProjection { is_inside, point }
    }
}

/// Trait of objects that can be tested for point inclusion and projection.
pub trait PointQuery {
    /// Projects a point on `self`.
    ///
    /// If the point is inside of `self` and `solid` is `true`, the point
    /// is returned unchanged; with `solid` set to `false` it is projected
    /// on the shape boundary instead.
    fn project_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection;

    /// Computes the minimal distance between a point and `self`.
    ///
    /// With `solid` set to `true` the distance is zero for points inside of
    /// `self`; otherwise the (negated) distance to the boundary is
    /// returned.
    fn distance_to_point(&self, pt: &Point<Real>, solid: bool) -> Real {
        let proj = self.project_point(pt, solid);
        let dist = na::distance(pt, &proj.point);

        if solid || !proj.is_inside {
            dist
        } else {
            -dist
        }
    }

    /// Tests that the given point is inside of `self`.
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_point(pt, true).is_inside
    }
}

/// Trait of objects that can be projected on, reporting the shape feature
/// holding the projection.
pub trait PointQueryWithLocation {
    /// Additional shape-specific location information of the projection.
    type Location;

    /// Projects a point on `self`, returning the feature the projection
    /// lies on.
    fn project_point_and_get_location(
        &self,
        pt: &Point<Real>,
        solid: bool,
    ) -> (PointProjection, Self::Location);
}
