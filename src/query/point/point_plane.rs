use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Plane;

impl PointQuery for Plane {
    /// Projects a point on the plane.
    ///
    /// The plane is normalized internally; a plane with a degenerate
    /// normal leaves every point where it is, reported as outside.
    #[inline]
    fn project_point(&self, pt: &Point<Real>, _solid: bool) -> PointProjection {
        match self.normalized() {
            Some(plane) => {
                let dist = plane.signed_distance_to_point(pt);
                PointProjection::new(dist == 0.0, *pt - plane.normal * dist)
            }
            None => PointProjection::new(false, *pt),
        }
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>, _solid: bool) -> Real {
        match self.normalized() {
            Some(plane) => plane.signed_distance_to_point(pt).abs(),
            None => 0.0,
        }
    }
}
