use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Ball;

impl PointQuery for Ball {
    #[inline]
    fn project_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let dpt = pt - self.center;
        let dist_sq = dpt.norm_squared();
        let inside = dist_sq <= self.radius * self.radius;

        if inside && solid {
            PointProjection::new(true, *pt)
        } else {
            let dist = dist_sq.sqrt();

            let proj = if dist < DEFAULT_EPSILON {
                // The point is at the center: any boundary point is closest.
                self.center + Vector::ith(0, self.radius)
            } else {
                self.center + dpt * (self.radius / dist)
            };

            PointProjection::new(inside, proj)
        }
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>, solid: bool) -> Real {
        let dist = na::distance(pt, &self.center) - self.radius;

        if solid && dist < 0.0 {
            0.0
        } else {
            dist
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        Ball::contains_point(self, pt)
    }
}
