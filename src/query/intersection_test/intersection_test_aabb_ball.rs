use crate::math::{Real, DIM};
use crate::shape::{Aabb, Ball};

/// Intersection test between an AABB and a ball.
#[inline]
pub fn intersection_test_aabb_ball(aabb: &Aabb, ball: &Ball) -> bool {
    // Squared distance from the ball center to the box.
    let mut dist_sq: Real = 0.0;

    for i in 0..DIM {
        let v = ball.center[i];

        if v < aabb.mins[i] {
            let d = aabb.mins[i] - v;
            dist_sq += d * d;
        } else if v > aabb.maxs[i] {
            let d = v - aabb.maxs[i];
            dist_sq += d * d;
        }
    }

    dist_sq <= ball.radius * ball.radius
}
