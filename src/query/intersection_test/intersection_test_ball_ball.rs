use crate::shape::Ball;

/// Intersection test between two balls.
///
/// Balls sharing only a boundary point are intersecting. This test is
/// symmetric.
#[inline]
pub fn intersection_test_ball_ball(b1: &Ball, b2: &Ball) -> bool {
    let distance_squared = na::distance_squared(&b1.center, &b2.center);
    let sum_radius = b1.radius + b2.radius;
    distance_squared <= sum_radius * sum_radius
}
