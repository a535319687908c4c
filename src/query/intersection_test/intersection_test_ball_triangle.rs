use crate::query::PointQuery;
use crate::shape::{Ball, Triangle};

/// Intersection test between a ball and a triangle.
#[inline]
pub fn intersection_test_ball_triangle(ball: &Ball, triangle: &Triangle) -> bool {
    let proj = triangle.project_point(&ball.center, true);
    na::distance_squared(&proj.point, &ball.center) <= ball.radius * ball.radius
}
