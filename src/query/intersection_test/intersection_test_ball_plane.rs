use crate::shape::{Ball, Plane};

/// Intersection test between a ball and a plane.
///
/// The plane normal must be unit-length.
#[inline]
pub fn intersection_test_ball_plane(ball: &Ball, plane: &Plane) -> bool {
    plane.signed_distance_to_point(&ball.center).abs() <= ball.radius
}
