use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::ShapeCastHit;
use crate::shape::{Ball, FeatureId, Plane};

/// Time of impact of a translating ball on a plane.
///
/// The plane normal must be unit-length. A ball already within its
/// radius of the plane reports a hit at time 0.0; a ball moving parallel
/// to the plane (`|normal · vel| < epsilon`) or away from it reports no
/// hit.
pub fn shape_cast_ball_plane(
    ball: &Ball,
    vel: &Vector<Real>,
    plane: &Plane,
    max_toi: Real,
) -> Option<ShapeCastHit> {
    let dist = plane.signed_distance_to_point(&ball.center);

    if dist.abs() <= ball.radius {
        return Some(ShapeCastHit::new(
            0.0,
            plane.project_point(&ball.center),
            FeatureId::Face(0),
        ));
    }

    let denom = plane.normal.dot(vel);

    if denom.abs() < DEFAULT_EPSILON {
        // Moving parallel to the plane.
        return None;
    }

    if denom * dist >= 0.0 {
        // Moving away from the plane.
        return None;
    }

    // First touch happens when the signed center distance reaches the
    // radius, on the side the ball comes from.
    let toi = (ball.radius.copysign(dist) - dist) / denom;

    if toi > max_toi {
        return None;
    }

    let witness = ball.center + vel * toi - plane.normal * ball.radius.copysign(dist);

    Some(ShapeCastHit::new(toi, witness, FeatureId::Face(0)))
}
