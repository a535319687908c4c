use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::details::ray_toi_with_ball;
use crate::query::{Ray, ShapeCastHit};
use crate::shape::{Ball, FeatureId};

/// Time of impact of two balls under translational movement.
///
/// Works for spheres in 3D and circles in 2D. A hit with a time of
/// impact of 0.0 is reported when the balls already overlap at the start
/// of the motion.
#[inline]
pub fn shape_cast_ball_ball(
    b1: &Ball,
    vel1: &Vector<Real>,
    b2: &Ball,
    vel2: &Vector<Real>,
    max_toi: Real,
) -> Option<ShapeCastHit> {
    // Cast `b1` shrunk to a point against `b2` grown by its radius, in
    // the frame where `b2` does not move.
    let vel12 = vel1 - vel2;
    let rsum = b1.radius + b2.radius;
    let ray = Ray::new(b1.center, vel12);

    let (_, toi) = ray_toi_with_ball(&b2.center, rsum, &ray, true);
    let toi = toi.filter(|toi| *toi <= max_toi)?;

    let dpt = ray.point_at(toi) - b2.center;
    let normal = dpt
        .try_normalize(DEFAULT_EPSILON)
        .unwrap_or_else(|| Vector::ith(0, 1.0));
    let witness = b2.center + vel2 * toi + normal * b2.radius;

    Some(ShapeCastHit::new(toi, witness, FeatureId::Face(0)))
}
