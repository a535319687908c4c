use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{FeatureId, Segment};

/// Computes the intersection parameters of a ray with an unbounded line.
///
/// Returns `(t, s)` such that `ray.point_at(t) == point + line_dir * s`,
/// with `t >= 0.0`, or `None` if the ray and the line are parallel.
#[inline]
pub fn ray_toi_with_line(
    ray: &Ray,
    point: &Point<Real>,
    line_dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let denom = ray.dir.perp(line_dir);

    if denom.abs() < DEFAULT_EPSILON {
        return None;
    }

    let dpos = *point - ray.origin;
    let t = dpos.perp(line_dir) / denom;
    let s = dpos.perp(&ray.dir) / denom;

    if t >= 0.0 {
        Some((t, s))
    } else {
        None
    }
}

/// Computes the intersection parameters of a ray with a segment.
///
/// Returns `(t, s)` where `t >= 0.0` is the ray parameter and
/// `s ∈ [0, 1]` the parameter along the segment from `seg.a` to `seg.b`,
/// or `None` when there is no intersection. Parallel overlaps report no
/// intersection, zero-length segments never intersect.
#[inline]
pub fn ray_toi_with_segment(ray: &Ray, seg: &Segment) -> Option<(Real, Real)> {
    let (t, s) = ray_toi_with_line(ray, &seg.a, &seg.scaled_direction())?;

    if s >= 0.0 && s <= 1.0 {
        Some((t, s))
    } else {
        None
    }
}

impl RayCast for Segment {
    #[inline]
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        _: bool,
    ) -> Option<RayIntersection> {
        let (t, _) = ray_toi_with_segment(ray, self)?;

        if t <= max_toi {
            let scaled_normal = self.scaled_normal();

            // Orient the normal against the ray, tagging which side was hit.
            if scaled_normal.dot(&ray.dir) <= 0.0 {
                Some(RayIntersection::new(
                    t,
                    scaled_normal.normalize(),
                    FeatureId::Face(0),
                ))
            } else {
                Some(RayIntersection::new(
                    t,
                    -scaled_normal.normalize(),
                    FeatureId::Face(1),
                ))
            }
        } else {
            None
        }
    }
}
