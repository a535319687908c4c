use std::mem;

use crate::math::{Real, Vector, DIM};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Aabb, FeatureId, Segment};

/// Classification of a segment against an AABB.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentAabbLocation {
    /// The segment lies entirely outside of the box.
    Outside,
    /// The segment lies entirely inside of the box.
    ///
    /// An endpoint lying exactly on a face of the box counts as inside.
    Inside,
    /// Exactly one endpoint is inside the box; the parameter of the
    /// boundary crossing is given.
    OneIntersection(Real),
    /// Both endpoints are outside but the segment crosses two faces; the
    /// parameters of both crossings are given in increasing order.
    TwoIntersections(Real, Real),
}

// Slab clipping of the line `origin + t * dir` against `aabb`.
//
// A zero direction component makes the reciprocal infinite, which the
// interval arithmetic below relies on; `0.0 * inf` produces a NaN whose
// comparisons are all false, so such an axis leaves the interval and the
// recorded faces untouched instead of poisoning them.
//
// Returns the unclamped `(tmin, tmax)` interval together with the
// `(axis, is_mins_face)` description of the faces realizing each bound, or
// `None` when `tmin < tmax` fails to hold.
#[allow(clippy::type_complexity)]
fn clip_line_aabb(aabb: &Aabb, ray: &Ray) -> Option<(Real, Real, (usize, bool), (usize, bool))> {
    let mut tmin = -Real::INFINITY;
    let mut tmax = Real::INFINITY;
    let mut near_face = (0, true);
    let mut far_face = (0, false);

    for i in 0..DIM {
        let inv_d = 1.0 / ray.dir[i];
        let mut t1 = (aabb.mins[i] - ray.origin[i]) * inv_d;
        let mut t2 = (aabb.maxs[i] - ray.origin[i]) * inv_d;
        let mut near_is_mins = true;

        if inv_d < 0.0 {
            mem::swap(&mut t1, &mut t2);
            near_is_mins = false;
        }

        if t1 > tmin {
            tmin = t1;
            near_face = (i, near_is_mins);
        }

        if t2 < tmax {
            tmax = t2;
            far_face = (i, !near_is_mins);
        }

        if tmin >= tmax {
            return None;
        }
    }

    Some((tmin, tmax, near_face, far_face))
}

fn face_id(axis: usize, is_mins: bool) -> FeatureId {
    if is_mins {
        FeatureId::Face((axis + DIM) as u32)
    } else {
        FeatureId::Face(axis as u32)
    }
}

fn face_normal(axis: usize, is_mins: bool) -> Vector<Real> {
    let mut normal = Vector::zeros();
    normal[axis] = if is_mins { -1.0 } else { 1.0 };
    normal
}

/// Computes the entry and exit parameters of a ray through an AABB using
/// the slab method.
///
/// The interval is not clamped: a ray whose origin is inside the box
/// reports `tmin < 0.0 < tmax`. Returns `None` when the interval is empty
/// (`tmin < tmax` must hold strictly) or lies entirely behind the origin.
pub fn ray_toi_interval_with_aabb(aabb: &Aabb, ray: &Ray) -> Option<(Real, Real)> {
    let (tmin, tmax, _, _) = clip_line_aabb(aabb, ray)?;

    if tmax < 0.0 {
        None
    } else {
        Some((tmin, tmax))
    }
}

/// Classifies a segment against an AABB.
///
/// The crossing parameters are expressed along the segment
/// parametrization, i.e. `seg.a` is at 0 and `seg.b` at 1. An endpoint
/// exactly on a face of the box counts as inside.
pub fn segment_aabb_location(seg: &Segment, aabb: &Aabb) -> SegmentAabbLocation {
    let ray = Ray::new(seg.a, seg.scaled_direction());

    let (tmin, tmax, _, _) = match clip_line_aabb(aabb, &ray) {
        Some(clip) => clip,
        None => return SegmentAabbLocation::Outside,
    };

    if tmax < 0.0 || tmin > 1.0 {
        return SegmentAabbLocation::Outside;
    }

    let start_inside = tmin <= 0.0;
    let end_inside = tmax >= 1.0;

    match (start_inside, end_inside) {
        (true, true) => SegmentAabbLocation::Inside,
        (true, false) => SegmentAabbLocation::OneIntersection(tmax),
        (false, true) => SegmentAabbLocation::OneIntersection(tmin),
        (false, false) => SegmentAabbLocation::TwoIntersections(tmin, tmax),
    }
}

impl RayCast for Aabb {
    fn cast_ray(&self, ray: &Ray, max_toi: Real, solid: bool) -> Option<Real> {
        let (tmin, tmax, _, _) = clip_line_aabb(self, ray)?;

        if tmax < 0.0 || tmin > max_toi {
            return None;
        }

        if tmin < 0.0 {
            if solid {
                Some(0.0)
            } else if tmax <= max_toi {
                Some(tmax)
            } else {
                None
            }
        } else {
            Some(tmin)
        }
    }

    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let (tmin, tmax, near, far) = clip_line_aabb(self, ray)?;

        if tmax < 0.0 || tmin > max_toi {
            return None;
        }

        if tmin < 0.0 {
            if solid {
                Some(RayIntersection::new(
                    0.0,
                    Vector::zeros(),
                    face_id(far.0, far.1),
                ))
            } else if tmax <= max_toi {
                Some(RayIntersection::new(
                    tmax,
                    face_normal(far.0, far.1),
                    face_id(far.0, far.1),
                ))
            } else {
                None
            }
        } else {
            Some(RayIntersection::new(
                tmin,
                face_normal(near.0, near.1),
                face_id(near.0, near.1),
            ))
        }
    }
}
