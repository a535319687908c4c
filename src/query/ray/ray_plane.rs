use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{FeatureId, Plane};

/// Computes the toi of an unbounded line with a plane.
///
/// The plane normal does not need to be unit-length: the scale cancels
/// out of the solve. Returns `None` when the line is parallel to the
/// plane, on either side.
#[inline]
pub fn line_toi_with_plane(
    plane: &Plane,
    line_origin: &Point<Real>,
    line_dir: &Vector<Real>,
) -> Option<Real> {
    let denom = plane.normal.dot(line_dir);

    if relative_eq!(denom, 0.0) {
        None
    } else {
        Some(-plane.evaluate(line_origin) / denom)
    }
}

/// Computes the toi of a ray with a plane, from either side.
#[inline]
pub fn ray_toi_with_plane(plane: &Plane, ray: &Ray) -> Option<Real> {
    if let Some(t) = line_toi_with_plane(plane, &ray.origin, &ray.dir) {
        if t >= 0.0 {
            return Some(t);
        }
    }

    None
}

/// Computes the toi of a ray with the front face of a plane.
///
/// One-sided variant: only rays travelling against the plane normal can
/// hit, so approaches with `normal · dir > -epsilon` (back-face and
/// near-parallel ones) are rejected. The plane normal must be unit-length
/// and the cull threshold is absolute, so the ray direction should be
/// normalized as well.
#[inline]
pub fn ray_toi_with_plane_frontface(plane: &Plane, ray: &Ray) -> Option<Real> {
    let denom = plane.normal.dot(&ray.dir);

    if denom > -DEFAULT_EPSILON {
        return None;
    }

    let t = -plane.evaluate(&ray.origin) / denom;

    if t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

impl RayCast for Plane {
    #[inline]
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        _: bool,
    ) -> Option<RayIntersection> {
        let plane = self.normalized()?;
        let t = ray_toi_with_plane(&plane, ray)?;

        if t <= max_toi {
            let normal = if plane.evaluate(&ray.origin) >= 0.0 {
                plane.normal
            } else {
                -plane.normal
            };

            Some(RayIntersection::new(t, normal, FeatureId::Face(0)))
        } else {
            None
        }
    }
}
