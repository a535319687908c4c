use crate::math::Real;
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Triangle;
#[cfg(feature = "dim3")]
use crate::math::{Vector, DEFAULT_EPSILON};
#[cfg(feature = "dim3")]
use crate::shape::{FeatureId, Segment};

impl RayCast for Triangle {
    #[inline]
    #[cfg(feature = "dim2")]
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        use crate::math::Vector;
        use crate::shape::FeatureId;

        let edges = self.edges();

        if solid {
            // Check if the ray starts inside of the triangle.
            let perp_sign1 = edges[0].scaled_direction().perp(&(ray.origin - edges[0].a)) > 0.0;
            let perp_sign2 = edges[1].scaled_direction().perp(&(ray.origin - edges[1].a)) > 0.0;
            let perp_sign3 = edges[2].scaled_direction().perp(&(ray.origin - edges[2].a)) > 0.0;

            if perp_sign1 == perp_sign2 && perp_sign1 == perp_sign3 {
                return Some(RayIntersection::new(0.0, Vector::y(), FeatureId::Face(0)));
            }
        }

        let mut best = None;
        let mut smallest_toi = Real::MAX;

        for edge in &edges {
            if let Some(inter) = edge.cast_ray_and_get_normal(ray, max_toi, solid) {
                if inter.time_of_impact < smallest_toi {
                    smallest_toi = inter.time_of_impact;
                    best = Some(inter);
                }
            }
        }

        best
    }

    #[inline]
    #[cfg(feature = "dim3")]
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        _: bool,
    ) -> Option<RayIntersection> {
        let inter = ray_intersection_with_triangle(self, ray)?.0;

        if inter.time_of_impact <= max_toi {
            Some(inter)
        } else {
            None
        }
    }
}

/// Computes the intersection between a triangle and a ray, hitting either
/// face of the triangle.
///
/// Rejects near-parallel rays (`|det| < epsilon`). The barycentric
/// numerators are compared against the determinant first; the division
/// happens only once every rejection test has passed. The impact is
/// accepted for `toi >= epsilon`.
///
/// If an intersection is found, the time of impact, the normal (oriented
/// against the ray) and the barycentric coordinates of the intersection
/// point are returned.
#[cfg(feature = "dim3")]
pub fn ray_intersection_with_triangle(
    triangle: &Triangle,
    ray: &Ray,
) -> Option<(RayIntersection, Vector<Real>)> {
    moller_trumbore(triangle, &ray.origin, &ray.dir, false, DEFAULT_EPSILON, Real::MAX)
}

/// Computes the intersection between the front face of a triangle and a
/// ray.
///
/// Front-face variant: rejects `det < epsilon`, which culls back faces
/// and near-parallel rays at once. The vertices must wind
/// counter-clockwise as seen from the side the ray comes from for a hit
/// to be reported.
#[cfg(feature = "dim3")]
pub fn ray_intersection_with_triangle_frontface(
    triangle: &Triangle,
    ray: &Ray,
) -> Option<(RayIntersection, Vector<Real>)> {
    moller_trumbore(triangle, &ray.origin, &ray.dir, true, DEFAULT_EPSILON, Real::MAX)
}

/// Computes the intersection between a triangle and a segment, hitting
/// either face of the triangle.
///
/// The segment is substituted as a ray with direction `seg.b - seg.a`,
/// and the impact is accepted for `toi ∈ [0, 1]` along that
/// parametrization.
#[cfg(feature = "dim3")]
pub fn segment_intersection_with_triangle(
    triangle: &Triangle,
    seg: &Segment,
) -> Option<(RayIntersection, Vector<Real>)> {
    moller_trumbore(triangle, &seg.a, &seg.scaled_direction(), false, 0.0, 1.0)
}

/// Computes the intersection between the front face of a triangle and a
/// segment.
#[cfg(feature = "dim3")]
pub fn segment_intersection_with_triangle_frontface(
    triangle: &Triangle,
    seg: &Segment,
) -> Option<(RayIntersection, Vector<Real>)> {
    moller_trumbore(triangle, &seg.a, &seg.scaled_direction(), true, 0.0, 1.0)
}

// Möller–Trumbore. `min_toi`/`max_toi` bound the accepted impact
// parameter; all barycentric rejections happen on numerators scaled by
// `|det|`, the `1 / det` division is deferred to the accepted case.
#[cfg(feature = "dim3")]
fn moller_trumbore(
    triangle: &Triangle,
    origin: &crate::math::Point<Real>,
    dir: &Vector<Real>,
    frontface_only: bool,
    min_toi: Real,
    max_toi: Real,
) -> Option<(RayIntersection, Vector<Real>)> {
    let edge1 = triangle.b - triangle.a;
    let edge2 = triangle.c - triangle.a;

    let pvec = dir.cross(&edge2);
    let det = edge1.dot(&pvec);

    if frontface_only && det < DEFAULT_EPSILON {
        return None;
    }

    if det.abs() < DEFAULT_EPSILON {
        return None;
    }

    let sign = if det > 0.0 { 1.0 } else { -1.0 };
    let abs_det = det * sign;

    let tvec = origin - triangle.a;
    let u = tvec.dot(&pvec) * sign;

    if u < 0.0 || u > abs_det {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = dir.dot(&qvec) * sign;

    if v < 0.0 || u + v > abs_det {
        return None;
    }

    let t = edge2.dot(&qvec) * sign;

    if t < min_toi * abs_det || t > max_toi * abs_det {
        return None;
    }

    let inv_det = 1.0 / abs_det;
    let toi = t * inv_det;
    let u = u * inv_det;
    let v = v * inv_det;

    let scaled_normal = edge1.cross(&edge2);
    let (normal, feature) = if det > 0.0 {
        (scaled_normal.normalize(), FeatureId::Face(0))
    } else {
        (-scaled_normal.normalize(), FeatureId::Face(1))
    };

    Some((
        RayIntersection::new(toi, normal, feature),
        Vector::new(1.0 - u - v, u, v),
    ))
}
