use crate::math::{Real, Vector};
use crate::query::ray::ray_toi_with_segment;
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{ConvexPolygon, FeatureId};

/// Computes the first intersection of a ray with the boundary of a convex
/// polygon by walking its edges.
///
/// Every directed edge, including the implicit closing edge, is tested
/// with the two-line solve; the smallest nonnegative ray parameter whose
/// edge parameter lies in `[0, 1]` wins. Returns the time of impact
/// together with the index of the winning edge's start vertex, so callers
/// can recover adjacency.
pub fn ray_toi_with_polygon(poly: &ConvexPolygon, ray: &Ray) -> Option<(Real, u32)> {
    let mut best: Option<(Real, u32)> = None;

    for i in 0..poly.len() {
        if let Some((toi, _)) = ray_toi_with_segment(ray, &poly.edge(i)) {
            if best.map(|(best_toi, _)| toi < best_toi).unwrap_or(true) {
                best = Some((toi, i as u32));
            }
        }
    }

    best
}

impl RayCast for ConvexPolygon {
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        if solid {
            // The interior of a counter-clockwise polygon lies on the left
            // of every directed edge.
            let inside = (0..self.len()).all(|i| {
                let edge = self.edge(i);
                edge.scaled_direction().perp(&(ray.origin - edge.a)) >= 0.0
            });

            if inside {
                return Some(RayIntersection::new(0.0, Vector::zeros(), FeatureId::Face(0)));
            }
        }

        let (toi, edge_id) = ray_toi_with_polygon(self, ray)?;

        if toi <= max_toi {
            let normal = self
                .scaled_edge_normal(edge_id as usize)
                .try_normalize(crate::math::DEFAULT_EPSILON)
                .unwrap_or_else(Vector::zeros);

            Some(RayIntersection::new(toi, normal, FeatureId::Face(edge_id)))
        } else {
            None
        }
    }
}
