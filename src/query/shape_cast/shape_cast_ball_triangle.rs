use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::ShapeCastHit;
use crate::shape::{Ball, FeatureId, Triangle};
use crate::utils;

/// Time of impact of a translating sphere on a triangle.
///
/// The triangle vertices must wind counter-clockwise as seen from the
/// side the sphere approaches from. A sphere whose velocity has no
/// component along the triangle normal (`|normal · vel| < epsilon`)
/// reports no hit, even when it already overlaps the triangle plane: the
/// parallel case is resolved by this explicit branch, never by the plane
/// solve.
///
/// The first contact is classified against the face, the three vertices,
/// and the three edges; the reported feature identifies which one
/// produced it.
pub fn shape_cast_ball_triangle(
    ball: &Ball,
    vel: &Vector<Real>,
    triangle: &Triangle,
    max_toi: Real,
) -> Option<ShapeCastHit> {
    let normal = match triangle.normal() {
        Some(normal) => normal,
        None => {
            log::debug!("Skipping the swept-sphere cast on a degenerate triangle.");
            return None;
        }
    };

    let normal_vec = normal.into_inner();
    let dist = normal_vec.dot(&(ball.center - triangle.a));
    let denom = normal_vec.dot(vel);

    if denom.abs() < DEFAULT_EPSILON {
        // The sphere moves parallel to the triangle plane.
        return None;
    }

    // Time at which the sphere first touches the plane, coming from its
    // current side. A sphere already within its radius of the plane
    // touches it at time zero. No triangle feature can be reached before
    // the plane.
    let t0 = if dist.abs() <= ball.radius {
        0.0
    } else {
        (ball.radius.copysign(dist) - dist) / denom
    };

    if t0 > max_toi {
        return None;
    }

    if t0 >= 0.0 {
        let touch = ball.center + vel * t0 - normal_vec * ball.radius.copysign(dist);

        if contains_plane_point(triangle, &normal_vec, &touch) {
            return Some(ShapeCastHit::new(t0, touch, FeatureId::Face(0)));
        }
    }

    // The plane touch point misses the face: the first contact, if any,
    // happens on a vertex or on an edge.
    let mut best: Option<ShapeCastHit> = None;
    let mut best_toi = max_toi;
    let vel_sq = vel.norm_squared();

    for (i, vtx) in [triangle.a, triangle.b, triangle.c].iter().enumerate() {
        let dpt = ball.center - vtx;
        let a = vel_sq;
        let b = 2.0 * vel.dot(&dpt);
        let c = dpt.norm_squared() - ball.radius * ball.radius;

        if let Some(toi) = utils::lowest_root_in_interval(a, b, c, best_toi) {
            best = Some(ShapeCastHit::new(toi, *vtx, FeatureId::Vertex(i as u32)));
            best_toi = toi;
        }
    }

    let edges = [
        (triangle.a, triangle.b, 0u32),
        (triangle.b, triangle.c, 1),
        (triangle.c, triangle.a, 2),
    ];

    for (p1, p2, id) in &edges {
        let edge = p2 - p1;
        let w0 = ball.center - p1;

        let edge_sq = edge.norm_squared();
        let edge_vel = edge.dot(vel);
        let edge_w0 = edge.dot(&w0);

        // Sweep against the infinite cylinder around the edge line.
        let a = edge_sq * vel_sq - edge_vel * edge_vel;
        let b = 2.0 * (edge_sq * vel.dot(&w0) - edge_w0 * edge_vel);
        let c = edge_sq * (w0.norm_squared() - ball.radius * ball.radius) - edge_w0 * edge_w0;

        if let Some(toi) = utils::lowest_root_in_interval(a, b, c, best_toi) {
            // The closest-approach parameter must lie within the edge.
            let f = (edge_w0 + edge_vel * toi) / edge_sq;

            if f >= 0.0 && f <= 1.0 {
                best = Some(ShapeCastHit::new(toi, p1 + edge * f, FeatureId::Edge(*id)));
                best_toi = toi;
            }
        }
    }

    best
}

// The query point must lie on the triangle plane; containment is decided
// by the sign of each edge cross product against the normal, boundary
// included.
fn contains_plane_point(triangle: &Triangle, normal: &Vector<Real>, pt: &Point<Real>) -> bool {
    let edges = [
        (triangle.a, triangle.b),
        (triangle.b, triangle.c),
        (triangle.c, triangle.a),
    ];

    edges
        .iter()
        .all(|(p1, p2)| (p2 - p1).cross(&(pt - p1)).dot(normal) >= 0.0)
}
