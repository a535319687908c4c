use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::shape::ConvexPolygon;

fn project_polygon(poly: &ConvexPolygon, axis: &Vector<Real>) -> (Real, Real) {
    let mut min = Real::MAX;
    let mut max = -Real::MAX;

    for pt in poly.points() {
        let proj = axis.dot(&pt.coords);
        min = min.min(proj);
        max = max.max(proj);
    }

    (min, max)
}

/// Finds an edge of `poly1` whose normal separates the two polygons, if
/// any.
///
/// For each edge normal of `poly1`, every vertex of both polygons is
/// projected before the axis is judged: the scan exits early only on a
/// confirmed gap between the two full projection intervals, never on an
/// overlap observed mid-projection. A full separating-axis test calls
/// this twice, swapping the polygons.
///
/// Intervals touching exactly do not count as a gap.
pub fn polygon_polygon_separating_edge_oneway(
    poly1: &ConvexPolygon,
    poly2: &ConvexPolygon,
) -> Option<u32> {
    for i in 0..poly1.len() {
        let normal = poly1.scaled_edge_normal(i);

        if normal.norm_squared() < DEFAULT_EPSILON {
            log::debug!("Skipping the normal of a degenerate polygon edge.");
            continue;
        }

        let (min1, max1) = project_polygon(poly1, &normal);
        let (min2, max2) = project_polygon(poly2, &normal);

        if max1 < min2 || max2 < min1 {
            return Some(i as u32);
        }
    }

    None
}
