use crate::query::sat;
use crate::shape::ConvexPolygon;

/// Intersection test between two convex polygons.
///
/// Polygons sharing only a boundary point or edge are intersecting.
#[inline]
pub fn intersection_test_polygon_polygon(poly1: &ConvexPolygon, poly2: &ConvexPolygon) -> bool {
    sat::polygon_polygon_separating_edge_oneway(poly1, poly2).is_none()
        && sat::polygon_polygon_separating_edge_oneway(poly2, poly1).is_none()
}
