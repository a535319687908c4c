use graze3d::math::Point;
use graze3d::query::PointQueryWithLocation;
use graze3d::shape::{Triangle, TrianglePointLocation};

fn tri() -> Triangle {
    Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(0.0, 4.0, 0.0),
    )
}

#[test]
fn query_at_a_vertex_returns_that_vertex() {
    let tri = tri();
    let (proj, loc) = tri.project_point_and_get_location(&tri.a, true);

    assert_eq!(proj.point, tri.a);
    assert_eq!(loc, TrianglePointLocation::OnVertex(0));
}

#[test]
fn each_region_is_reachable() {
    let tri = tri();

    let cases = [
        (Point::new(-1.0, -1.0, 0.0), TrianglePointLocation::OnVertex(0)),
        (Point::new(6.0, -1.0, 0.0), TrianglePointLocation::OnVertex(1)),
        (Point::new(-1.0, 6.0, 0.0), TrianglePointLocation::OnVertex(2)),
    ];

    for (pt, expected) in &cases {
        let (_, loc) = tri.project_point_and_get_location(pt, true);
        assert_eq!(loc, *expected);
    }

    // Edge regions.
    let (proj, loc) = tri.project_point_and_get_location(&Point::new(2.0, -1.0, 0.0), true);
    assert_eq!(proj.point, Point::new(2.0, 0.0, 0.0));
    assert!(matches!(loc, TrianglePointLocation::OnEdge(0, _)));

    let (proj, loc) = tri.project_point_and_get_location(&Point::new(3.0, 3.0, 0.0), true);
    assert_eq!(proj.point, Point::new(2.0, 2.0, 0.0));
    assert!(matches!(loc, TrianglePointLocation::OnEdge(1, _)));

    let (proj, loc) = tri.project_point_and_get_location(&Point::new(-1.0, 2.0, 0.0), true);
    assert_eq!(proj.point, Point::new(0.0, 2.0, 0.0));
    assert!(matches!(loc, TrianglePointLocation::OnEdge(2, _)));

    // Face region, off the plane.
    let (proj, loc) = tri.project_point_and_get_location(&Point::new(1.0, 1.0, 2.0), true);
    assert_eq!(proj.point, Point::new(1.0, 1.0, 0.0));
    assert!(matches!(loc, TrianglePointLocation::OnFace(_)));
}

#[test]
fn ties_resolve_to_the_earlier_region() {
    let tri = tri();

    // Right above vertex `a`: both the vertex and its two edges are at
    // the same distance, and the vertex is checked first.
    let (proj, loc) = tri.project_point_and_get_location(&Point::new(0.0, 0.0, 5.0), true);
    assert_eq!(proj.point, tri.a);
    assert_eq!(loc, TrianglePointLocation::OnVertex(0));
}

#[test]
fn projection_is_a_fixed_point() {
    let tri = tri();
    let queries = [
        Point::new(-3.0, 1.0, 2.0),
        Point::new(2.0, 2.0, -4.0),
        Point::new(1.0, 0.5, 0.0),
        Point::new(5.0, 5.0, 1.0),
    ];

    for pt in &queries {
        let (proj, loc) = tri.project_point_and_get_location(pt, true);
        let (reproj, reloc) = tri.project_point_and_get_location(&proj.point, true);

        assert_eq!(proj.point, reproj.point);
        assert_eq!(loc, reloc);
    }
}
