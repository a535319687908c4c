use graze2d::math::{Point, Vector};
use graze2d::query::details::ray_toi_with_polygon;
use graze2d::query::Ray;
use graze2d::shape::ConvexPolygon;

fn pentagon() -> ConvexPolygon {
    ConvexPolygon::try_new(vec![
        Point::new(2.0, 0.0),
        Point::new(4.0, 2.0),
        Point::new(3.0, 4.0),
        Point::new(1.0, 4.0),
        Point::new(0.0, 2.0),
    ])
    .unwrap()
}

#[test]
fn the_closing_edge_is_walked_too() {
    let poly = pentagon();

    // Aims at the edge from the last vertex back to the first.
    let ray = Ray::new(Point::new(-2.0, 1.0), Vector::new(1.0, 0.0));
    let (_, edge_id) = ray_toi_with_polygon(&poly, &ray).unwrap();

    assert_eq!(edge_id, 4);
}

#[test]
fn the_entry_edge_wins_over_the_exit_edge() {
    let poly = pentagon();

    let ray = Ray::new(Point::new(-4.0, 2.5), Vector::new(1.0, 0.0));
    let (toi, edge_id) = ray_toi_with_polygon(&poly, &ray).unwrap();

    // Enters through the left side at x = 0.25, exits at x = 3.75.
    assert_eq!(edge_id, 3);
    assert_eq!(toi, 4.25);
}

#[test]
fn rays_from_inside_hit_the_boundary() {
    let poly = pentagon();
    let ray = Ray::new(Point::new(2.0, 2.0), Vector::new(0.0, 1.0));

    let (toi, edge_id) = ray_toi_with_polygon(&poly, &ray).unwrap();
    assert_eq!(toi, 2.0);
    assert_eq!(edge_id, 2);
}

#[test]
fn misses_report_none() {
    let poly = pentagon();
    let ray = Ray::new(Point::new(-2.0, 6.0), Vector::new(1.0, 0.0));

    assert!(ray_toi_with_polygon(&poly, &ray).is_none());
}
