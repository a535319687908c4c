// A classic defect in hand-rolled separating-axis scans is to return
// early as soon as one *overlap* is observed mid-scan, which is the
// opposite of the correct short-circuit (early exit on a confirmed
// *gap*). `polygon_polygon_separating_edge_oneway` uses the gap-only
// exit; the tests below pin that semantics by comparing against a
// brute-force overlap oracle (edge intersections + mutual containment)
// on randomized convex polygons.

use graze2d::math::{Point, Real, Vector};
use graze2d::query::details::{intersection_test_polygon_polygon, ray_toi_with_segment};
use graze2d::query::Ray;
use graze2d::shape::{ConvexPolygon, Segment};

fn contains_point(poly: &ConvexPolygon, pt: &Point<Real>) -> bool {
    (0..poly.len()).all(|i| {
        let edge = poly.edge(i);
        edge.scaled_direction().perp(&(pt - edge.a)) >= 0.0
    })
}

fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let ray = Ray::new(s1.a, s1.scaled_direction());
    match ray_toi_with_segment(&ray, s2) {
        Some((t, _)) => t <= 1.0,
        None => false,
    }
}

// Brute-force overlap reference: two convex polygons overlap iff some
// pair of edges intersects, or one contains a vertex of the other.
fn polygons_overlap_reference(p1: &ConvexPolygon, p2: &ConvexPolygon) -> bool {
    for i in 0..p1.len() {
        for j in 0..p2.len() {
            if segments_intersect(&p1.edge(i), &p2.edge(j)) {
                return true;
            }
        }
    }

    contains_point(p2, &p1.points()[0]) || contains_point(p1, &p2.points()[0])
}

fn rand_rect(rng: &mut oorandom::Rand32) -> ConvexPolygon {
    let center = Vector::new(
        rng.rand_float() * 8.0 - 4.0,
        rng.rand_float() * 8.0 - 4.0,
    );
    let half_w = rng.rand_float() * 1.5 + 0.2;
    let half_h = rng.rand_float() * 1.5 + 0.2;
    let angle = rng.rand_float() * std::f32::consts::TAU;
    let (sin, cos) = angle.sin_cos();

    let rotate = |x: Real, y: Real| {
        Point::from(Vector::new(x * cos - y * sin, x * sin + y * cos) + center)
    };

    ConvexPolygon::try_new(vec![
        rotate(-half_w, -half_h),
        rotate(half_w, -half_h),
        rotate(half_w, half_h),
        rotate(-half_w, half_h),
    ])
    .unwrap()
}

#[test]
fn sat_matches_the_brute_force_reference() {
    let mut rng = oorandom::Rand32::new(4321);

    for _ in 0..1000 {
        let p1 = rand_rect(&mut rng);
        let p2 = rand_rect(&mut rng);

        assert_eq!(
            intersection_test_polygon_polygon(&p1, &p2),
            polygons_overlap_reference(&p1, &p2),
        );
    }
}

#[test]
fn polygon_intersection_is_symmetric() {
    let mut rng = oorandom::Rand32::new(987);

    for _ in 0..1000 {
        let p1 = rand_rect(&mut rng);
        let p2 = rand_rect(&mut rng);

        assert_eq!(
            intersection_test_polygon_polygon(&p1, &p2),
            intersection_test_polygon_polygon(&p2, &p1)
        );
    }
}

#[test]
fn disjoint_and_nested_polygons() {
    let small = ConvexPolygon::try_new(vec![
        Point::new(1.0, 1.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(1.0, 2.0),
    ])
    .unwrap();
    let big = ConvexPolygon::try_new(vec![
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(0.0, 5.0),
    ])
    .unwrap();
    let far = ConvexPolygon::try_new(vec![
        Point::new(10.0, 0.0),
        Point::new(11.0, 0.0),
        Point::new(11.0, 1.0),
        Point::new(10.0, 1.0),
    ])
    .unwrap();

    // Full containment has no edge intersections but is an overlap.
    assert!(intersection_test_polygon_polygon(&small, &big));
    assert!(intersection_test_polygon_polygon(&big, &small));
    assert!(!intersection_test_polygon_polygon(&small, &far));
}
