use graze2d::math::Point;
use graze2d::na;
use graze2d::query::details::{
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
};
use graze2d::shape::{Segment, SegmentPointLocation};

#[test]
fn crossing_segments_meet_at_a_point() {
    let seg1 = Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    let seg2 = Segment::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0));

    let (p1, p2) = closest_points_segment_segment(&seg1, &seg2);
    assert_eq!(p1, Point::new(0.0, 0.0));
    assert_eq!(p1, p2);
}

#[test]
fn parallel_segments_clamp_to_endpoints() {
    let seg1 = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
    let seg2 = Segment::new(Point::new(3.0, 1.0), Point::new(5.0, 1.0));

    let (loc1, loc2) = closest_points_segment_segment_with_locations(&seg1, &seg2);
    assert_eq!(loc1, SegmentPointLocation::OnVertex(1));
    assert_eq!(loc2, SegmentPointLocation::OnVertex(0));

    let (p1, p2) = closest_points_segment_segment(&seg1, &seg2);
    assert_eq!(p1, Point::new(2.0, 0.0));
    assert_eq!(p2, Point::new(3.0, 1.0));
}

#[test]
fn interior_to_interior_distance() {
    let seg1 = Segment::new(Point::new(-2.0, 1.0), Point::new(2.0, 1.0));
    let seg2 = Segment::new(Point::new(0.0, -3.0), Point::new(0.0, 0.0));

    let (loc1, loc2) = closest_points_segment_segment_with_locations(&seg1, &seg2);

    assert_eq!(loc1, SegmentPointLocation::OnEdge([0.5, 0.5]));
    assert_eq!(loc2, SegmentPointLocation::OnVertex(1));

    let (p1, p2) = closest_points_segment_segment(&seg1, &seg2);
    assert_eq!(na::distance(&p1, &p2), 1.0);
}

#[test]
fn degenerate_segments_behave_like_points() {
    let point_like = Segment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
    let seg = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));

    let (p1, p2) = closest_points_segment_segment(&point_like, &seg);
    assert_eq!(p1, Point::new(1.0, 1.0));
    assert_eq!(p2, Point::new(1.0, 0.0));
}
