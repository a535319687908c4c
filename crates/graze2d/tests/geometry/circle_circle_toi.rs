use graze2d::math::{Point, Real, Vector};
use graze2d::query::details::{intersection_test_ball_ball, shape_cast_ball_ball};
use graze2d::shape::Ball;

#[test]
fn circle_circle_toi() {
    let b1 = Ball::new(Point::origin(), 0.5);
    let b2 = Ball::new(Point::new(0.0, 10.0), 0.5);
    let vel1 = Vector::new(0.0, 10.0);

    let hit = shape_cast_ball_ball(&b1, &vel1, &b2, &Vector::zeros(), Real::MAX).unwrap();

    assert_eq!(hit.time_of_impact, 0.9);
}

#[test]
fn both_circles_moving() {
    let b1 = Ball::new(Point::origin(), 1.0);
    let b2 = Ball::new(Point::new(10.0, 0.0), 1.0);
    let vel1 = Vector::new(2.0, 0.0);
    let vel2 = Vector::new(-2.0, 0.0);

    let hit = shape_cast_ball_ball(&b1, &vel1, &b2, &vel2, Real::MAX).unwrap();
    assert_eq!(hit.time_of_impact, 2.0);
}

#[test]
fn circle_intersection_is_symmetric() {
    let mut rng = oorandom::Rand32::new(55);

    for _ in 0..1000 {
        let b1 = Ball::new(
            Point::new(rng.rand_float() * 10.0 - 5.0, rng.rand_float() * 10.0 - 5.0),
            rng.rand_float() * 3.0 + 0.1,
        );
        let b2 = Ball::new(
            Point::new(rng.rand_float() * 10.0 - 5.0, rng.rand_float() * 10.0 - 5.0),
            rng.rand_float() * 3.0 + 0.1,
        );

        assert_eq!(
            intersection_test_ball_ball(&b1, &b2),
            intersection_test_ball_ball(&b2, &b1)
        );
    }
}
