use graze3d::math::{Point, Vector};
use graze3d::na::{Rotation3, Unit};
use graze3d::query::details::{intersection_test_obb_obb, obb_obb_separating_axis};
use graze3d::shape::Obb;

fn rand_rotation(rng: &mut oorandom::Rand32) -> graze3d::math::Matrix<f32> {
    let axis = Vector::new(
        rng.rand_float() * 2.0 - 1.0 + 1.0e-3,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    );
    let angle = rng.rand_float() * std::f32::consts::TAU;
    *Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).matrix()
}

fn rand_half_extents(rng: &mut oorandom::Rand32) -> Vector<f32> {
    Vector::new(
        rng.rand_float() * 2.0 + 0.1,
        rng.rand_float() * 2.0 + 0.1,
        rng.rand_float() * 2.0 + 0.1,
    )
}

#[test]
fn coincident_centers_always_intersect() {
    let mut rng = oorandom::Rand32::new(2024);

    for _ in 0..1000 {
        let center = Point::new(
            rng.rand_float() * 10.0 - 5.0,
            rng.rand_float() * 10.0 - 5.0,
            rng.rand_float() * 10.0 - 5.0,
        );
        let obb1 = Obb::new(center, rand_rotation(&mut rng), rand_half_extents(&mut rng));
        let obb2 = Obb::new(center, rand_rotation(&mut rng), rand_half_extents(&mut rng));

        assert!(intersection_test_obb_obb(&obb1, &obb2));
    }
}

#[test]
fn boxes_separated_along_a_candidate_axis_are_disjoint() {
    let mut rng = oorandom::Rand32::new(77);

    for _ in 0..1000 {
        let rot1 = rand_rotation(&mut rng);
        let rot2 = rand_rotation(&mut rng);
        let he1 = rand_half_extents(&mut rng);
        let he2 = rand_half_extents(&mut rng);

        let obb1 = Obb::new(Point::origin(), rot1, he1);

        // Push the second box past the sum of the projected radii along
        // the first local axis of `obb1`.
        let axis = obb1.axis(0);
        let obb2_probe = Obb::new(Point::origin(), rot2, he2);
        let mut rb = 0.0;
        for j in 0..3 {
            rb += he2[j] * axis.dot(&obb2_probe.axis(j)).abs();
        }

        let offset = he1[0] + rb + 0.1;
        let obb2 = Obb::new(Point::origin() + axis * offset, rot2, he2);

        assert!(obb_obb_separating_axis(&obb1, &obb2).is_some());
        assert!(!intersection_test_obb_obb(&obb1, &obb2));
    }
}

#[test]
fn near_parallel_edges_do_not_break_the_cross_axes() {
    // Two boxes sharing almost-parallel axes: the epsilon padding of the
    // absolute rotation keeps the degenerate cross products harmless.
    let rot = *Rotation3::from_axis_angle(&Unit::new_normalize(Vector::z()), 1.0e-8).matrix();
    let obb1 = Obb::new(
        Point::origin(),
        graze3d::math::Matrix::identity(),
        Vector::new(1.0, 1.0, 1.0),
    );
    let obb2 = Obb::new(Point::new(1.5, 1.5, 0.0), rot, Vector::new(1.0, 1.0, 1.0));

    assert!(intersection_test_obb_obb(&obb1, &obb2));
}
