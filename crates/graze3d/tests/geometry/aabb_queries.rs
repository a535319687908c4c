use graze3d::math::{Point, Vector};
use graze3d::query::details::{intersection_test_aabb_aabb, ray_toi_interval_with_aabb};
use graze3d::query::Ray;
use graze3d::shape::Aabb;

fn rand_aabb(rng: &mut oorandom::Rand32) -> Aabb {
    let center = Point::new(
        rng.rand_float() * 10.0 - 5.0,
        rng.rand_float() * 10.0 - 5.0,
        rng.rand_float() * 10.0 - 5.0,
    );
    let half_extents = Vector::new(
        rng.rand_float() * 2.0 + 0.1,
        rng.rand_float() * 2.0 + 0.1,
        rng.rand_float() * 2.0 + 0.1,
    );
    Aabb::from_half_extents(center, half_extents)
}

#[test]
fn aabb_intersection_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let aabb1 = rand_aabb(&mut rng);
        let aabb2 = rand_aabb(&mut rng);

        assert_eq!(
            intersection_test_aabb_aabb(&aabb1, &aabb2),
            intersection_test_aabb_aabb(&aabb2, &aabb1)
        );
    }
}

#[test]
fn overlapping_unit_boxes_intersect() {
    let aabb1 = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
    let aabb2 = Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(2.0, 2.0, 2.0));

    assert!(intersection_test_aabb_aabb(&aabb1, &aabb2));
}

#[test]
fn point_containment_matches_componentwise_bounds() {
    let aabb = Aabb::new(Point::new(-1.0, -2.0, -3.0), Point::new(1.0, 2.0, 3.0));
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let pt = Point::new(
            rng.rand_float() * 8.0 - 4.0,
            rng.rand_float() * 8.0 - 4.0,
            rng.rand_float() * 8.0 - 4.0,
        );

        let expected = (0..3).all(|i| aabb.mins[i] <= pt[i] && pt[i] <= aabb.maxs[i]);
        assert_eq!(aabb.contains_point(&pt), expected);
    }
}

#[test]
fn slab_interval_example() {
    let aabb = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
    let ray = Ray::new(Point::new(-1.0, 0.5, 0.5), Vector::new(1.0, 0.0, 0.0));

    let (tmin, tmax) = ray_toi_interval_with_aabb(&aabb, &ray).unwrap();
    assert_eq!(tmin, 1.0);
    assert_eq!(tmax, 2.0);
}

#[test]
fn rays_from_inside_always_hit() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..1000 {
        let aabb = rand_aabb(&mut rng);
        let origin = aabb.center();
        let dir = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );

        if dir.norm_squared() < 1.0e-6 {
            continue;
        }

        let ray = Ray::new(origin, dir);
        let (tmin, tmax) = ray_toi_interval_with_aabb(&aabb, &ray)
            .expect("a ray starting inside the box must hit it");
        assert!(tmin < 0.0 && tmax > 0.0);
    }
}

#[test]
fn missing_rays_report_none() {
    let aabb = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
    let ray = Ray::new(Point::new(-1.0, 2.0, 0.5), Vector::new(1.0, 0.0, 0.0));

    assert!(ray_toi_interval_with_aabb(&aabb, &ray).is_none());

    let behind = Ray::new(Point::new(-1.0, 0.5, 0.5), Vector::new(-1.0, 0.0, 0.0));
    assert!(ray_toi_interval_with_aabb(&aabb, &behind).is_none());
}

#[test]
fn max_is_a_valid_interval_bound() {
    // Degenerate flat boxes still clip correctly.
    let flat = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 1.0));
    let ray = Ray::new(Point::new(0.5, -1.0, 0.5), Vector::new(0.0, 1.0, 0.0));

    let result = ray_toi_interval_with_aabb(&flat, &ray);
    // The interval collapses to a single parameter, which the strict
    // `tmin < tmax` bound rejects.
    assert!(result.is_none());
}
