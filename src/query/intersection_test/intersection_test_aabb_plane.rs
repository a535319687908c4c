use crate::shape::{Aabb, Plane};

/// Intersection test between an AABB and a plane.
///
/// The plane normal does not need to be unit-length: the projection
/// radius and the center distance scale together.
#[inline]
pub fn intersection_test_aabb_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let half_extents = aabb.half_extents();

    // Projection radius of the box onto the plane normal.
    let radius = half_extents.dot(&plane.normal.abs());
    let center_dist = plane.evaluate(&aabb.center());

    center_dist.abs() <= radius
}
