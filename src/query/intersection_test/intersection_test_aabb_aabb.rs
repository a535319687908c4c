use crate::shape::Aabb;

/// Intersection test between two AABBs.
///
/// Boxes sharing only a boundary are intersecting.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    aabb1.intersects(aabb2)
}
