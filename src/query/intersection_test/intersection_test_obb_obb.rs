use crate::query::sat;
use crate::shape::Obb;

/// Intersection test between two oriented bounding boxes.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    sat::obb_obb_separating_axis(obb1, obb2).is_none()
}
