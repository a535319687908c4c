use crate::math::{Matrix, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Obb;

/// Finds a separating axis between two oriented bounding boxes, if any.
///
/// In 3D the candidate axes are, in order: the three local axes of
/// `obb1` (indices 0..=2), the three local axes of `obb2` (3..=5), and
/// the nine pairwise cross products of one axis of each box (6..=14,
/// index `6 + 3 * i + j` for `axis1[i] × axis2[j]`). In 2D only the four
/// face normals are candidates (0..=1 for `obb1`, 2..=3 for `obb2`).
///
/// The scan short-circuits on the first axis along which the projected
/// center distance exceeds the sum of the projected radii, returning its
/// index; `None` means the boxes intersect. Boxes touching exactly along
/// a candidate axis are intersecting.
///
/// Every entry of the absolute rotation matrix is padded with a small
/// epsilon so the cross-product axes stay usable when two edges are
/// near-parallel and their cross product collapses.
pub fn obb_obb_separating_axis(obb1: &Obb, obb2: &Obb) -> Option<usize> {
    // Rotation expressing the axes of `obb2` in the local frame of `obb1`.
    let mut rot = Matrix::zeros();
    for i in 0..DIM {
        for j in 0..DIM {
            rot[(i, j)] = obb1.axis(i).dot(&obb2.axis(j));
        }
    }

    let mut abs_rot = Matrix::zeros();
    for i in 0..DIM {
        for j in 0..DIM {
            abs_rot[(i, j)] = rot[(i, j)].abs() + DEFAULT_EPSILON;
        }
    }

    // Center-to-center translation in the local frame of `obb1`.
    let t_world = obb2.center - obb1.center;
    let mut t = Vector::zeros();
    for i in 0..DIM {
        t[i] = t_world.dot(&obb1.axis(i));
    }

    let he1 = &obb1.half_extents;
    let he2 = &obb2.half_extents;

    // Local axes of `obb1`.
    for i in 0..DIM {
        let ra = he1[i];
        let mut rb = 0.0;
        for j in 0..DIM {
            rb += he2[j] * abs_rot[(i, j)];
        }

        if t[i].abs() > ra + rb {
            return Some(i);
        }
    }

    // Local axes of `obb2`.
    for j in 0..DIM {
        let mut ra = 0.0;
        let mut t_proj = 0.0;
        for i in 0..DIM {
            ra += he1[i] * abs_rot[(i, j)];
            t_proj += t[i] * rot[(i, j)];
        }
        let rb = he2[j];

        if t_proj.abs() > ra + rb {
            return Some(DIM + j);
        }
    }

    // Cross products of one axis of each box.
    #[cfg(feature = "dim3")]
    for i in 0..3 {
        let i1 = (i + 1) % 3;
        let i2 = (i + 2) % 3;

        for j in 0..3 {
            let j1 = (j + 1) % 3;
            let j2 = (j + 2) % 3;

            let ra = he1[i1] * abs_rot[(i2, j)] + he1[i2] * abs_rot[(i1, j)];
            let rb = he2[j1] * abs_rot[(i, j2)] + he2[j2] * abs_rot[(i, j1)];
            let t_proj = t[i2] * rot[(i1, j)] - t[i1] * rot[(i2, j)];

            if t_proj.abs() > ra + rb {
                return Some(2 * DIM + 3 * i + j);
            }
        }
    }

    None
}
