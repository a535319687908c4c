use crate::math::{Point, Real, Vector, DIM};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Aabb;
use num::Zero;

impl PointQuery for Aabb {
    fn project_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let mins_pt = self.mins - pt;
        let pt_maxs = pt - self.maxs;
        let shift = mins_pt.sup(&Vector::zeros()) - pt_maxs.sup(&Vector::zeros());

        let inside = shift.is_zero();

        if !inside {
            PointProjection::new(false, pt + shift)
        } else if solid {
            PointProjection::new(true, *pt)
        } else {
            // Project the interior point on the nearest face.
            let mut best = -Real::MAX;
            let mut is_mins = false;
            let mut best_id = 0;

            for i in 0..DIM {
                let mins_pt_i = mins_pt[i];
                let pt_maxs_i = pt_maxs[i];

                if mins_pt_i < pt_maxs_i {
                    if pt_maxs_i > best {
                        best_id = i;
                        is_mins = false;
                        best = pt_maxs_i
                    }
                } else if mins_pt_i > best {
                    best_id = i;
                    is_mins = true;
                    best = mins_pt_i
                }
            }

            let mut shift: Vector<Real> = Vector::zeros();

            if is_mins {
                shift[best_id] = best;
            } else {
                shift[best_id] = -best;
            }

            PointProjection::new(true, pt + shift)
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        Aabb::contains_point(self, pt)
    }
}
