use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{Triangle, TrianglePointLocation};

#[inline]
fn compute_result(pt: &Point<Real>, proj: Point<Real>) -> PointProjection {
    #[cfg(feature = "dim2")]
    {
        PointProjection::new(*pt == proj, proj)
    }

    #[cfg(feature = "dim3")]
    {
        PointProjection::new(relative_eq!(proj, *pt), proj)
    }
}

impl PointQuery for Triangle {
    #[inline]
    fn project_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        self.project_point_and_get_location(pt, solid).0
    }
}

impl PointQueryWithLocation for Triangle {
    type Location = TrianglePointLocation;

    /// Projects a point on the triangle by classifying it into one of the
    /// seven Voronoï regions (three vertices, three edges, the face).
    ///
    /// The regions are tried in a fixed order: vertex A, vertex B, edge
    /// AB, vertex C, edge CA, edge BC, and finally the face. All boundary
    /// comparisons are inclusive toward the region tried first, so a point
    /// lying exactly between two regions is attributed to the
    /// earlier-checked one.
    fn project_point_and_get_location(
        &self,
        pt: &Point<Real>,
        solid: bool,
    ) -> (PointProjection, Self::Location) {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);

        if d1 <= 0.0 && d2 <= 0.0 {
            // Voronoï region of `a`.
            return (compute_result(pt, a), TrianglePointLocation::OnVertex(0));
        }

        let bp = pt - b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);

        if d3 >= 0.0 && d4 <= d3 {
            // Voronoï region of `b`.
            return (compute_result(pt, b), TrianglePointLocation::OnVertex(1));
        }

        let vc = d1 * d4 - d3 * d2;

        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            // Voronoï region of `ab`.
            let v = d1 / (d1 - d3);
            let res = a + ab * v;
            return (
                compute_result(pt, res),
                TrianglePointLocation::OnEdge(0, [1.0 - v, v]),
            );
        }

        let cp = pt - c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);

        if d6 >= 0.0 && d5 <= d6 {
            // Voronoï region of `c`.
            return (compute_result(pt, c), TrianglePointLocation::OnVertex(2));
        }

        let vb = d5 * d2 - d1 * d6;

        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            // Voronoï region of `ca`.
            let w = d2 / (d2 - d6);
            let res = a + ac * w;
            return (
                compute_result(pt, res),
                TrianglePointLocation::OnEdge(2, [w, 1.0 - w]),
            );
        }

        let va = d3 * d6 - d5 * d4;

        if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
            // Voronoï region of `bc`.
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            let res = b + (c - b) * w;
            return (
                compute_result(pt, res),
                TrianglePointLocation::OnEdge(1, [1.0 - w, w]),
            );
        }

        // Voronoï region of the face.
        //
        // `va + vb + vc` is twice the squared area of the triangle; it only
        // vanishes when the triangle is degenerate, in which case the
        // closest boundary point is used instead.
        let denom_sum = va + vb + vc;

        if denom_sum != 0.0 {
            let denom = 1.0 / denom_sum;
            let v = vb * denom;
            let w = vc * denom;
            let bcoords = [1.0 - v - w, v, w];

            #[cfg(feature = "dim3")]
            {
                let _ = solid;
                let res = a + ab * v + ac * w;
                return (
                    compute_result(pt, res),
                    TrianglePointLocation::OnFace(bcoords),
                );
            }

            #[cfg(feature = "dim2")]
            {
                if solid {
                    return (
                        PointProjection::new(true, *pt),
                        TrianglePointLocation::OnFace(bcoords),
                    );
                }

                // Non-solid query from the interior: project on the
                // closest edge.
                let (proj, loc) = closest_boundary_point(self, pt, d1, d2, d3, d4, d5, d6);
                return (PointProjection::new(true, proj), loc);
            }
        }

        let (proj, loc) = closest_boundary_point(self, pt, d1, d2, d3, d4, d5, d6);
        (compute_result(pt, proj), loc)
    }
}

// Projection on the closest of the three edges, reusing the edge dot
// products. The edge parameters are clamped so a nearly-degenerate
// triangle cannot push the projection outside of an edge.
fn closest_boundary_point(
    triangle: &Triangle,
    pt: &Point<Real>,
    d1: Real,
    d2: Real,
    d3: Real,
    d4: Real,
    d5: Real,
    d6: Real,
) -> (Point<Real>, TrianglePointLocation) {
    let a = triangle.a;
    let b = triangle.b;
    let c = triangle.c;

    let v = na::clamp(d1 / (d1 - d3), 0.0, 1.0);
    let w_ca = na::clamp(d2 / (d2 - d6), 0.0, 1.0);
    let w_bc = na::clamp((d4 - d3) / ((d4 - d3) + (d5 - d6)), 0.0, 1.0);

    let proj_ab = a + (b - a) * v;
    let proj_ca = a + (c - a) * w_ca;
    let proj_bc = b + (c - b) * w_bc;

    let dist_ab = na::distance_squared(pt, &proj_ab);
    let dist_ca = na::distance_squared(pt, &proj_ca);
    let dist_bc = na::distance_squared(pt, &proj_bc);

    if dist_ab <= dist_ca && dist_ab <= dist_bc {
        (proj_ab, TrianglePointLocation::OnEdge(0, [1.0 - v, v]))
    } else if dist_ca <= dist_bc {
        (proj_ca, TrianglePointLocation::OnEdge(2, [w_ca, 1.0 - w_ca]))
    } else {
        (proj_bc, TrianglePointLocation::OnEdge(1, [1.0 - w_bc, w_bc]))
    }
}
