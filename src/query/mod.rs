//! Non-persistent geometric queries.
//!
//! Ray-casting and point-projection go through traits:
//!
//! * [`RayCast`] for ray-casting.
//! * [`PointQuery`] for point projection.
//!
//! The functions exported by the `details` submodule are dedicated to
//! specific pairs of shapes, with the form `[operation]_[shape1]_[shape2]()`
//! where `[operation]` can be `intersection_test`, `shape_cast`,
//! `closest_points`, or a ray-casting primitive.

pub use self::point::{PointProjection, PointQuery, PointQueryWithLocation};
pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::shape_cast::ShapeCastHit;

pub mod closest_points;
pub mod intersection_test;
pub mod point;
pub mod ray;
pub mod sat;
pub mod shape_cast;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::intersection_test::*;
    #[cfg(feature = "dim2")]
    pub use super::ray::{ray_toi_with_line, ray_toi_with_polygon, ray_toi_with_segment};
    #[cfg(feature = "dim3")]
    pub use super::ray::{
        ray_intersection_with_triangle, ray_intersection_with_triangle_frontface,
        segment_intersection_with_triangle, segment_intersection_with_triangle_frontface,
    };
    pub use super::ray::{
        line_toi_with_plane, ray_toi_and_normal_with_ball, ray_toi_interval_with_aabb,
        ray_toi_with_ball, ray_toi_with_plane, ray_toi_with_plane_frontface,
        segment_aabb_location, SegmentAabbLocation,
    };
    pub use super::sat::*;
    pub use super::shape_cast::shape_cast_ball_ball;
    pub use super::shape_cast::shape_cast_ball_plane;
    #[cfg(feature = "dim3")]
    pub use super::shape_cast::shape_cast_ball_triangle;
}
