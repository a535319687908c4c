//! Ray-casting related definitions and implementations.

pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::ray_aabb::{ray_toi_interval_with_aabb, segment_aabb_location, SegmentAabbLocation};
pub use self::ray_ball::{ray_toi_and_normal_with_ball, ray_toi_with_ball};
pub use self::ray_plane::{line_toi_with_plane, ray_toi_with_plane, ray_toi_with_plane_frontface};
#[cfg(feature = "dim2")]
pub use self::ray_polygon::ray_toi_with_polygon;
#[cfg(feature = "dim2")]
pub use self::ray_segment::{ray_toi_with_line, ray_toi_with_segment};
#[cfg(feature = "dim3")]
pub use self::ray_triangle::{
    ray_intersection_with_triangle, ray_intersection_with_triangle_frontface,
    segment_intersection_with_triangle, segment_intersection_with_triangle_frontface,
};

mod ray;
mod ray_aabb;
mod ray_ball;
mod ray_plane;
#[cfg(feature = "dim2")]
mod ray_polygon;
#[cfg(feature = "dim2")]
mod ray_segment;
mod ray_triangle;
