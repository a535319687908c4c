//! Boolean intersection tests between pairs of shapes.

pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_aabb_ball::intersection_test_aabb_ball;
pub use self::intersection_test_aabb_plane::intersection_test_aabb_plane;
pub use self::intersection_test_ball_ball::intersection_test_ball_ball;
pub use self::intersection_test_ball_plane::intersection_test_ball_plane;
pub use self::intersection_test_ball_triangle::intersection_test_ball_triangle;
pub use self::intersection_test_obb_obb::intersection_test_obb_obb;
#[cfg(feature = "dim2")]
pub use self::intersection_test_polygon_polygon::intersection_test_polygon_polygon;

mod intersection_test_aabb_aabb;
mod intersection_test_aabb_ball;
mod intersection_test_aabb_plane;
mod intersection_test_ball_ball;
mod intersection_test_ball_plane;
mod intersection_test_ball_triangle;
mod intersection_test_obb_obb;
#[cfg(feature = "dim2")]
mod intersection_test_polygon_polygon;
