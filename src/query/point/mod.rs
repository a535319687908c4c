//! Point inclusion and projection.

pub use self::point_query::{PointProjection, PointQuery, PointQueryWithLocation};

mod point_aabb;
mod point_ball;
mod point_plane;
mod point_query;
mod point_segment;
mod point_triangle;
