//! Shapes supported by graze.

pub use self::aabb::Aabb;
pub use self::ball::Ball;
pub use self::feature_id::FeatureId;
pub use self::obb::Obb;
pub use self::plane::Plane;
#[cfg(feature = "dim2")]
pub use self::polygon::{ConvexPolygon, ConvexPolygonError};
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::triangle::{Triangle, TrianglePointLocation};

mod aabb;
mod ball;
mod feature_id;
mod obb;
mod plane;
#[cfg(feature = "dim2")]
mod polygon;
mod segment;
mod triangle;
