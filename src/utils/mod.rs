//! Various unsorted geometrical and logical operators.

pub use self::quadratic::lowest_root_in_interval;

#[cfg(feature = "dim2")]
pub use self::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};

#[cfg(feature = "dim2")]
mod point_in_triangle;
mod quadratic;
