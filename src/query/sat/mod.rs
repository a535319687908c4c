//! Separating-axis tests.

pub use self::sat_obb_obb::obb_obb_separating_axis;
#[cfg(feature = "dim2")]
pub use self::sat_polygon_polygon::polygon_polygon_separating_edge_oneway;

mod sat_obb_obb;
#[cfg(feature = "dim2")]
mod sat_polygon_polygon;
