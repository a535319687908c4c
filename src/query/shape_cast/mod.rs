//! Time-of-impact queries between moving shapes.

use crate::math::{Point, Real};
use crate::shape::FeatureId;

pub use self::shape_cast_ball_ball::shape_cast_ball_ball;
pub use self::shape_cast_ball_plane::shape_cast_ball_plane;
#[cfg(feature = "dim3")]
pub use self::shape_cast_ball_triangle::shape_cast_ball_triangle;

mod shape_cast_ball_ball;
mod shape_cast_ball_plane;
#[cfg(feature = "dim3")]
mod shape_cast_ball_triangle;

/// The result of a time-of-impact query between two moving shapes.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeCastHit {
    /// The time at which the shapes first touch.
    ///
    /// A time of impact of 0.0 means the shapes already touch at the
    /// start of the motion.
    pub time_of_impact: Real,
    /// The contact point at the time of impact, on the shape being hit.
    pub witness: Point<Real>,
    /// The feature of the shape being hit that produced the contact.
    pub feature: FeatureId,
}

impl ShapeCastHit {
    /// Initializes a new `ShapeCastHit`.
    #[inline]
    pub fn new(time_of_impact: Real, witness: Point<Real>, feature: FeatureId) -> ShapeCastHit {
        ShapeCastHit {
            time_of_impact,
            witness,
            feature,
        }
    }
}
