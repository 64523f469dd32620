//! Ray segment component
//!
//! Rays are output data produced by inspection; they are never fed back into
//! the geometry kernel.

use crate::foundation::math::Vec2;

/// A drawn light segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    /// Start point
    pub from: Vec2,

    /// End point
    pub to: Vec2,

    /// Stroke width
    pub width: f64,
}

impl RaySegment {
    /// Default stroke width
    pub const DEFAULT_WIDTH: f64 = 2.0;

    /// Create a new segment
    pub fn new(from: Vec2, to: Vec2, width: f64) -> Self {
        Self { from, to, width }
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        (self.to - self.from).norm()
    }

    /// Orientation of the segment in radians
    pub fn angle(&self) -> f64 {
        let d = self.to - self.from;
        d.y.atan2(d.x)
    }
}
