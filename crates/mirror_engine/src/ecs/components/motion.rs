//! Motion component

use crate::foundation::math::Vec2;

/// Linear velocity in units per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    /// Create a velocity from components
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vec2::new(x, y))
    }

    /// A velocity of zero
    pub fn zero() -> Self {
        Self(Vec2::zeros())
    }

    /// Horizontal-only velocity
    pub fn horizontal(x: f64) -> Self {
        Self::new(x, 0.0)
    }

    /// Displacement over `delta_time` seconds
    pub fn displacement(&self, delta_time: f64) -> Vec2 {
        self.0 * delta_time
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::zero()
    }
}
