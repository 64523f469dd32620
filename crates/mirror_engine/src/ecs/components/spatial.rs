//! Spatial components: anchor position, extent and orientation

use crate::foundation::math::{utils, Vec2};

/// Anchor point of an entity (top-left of its bounding box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    /// Create a position from coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vec2::new(x, y))
    }

    /// The underlying vector
    pub fn vec(&self) -> Vec2 {
        self.0
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

/// Width and height of an entity
///
/// For mirrors `width` is the mirror length and `height` its drawn thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,

    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square size
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Half of the extent, as a vector
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Whether both dimensions are finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Center of a box of this size anchored at `position`
    pub fn center_from(&self, position: Vec2) -> Vec2 {
        position + self.half_extent()
    }

    /// Anchor that places the center of a box of this size on `center`
    pub fn anchor_for(&self, center: Vec2) -> Vec2 {
        center - self.half_extent()
    }
}

/// Orientation in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle(pub f64);

impl Angle {
    /// Build an angle from degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Self(utils::deg_to_rad(degrees))
    }

    /// Angle in radians
    pub fn radians(&self) -> f64 {
        self.0
    }

    /// Angle in degrees
    pub fn degrees(&self) -> f64 {
        utils::rad_to_deg(self.0)
    }

    /// Unit vector along this orientation
    pub fn direction(&self) -> Vec2 {
        utils::direction(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_and_anchor_are_inverse() {
        let size = Size::new(30.0, 20.0);
        let center = size.center_from(Vec2::new(100.0, 50.0));
        assert_eq!(center, Vec2::new(115.0, 60.0));
        assert_eq!(size.anchor_for(center), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(0.0, 0.0).is_valid());
        assert!(!Size::new(-1.0, 2.0).is_valid());
        assert!(!Size::new(f64::NAN, 2.0).is_valid());
    }

    #[test]
    fn test_angle_from_degrees() {
        let angle = Angle::from_degrees(90.0);
        assert_relative_eq!(angle.radians(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(angle.degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(angle.direction(), Vec2::new(0.0, 1.0), epsilon = 1e-12);
    }
}
