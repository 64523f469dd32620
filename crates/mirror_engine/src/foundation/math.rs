//! Math utilities and types
//!
//! All scene geometry is computed in double precision on the 2D plane.
//! Screen coordinates are used throughout: x grows to the right, y grows down.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type used for positions, velocities and directions
pub type Vec2 = Vector2<f64>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// Unit vector pointing along `angle` (radians)
    pub fn direction(angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(cos, sin)
    }

    /// Whether both coordinates are finite
    pub fn is_finite(v: &Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = 1e-12);
        assert_relative_eq!(utils::deg_to_rad(90.0), constants::PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_is_unit() {
        for degrees in [0.0, 30.0, 90.0, 135.0, 270.0] {
            let dir = utils::direction(utils::deg_to_rad(degrees));
            assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(utils::direction(0.0), Vec2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_is_finite() {
        assert!(utils::is_finite(&Vec2::new(1.0, -2.0)));
        assert!(!utils::is_finite(&Vec2::new(f64::NAN, 0.0)));
        assert!(!utils::is_finite(&Vec2::new(0.0, f64::INFINITY)));
    }
}
