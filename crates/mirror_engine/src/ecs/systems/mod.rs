//! ECS Systems module
//!
//! Per-frame systems. Both operate on mirrors only.

pub mod movement;
pub mod boundary;

pub use movement::{MovementSystem, integrate};
pub use boundary::{BoundarySystem, apply_boundary};

use super::SystemSchedule;

/// The frame schedule: movement integration followed by the boundary bounce
pub fn frame_schedule() -> SystemSchedule {
    SystemSchedule::new()
        .with_system(Box::new(MovementSystem))
        .with_system(Box::new(BoundarySystem))
}
