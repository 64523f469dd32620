//! Horizontal boundary bounce for mirrors
//!
//! Mirrors only travel horizontally, so only the x axis is constrained. The
//! bounce is elastic: the speed is kept and only the direction changes.

use crate::ecs::{EntityTags, FrameContext, System, SystemPhase, World};

/// Keeps mirrors inside `[0, screen_width - mirror_width]`
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundarySystem;

impl System for BoundarySystem {
    fn name(&self) -> &'static str {
        "boundary"
    }

    fn phase(&self) -> SystemPhase {
        SystemPhase::Constrain
    }

    fn run(&mut self, world: &mut World, frame: &FrameContext) {
        apply_boundary(world, frame.screen_width, frame.screen_height);
    }
}

/// Clamp every mirror to the horizontal screen bounds and point its velocity back inside
///
/// `_screen_height` is accepted for symmetry with the frame context; the
/// vertical axis does not participate.
pub fn apply_boundary(world: &mut World, screen_width: f64, _screen_height: f64) {
    let columns = &mut world.columns;
    for (index, tags) in world.tags.iter().enumerate() {
        if !tags.contains(EntityTags::MIRROR) {
            continue;
        }
        let Some(position) = columns.position.get_mut(index) else {
            continue;
        };
        let width = columns.size.get(index).map_or(0.0, |size| size.width);
        let max_x = screen_width - width;
        let velocity = columns.velocity.get_mut(index);

        if position.0.x <= 0.0 {
            position.0.x = 0.0;
            if let Some(velocity) = velocity {
                velocity.0.x = velocity.0.x.abs();
            }
            log::trace!("Mirror #{index} bounced off the left edge");
        } else if position.0.x >= max_x {
            position.0.x = max_x;
            if let Some(velocity) = velocity {
                velocity.0.x = -velocity.0.x.abs();
            }
            log::trace!("Mirror #{index} bounced off the right edge");
        }
    }
}
