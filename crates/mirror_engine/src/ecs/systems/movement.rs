//! Movement integration for mirrors

use crate::ecs::{EntityTags, FrameContext, System, SystemPhase, World};

/// Advances mirror positions by their velocity
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn phase(&self) -> SystemPhase {
        SystemPhase::Integrate
    }

    fn run(&mut self, world: &mut World, frame: &FrameContext) {
        integrate(world, frame.delta_time);
    }
}

/// Apply `position += velocity * delta_time` to every mirror
///
/// A non-positive or non-finite `delta_time` leaves the world untouched.
pub fn integrate(world: &mut World, delta_time: f64) {
    if !delta_time.is_finite() || delta_time <= 0.0 {
        return;
    }

    let columns = &mut world.columns;
    for (index, tags) in world.tags.iter().enumerate() {
        if !tags.contains(EntityTags::MIRROR) {
            continue;
        }
        let (Some(position), Some(velocity)) =
            (columns.position.get_mut(index), columns.velocity.get(index))
        else {
            continue;
        };
        position.0 += velocity.displacement(delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Entity, Position, Velocity};
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    fn spawn(world: &mut World, tags: EntityTags, x: f64, vx: f64) -> Entity {
        let entity = world.create_entity(tags);
        world.insert(entity, Position::new(x, 100.0)).unwrap();
        world.insert(entity, Velocity::new(vx, 10.0)).unwrap();
        entity
    }

    #[test]
    fn test_integrates_mirrors() {
        let mut world = World::new();
        let mirror = spawn(&mut world, EntityTags::MIRROR, 50.0, 20.0);

        integrate(&mut world, 0.5);

        assert_relative_eq!(world.position(mirror).unwrap(), Vec2::new(60.0, 105.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ignores_non_mirrors() {
        let mut world = World::new();
        let object = spawn(&mut world, EntityTags::OBJECT, 50.0, 20.0);

        integrate(&mut world, 1.0);

        assert_eq!(world.position(object).unwrap(), Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_non_positive_delta_is_noop() {
        let mut world = World::new();
        let mirror = spawn(&mut world, EntityTags::MIRROR, 50.0, 20.0);

        integrate(&mut world, 0.0);
        integrate(&mut world, -1.0);
        integrate(&mut world, f64::NAN);

        assert_eq!(world.position(mirror).unwrap(), Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_mirror_without_velocity_stays_put() {
        let mut world = World::new();
        let mirror = world.create_entity(EntityTags::MIRROR);
        world.insert(mirror, Position::new(1.0, 2.0)).unwrap();

        integrate(&mut world, 1.0);

        assert_eq!(world.position(mirror).unwrap(), Vec2::new(1.0, 2.0));
    }
}
