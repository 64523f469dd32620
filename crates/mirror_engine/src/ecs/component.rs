//! Component trait and column bindings
//!
//! Each component type is bound to exactly one column of the [`World`], so
//! component access is resolved statically instead of through type-erased maps.

use super::components::{Angle, Color, Position, Pulsing, RaySegment, Size, Velocity};
use super::storage::ComponentColumn;
use super::World;

/// A component stored in its own column of the [`World`]
pub trait Component: Sized + 'static {
    /// Component name used in error messages
    const NAME: &'static str;

    /// The column holding this component
    fn column(world: &World) -> &ComponentColumn<Self>;

    /// Mutable access to the column holding this component
    fn column_mut(world: &mut World) -> &mut ComponentColumn<Self>;
}

macro_rules! bind_column {
    ($component:ty, $field:ident) => {
        impl Component for $component {
            const NAME: &'static str = stringify!($component);

            fn column(world: &World) -> &ComponentColumn<Self> {
                &world.columns.$field
            }

            fn column_mut(world: &mut World) -> &mut ComponentColumn<Self> {
                &mut world.columns.$field
            }
        }
    };
}

bind_column!(Position, position);
bind_column!(Velocity, velocity);
bind_column!(Angle, angle);
bind_column!(Size, size);
bind_column!(Color, color);
bind_column!(Pulsing, pulsing);
bind_column!(RaySegment, ray_segment);
