//! ECS Components module
//!
//! Plain data stored in the world's columns. Mirrors, objects, viewers and
//! rays are distinguished only by their [`EntityTags`].

pub mod spatial;
pub mod motion;
pub mod appearance;
pub mod ray;
pub mod tags;

pub use spatial::{Position, Size, Angle};
pub use motion::Velocity;
pub use appearance::{Color, Pulsing};
pub use ray::RaySegment;
pub use tags::{EntityTags, EntityKind};
