//! Entity-Component-System implementation
//!
//! A columnar store: every component type lives in its own column indexed by
//! a plain integer entity handle. Handles are only meaningful for the store
//! that produced them.

pub mod world;
pub mod entity;
pub mod component;
pub mod storage;
pub mod system;
pub mod components;
pub mod systems;

pub use world::{World, StoreError};
pub use entity::Entity;
pub use component::Component;
pub use storage::ComponentColumn;
pub use system::{System, SystemPhase, SystemSchedule, FrameContext};
pub use components::{
    Position, Velocity, Angle, Size, Color, Pulsing, RaySegment, EntityTags, EntityKind,
};
