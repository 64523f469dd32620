//! # Mirror Engine
//!
//! A 2D specular reflection engine built on a columnar entity-component store.
//!
//! ## Features
//!
//! - **ECS Store**: Typed component columns addressed by plain integer handles
//! - **Frame Systems**: Mirror movement and elastic screen-edge bounce
//! - **Geometry Kernel**: Point reflection and line intersection in `f64`
//! - **Reflection Engine**: Single-bounce paths, virtual images and rays per mirror
//! - **Scene Merge**: Derived records folded back into the scene by identifier
//!
//! ## Quick Start
//!
//! ```rust
//! use mirror_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut sim = Simulation::new(SimulationConfig::default(), SceneDescription::default_scene())?;
//!     sim.advance(1.0 / 60.0)?;
//!
//!     let result = sim.inspect_and_merge("object1", "viewer1")?;
//!     for path in &result.paths {
//!         println!("{} reflects at {:?}", path.mirror_id, path.reflection_point);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod geometry;
pub mod scene;
pub mod reflection;
pub mod config;

mod engine;

pub use engine::{advance, EngineError, EntityView, Simulation};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        advance, EngineError, EntityView, Simulation,
        foundation::math::Vec2,
        ecs::{World, Entity, EntityKind, EntityTags, Size},
        config::{Config, SimulationConfig, ReflectionConfig, SegmentPolicy},
        scene::{
            initialize_from_scene, IdMap, SceneDescription, MirrorSpec, ObjectSpec, ViewerSpec, RaySpec,
        },
        reflection::{inspect, InspectionResult, ReflectionPath},
    };
}
