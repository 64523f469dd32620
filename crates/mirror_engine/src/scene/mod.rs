//! Scene description, loading and merging
//!
//! The scene description is the authoritative, editable form of a scene. The
//! world and id map are always rebuilt from it.

pub mod description;
pub mod id_map;
pub mod loader;
pub mod merge;

pub use description::{
    Identified, MirrorSpec, ObjectSpec, ObjectVariant, RayKind, RaySpec, SceneDescription, ViewerSpec,
    ViewerVariant, DEFAULT_OBJECT_SIZE, DEFAULT_VIEWER_SIZE,
};
pub use id_map::IdMap;
pub use loader::{initialize_from_scene, validate_scene, SceneError};
pub use merge::MergeSummary;
