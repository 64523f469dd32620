//! Scene loading
//!
//! Validates a scene description and builds a fresh world and id map from it.
//! Nothing is built unless the whole description is valid.

use super::description::{
    color_or_default, ray_color_or_default, MirrorSpec, ObjectSpec, ObjectVariant, RaySpec,
    SceneDescription, ViewerSpec, ViewerVariant,
};
use super::id_map::IdMap;
use crate::ecs::{
    Angle, Entity, EntityTags, Position, Pulsing, RaySegment, Size, StoreError, Velocity, World,
};
use crate::foundation::math::{utils, Vec2};
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a scene description is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// An entity has an empty identifier
    #[error("scene contains an entity with an empty identifier")]
    EmptyIdentifier,

    /// Two entities share an identifier
    #[error("identifier '{0}' is used more than once")]
    DuplicateIdentifier(String),

    /// A mirror has no usable length
    #[error("mirror '{id}' has invalid length {length}")]
    ZeroLengthMirror {
        /// Mirror identifier
        id: String,
        /// Offending length
        length: f64,
    },

    /// A coordinate, angle or velocity is NaN or infinite
    #[error("'{id}' has a non-finite {field}")]
    NonFiniteValue {
        /// Entity identifier
        id: String,
        /// Field name
        field: &'static str,
    },

    /// A size or width is negative or not finite
    #[error("'{id}' has an invalid {field}")]
    NegativeSize {
        /// Entity identifier
        id: String,
        /// Field name
        field: &'static str,
    },

    /// Writing to the freshly built store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Build a world and id map from `scene`
///
/// Entities are created in the order mirrors, objects, rays, viewers, so
/// iterating mirrors in handle order follows the scene's mirror order.
pub fn initialize_from_scene(scene: &SceneDescription) -> Result<(World, IdMap), SceneError> {
    validate_scene(scene)?;

    let mut world = World::with_capacity(scene.entity_count());
    let mut ids = IdMap::with_capacity(scene.entity_count());

    for mirror in &scene.mirrors {
        let entity = spawn_mirror(&mut world, mirror)?;
        ids.insert(mirror.id.as_str(), entity);
    }
    for object in &scene.objects {
        let entity = spawn_object(&mut world, object)?;
        ids.insert(object.id.as_str(), entity);
    }
    for ray in &scene.rays {
        let entity = spawn_ray(&mut world, ray)?;
        ids.insert(ray.id.as_str(), entity);
    }
    for viewer in &scene.viewers {
        let entity = spawn_viewer(&mut world, viewer)?;
        ids.insert(viewer.id.as_str(), entity);
    }

    log::info!(
        "Loaded scene: {} mirrors, {} objects, {} rays, {} viewers",
        scene.mirrors.len(),
        scene.objects.len(),
        scene.rays.len(),
        scene.viewers.len()
    );
    Ok((world, ids))
}

/// Check a scene description without building anything
pub fn validate_scene(scene: &SceneDescription) -> Result<(), SceneError> {
    let mut seen = HashSet::with_capacity(scene.entity_count());
    for id in scene.identifiers() {
        if id.is_empty() {
            return Err(SceneError::EmptyIdentifier);
        }
        if !seen.insert(id) {
            return Err(SceneError::DuplicateIdentifier(id.to_string()));
        }
    }

    for mirror in &scene.mirrors {
        finite_vec(&mirror.id, "position", &mirror.position)?;
        finite(&mirror.id, "angle", mirror.angle_degrees)?;
        if let Some(velocity) = &mirror.velocity {
            finite_vec(&mirror.id, "velocity", velocity)?;
        }
        extent(&mirror.id, "size", &mirror.size)?;
        if mirror.size.width <= 0.0 {
            return Err(SceneError::ZeroLengthMirror {
                id: mirror.id.clone(),
                length: mirror.size.width,
            });
        }
    }
    for object in &scene.objects {
        finite_vec(&object.id, "position", &object.position)?;
        extent(&object.id, "size", &object.resolved_size())?;
    }
    for viewer in &scene.viewers {
        finite_vec(&viewer.id, "position", &viewer.position)?;
        extent(&viewer.id, "size", &viewer.resolved_size())?;
    }
    for ray in &scene.rays {
        finite_vec(&ray.id, "start point", &ray.from)?;
        finite_vec(&ray.id, "end point", &ray.to)?;
        let width = ray.resolved_width();
        if !width.is_finite() || width < 0.0 {
            return Err(SceneError::NegativeSize {
                id: ray.id.clone(),
                field: "width",
            });
        }
    }
    Ok(())
}

fn finite(id: &str, field: &'static str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFiniteValue {
            id: id.to_string(),
            field,
        })
    }
}

fn finite_vec(id: &str, field: &'static str, value: &Vec2) -> Result<(), SceneError> {
    if utils::is_finite(value) {
        Ok(())
    } else {
        Err(SceneError::NonFiniteValue {
            id: id.to_string(),
            field,
        })
    }
}

fn extent(id: &str, field: &'static str, size: &Size) -> Result<(), SceneError> {
    if size.is_valid() {
        Ok(())
    } else {
        Err(SceneError::NegativeSize {
            id: id.to_string(),
            field,
        })
    }
}

fn spawn_mirror(world: &mut World, spec: &MirrorSpec) -> Result<Entity, StoreError> {
    let entity = world.create_entity(EntityTags::MIRROR);
    world.insert(entity, Position(spec.position))?;
    world.insert(entity, Velocity(spec.velocity.unwrap_or_else(Vec2::zeros)))?;
    world.insert(entity, Angle::from_degrees(spec.angle_degrees))?;
    world.insert(entity, spec.size)?;
    world.insert(entity, color_or_default(spec.color.as_ref()))?;
    Ok(entity)
}

fn spawn_object(world: &mut World, spec: &ObjectSpec) -> Result<Entity, StoreError> {
    let mut tags = EntityTags::OBJECT;
    if spec.variant == ObjectVariant::Virtual {
        tags |= EntityTags::VIRTUAL;
    }
    let entity = world.create_entity(tags);
    world.insert(entity, Position(spec.position))?;
    world.insert(entity, spec.resolved_size())?;
    world.insert(entity, color_or_default(spec.color.as_ref()))?;
    world.insert(entity, Pulsing(spec.is_pulsing))?;
    Ok(entity)
}

fn spawn_ray(world: &mut World, spec: &RaySpec) -> Result<Entity, StoreError> {
    let entity = world.create_entity(EntityTags::RAY);
    let segment = RaySegment::new(spec.from, spec.to, spec.resolved_width());
    world.insert(entity, Position(spec.from))?;
    world.insert(entity, Size::new(segment.width, segment.length()))?;
    world.insert(entity, Angle(segment.angle()))?;
    world.insert(entity, segment)?;
    world.insert(entity, ray_color_or_default(spec.color.as_ref()))?;
    Ok(entity)
}

fn spawn_viewer(world: &mut World, spec: &ViewerSpec) -> Result<Entity, StoreError> {
    let mut tags = EntityTags::VIEWER;
    if spec.variant == ViewerVariant::Virtual {
        tags |= EntityTags::VIRTUAL;
    }
    let entity = world.create_entity(tags);
    world.insert(entity, Position(spec.position))?;
    world.insert(entity, spec.resolved_size())?;
    world.insert(entity, color_or_default(spec.color.as_ref()))?;
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_load_default_scene() {
        let scene = SceneDescription::default_scene();
        let (world, ids) = initialize_from_scene(&scene).unwrap();

        assert_eq!(world.len(), 4);
        assert_eq!(ids.len(), 4);
        assert_eq!(world.count_with(EntityTags::MIRROR), 2);

        let mirror = ids.get("mirror1").unwrap();
        assert_relative_eq!(world.angle(mirror).unwrap(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(world.color(mirror).unwrap(), "blue");
        assert_eq!(world.velocity(mirror).unwrap(), Vec2::zeros());

        let object = ids.get("object1").unwrap();
        assert!(world.is_pulsing(object).unwrap());
        assert!(world.tags(object).unwrap().contains(EntityTags::OBJECT));
    }

    #[test]
    fn test_mirrors_load_first_in_scene_order() {
        let scene = SceneDescription::default_scene();
        let (world, ids) = initialize_from_scene(&scene).unwrap();

        let names: Vec<_> = world
            .entities_with(EntityTags::MIRROR)
            .filter_map(|entity| ids.name_of(entity))
            .collect();
        assert_eq!(names, vec!["mirror1", "mirror2"]);
    }

    #[test]
    fn test_defaults_reach_the_store() {
        let mut scene = SceneDescription::new();
        scene.viewers.push(ViewerSpec::new("eye", Vec2::new(1.0, 2.0)));
        scene.rays.push(RaySpec::new("beam", Vec2::zeros(), Vec2::new(3.0, 4.0)));

        let (world, ids) = initialize_from_scene(&scene).unwrap();

        let eye = ids.get("eye").unwrap();
        assert_eq!(world.size(eye).unwrap(), Size::square(20.0));
        assert_eq!(world.color(eye).unwrap(), "black");

        let beam = ids.get("beam").unwrap();
        assert_eq!(world.color(beam).unwrap(), "yellow");
        let segment = world.ray_segment(beam).unwrap();
        assert_eq!(segment.width, 2.0);
        assert_relative_eq!(world.size(beam).unwrap().height, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_virtual_variants_are_tagged() {
        let mut scene = SceneDescription::new();
        let mut image = ViewerSpec::new("image", Vec2::zeros());
        image.variant = ViewerVariant::Virtual;
        scene.viewers.push(image);

        let (world, ids) = initialize_from_scene(&scene).unwrap();
        let tags = world.tags(ids.get("image").unwrap()).unwrap();
        assert!(tags.contains(EntityTags::VIEWER | EntityTags::VIRTUAL));
    }

    #[test]
    fn test_rejects_duplicate_identifiers() {
        let mut scene = SceneDescription::default_scene();
        scene.viewers.push(ViewerSpec::new("mirror1", Vec2::zeros()));

        assert_eq!(
            initialize_from_scene(&scene).unwrap_err(),
            SceneError::DuplicateIdentifier("mirror1".into())
        );
    }

    #[test]
    fn test_rejects_empty_identifier() {
        let mut scene = SceneDescription::new();
        scene.objects.push(ObjectSpec::new("", Vec2::zeros()));
        assert_eq!(validate_scene(&scene), Err(SceneError::EmptyIdentifier));
    }

    #[test]
    fn test_rejects_zero_length_mirror() {
        let mut scene = SceneDescription::new();
        scene
            .mirrors
            .push(MirrorSpec::new("flat", Vec2::zeros(), 0.0, Size::new(0.0, 10.0)));

        assert!(matches!(
            initialize_from_scene(&scene),
            Err(SceneError::ZeroLengthMirror { length, .. }) if length == 0.0
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut scene = SceneDescription::new();
        scene
            .mirrors
            .push(MirrorSpec::new("m", Vec2::zeros(), f64::NAN, Size::new(10.0, 1.0)));
        assert!(matches!(
            validate_scene(&scene),
            Err(SceneError::NonFiniteValue { field: "angle", .. })
        ));

        let mut scene = SceneDescription::new();
        scene.objects.push(ObjectSpec::new("o", Vec2::new(f64::INFINITY, 0.0)));
        assert!(matches!(
            validate_scene(&scene),
            Err(SceneError::NonFiniteValue { field: "position", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_sizes() {
        let mut scene = SceneDescription::new();
        scene
            .viewers
            .push(ViewerSpec::new("v", Vec2::zeros()).with_size(Size::new(-1.0, 5.0)));
        assert!(matches!(
            validate_scene(&scene),
            Err(SceneError::NegativeSize { field: "size", .. })
        ));
    }
}
