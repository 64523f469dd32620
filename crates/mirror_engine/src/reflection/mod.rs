//! Reflection and emission engine
//!
//! For an inspected object and a viewer, walks every mirror in the store and
//! produces the single-bounce reflection path through it: the reflection
//! point, the virtual viewer and virtual object images, and the incident and
//! reflected rays. Results are plain scene records; the store is only read.

pub mod derived_id;

pub use derived_id::{derived_id, DerivedKind};

use crate::config::{ReflectionConfig, SegmentPolicy};
use crate::ecs::{Entity, EntityKind, EntityTags, Size, World};
use crate::engine::EngineError;
use crate::foundation::math::Vec2;
use crate::geometry;
use crate::scene::{IdMap, ObjectSpec, ObjectVariant, RayKind, RaySpec, ViewerSpec, ViewerVariant};
use std::fmt;

/// Slack allowed past a mirror's ends under [`SegmentPolicy::ClipToSegment`]
pub const SEGMENT_TOLERANCE: f64 = 1e-9;

/// Why a mirror produced no reflection path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The sight line is parallel to the mirror line
    ParallelLines,
    /// The reflection point lies beyond the mirror's ends
    OutsideSegment,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParallelLines => f.write_str("sight line parallel to mirror"),
            Self::OutsideSegment => f.write_str("reflection point outside mirror"),
        }
    }
}

/// A mirror that produced no reflection path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMirror {
    /// Mirror identifier
    pub mirror_id: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Geometry of one reflection through one mirror
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionPath {
    /// Mirror identifier
    pub mirror_id: String,
    /// Where the light meets the mirror line
    pub reflection_point: Vec2,
    /// Viewer center reflected across the mirror line
    pub virtual_viewer: Vec2,
    /// Object center reflected across the mirror line
    pub virtual_object: Vec2,
}

/// Records produced by one inspection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InspectionResult {
    /// Virtual viewers, one per reflecting mirror
    pub virtual_viewers: Vec<ViewerSpec>,
    /// Virtual objects, one per reflecting mirror
    pub virtual_objects: Vec<ObjectSpec>,
    /// Incident and reflected rays, two per reflecting mirror
    pub rays: Vec<RaySpec>,
    /// Raw path geometry, one per reflecting mirror
    pub paths: Vec<ReflectionPath>,
    /// Mirrors that produced nothing
    pub skipped: Vec<SkippedMirror>,
}

impl InspectionResult {
    /// Whether no mirror produced a path
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of scene records produced
    pub fn record_count(&self) -> usize {
        self.virtual_viewers.len() + self.virtual_objects.len() + self.rays.len()
    }

    /// Path through a given mirror
    pub fn path_for(&self, mirror_id: &str) -> Option<&ReflectionPath> {
        self.paths.iter().find(|path| path.mirror_id == mirror_id)
    }
}

/// Resolve `id` to an entity of the expected kind
pub fn resolve(world: &World, ids: &IdMap, id: &str, expected: EntityKind) -> Result<Entity, EngineError> {
    let entity = ids.get(id).ok_or_else(|| EngineError::LookupFailure(id.to_string()))?;
    if world.tags(entity)?.contains(expected.tag()) {
        Ok(entity)
    } else {
        Err(EngineError::WrongKind {
            id: id.to_string(),
            expected,
        })
    }
}

struct Source<'a> {
    id: &'a str,
    center: Vec2,
    size: Size,
    color: &'a str,
}

impl<'a> Source<'a> {
    fn read(world: &'a World, entity: Entity, id: &'a str) -> Result<Self, EngineError> {
        let size = world.size(entity)?;
        Ok(Self {
            id,
            center: size.center_from(world.position(entity)?),
            size,
            color: world.color(entity)?,
        })
    }
}

/// Compute every single-bounce path from `object_id` to `viewer_id`
///
/// Mirrors are visited in store order. Geometry runs on entity centers. A
/// mirror whose sight line is parallel to it, or whose reflection point falls
/// outside it under [`SegmentPolicy::ClipToSegment`], is recorded in
/// [`InspectionResult::skipped`] and does not fail the inspection.
pub fn inspect(
    world: &World,
    ids: &IdMap,
    object_id: &str,
    viewer_id: &str,
    config: &ReflectionConfig,
) -> Result<InspectionResult, EngineError> {
    let object = resolve(world, ids, object_id, EntityKind::Object)?;
    let viewer = resolve(world, ids, viewer_id, EntityKind::Viewer)?;
    let object = Source::read(world, object, object_id)?;
    let viewer = Source::read(world, viewer, viewer_id)?;

    let mut result = InspectionResult::default();
    for mirror in world.entities_with(EntityTags::MIRROR) {
        let Some(mirror_id) = ids.name_of(mirror) else {
            log::warn!("Mirror {mirror} has no identifier, skipping");
            continue;
        };
        let size = world.size(mirror)?;
        let center = size.center_from(world.position(mirror)?);
        let angle = world.angle(mirror)?;

        let Some(point) = geometry::reflection_point(object.center, viewer.center, center, angle, size.width)
        else {
            log::debug!("{mirror_id}: {}", SkipReason::ParallelLines);
            result.skipped.push(SkippedMirror {
                mirror_id: mirror_id.to_string(),
                reason: SkipReason::ParallelLines,
            });
            continue;
        };

        if config.segment_policy == SegmentPolicy::ClipToSegment
            && !geometry::lies_on_segment(point, center, angle, size.width, SEGMENT_TOLERANCE)
        {
            log::debug!("{mirror_id}: {} at ({:.3}, {:.3})", SkipReason::OutsideSegment, point.x, point.y);
            result.skipped.push(SkippedMirror {
                mirror_id: mirror_id.to_string(),
                reason: SkipReason::OutsideSegment,
            });
            continue;
        }

        let path = ReflectionPath {
            mirror_id: mirror_id.to_string(),
            reflection_point: point,
            virtual_viewer: geometry::reflect_point_across_line(viewer.center, center, angle),
            virtual_object: geometry::reflect_point_across_line(object.center, center, angle),
        };
        log::debug!(
            "{mirror_id}: reflects at ({:.3}, {:.3})",
            path.reflection_point.x,
            path.reflection_point.y
        );
        emit(&mut result, &path, &object, &viewer, config);
        result.paths.push(path);
    }

    Ok(result)
}

fn emit(
    result: &mut InspectionResult,
    path: &ReflectionPath,
    object: &Source<'_>,
    viewer: &Source<'_>,
    config: &ReflectionConfig,
) {
    let id = |kind| derived_id(kind, object.id, viewer.id, &path.mirror_id);

    result.virtual_viewers.push(ViewerSpec {
        id: id(DerivedKind::VirtualViewer),
        position: viewer.size.anchor_for(path.virtual_viewer),
        size: Some(viewer.size),
        color: Some(viewer.color.to_string()),
        variant: ViewerVariant::Virtual,
    });
    result.virtual_objects.push(ObjectSpec {
        id: id(DerivedKind::VirtualObject),
        position: object.size.anchor_for(path.virtual_object),
        size: Some(object.size),
        color: Some(object.color.to_string()),
        is_pulsing: false,
        variant: ObjectVariant::Virtual,
    });

    let ray = |kind, from, to, ray_kind| RaySpec {
        id: id(kind),
        from,
        to,
        color: Some(config.ray_color.clone()),
        width: Some(config.ray_width),
        kind: ray_kind,
    };
    result.rays.push(ray(
        DerivedKind::IncidentRay,
        object.center,
        path.reflection_point,
        RayKind::Incident,
    ));
    result.rays.push(ray(
        DerivedKind::ReflectedRay,
        path.reflection_point,
        viewer.center,
        RayKind::Reflected,
    ));
}
