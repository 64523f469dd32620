//! Simulation engine
//!
//! [`Simulation`] owns the scene description, the world built from it, and
//! the per-frame schedule. It is the single entry point used by drivers and
//! by the renderer/editor collaborators.

use crate::config::{ConfigError, SimulationConfig};
use crate::ecs::systems::frame_schedule;
use crate::ecs::{Entity, EntityKind, EntityTags, FrameContext, RaySegment, StoreError, SystemSchedule, World};
use crate::foundation::math::Vec2;
use crate::reflection::{self, InspectionResult};
use crate::scene::{initialize_from_scene, IdMap, MergeSummary, SceneDescription, SceneError};
use thiserror::Error;

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// No entity is registered under the identifier
    #[error("no entity with id '{0}'")]
    LookupFailure(String),

    /// The identifier names an entity of another kind
    #[error("'{id}' is not a {expected}")]
    WrongKind {
        /// Offending identifier
        id: String,
        /// Kind the caller asked for
        expected: EntityKind,
    },

    /// Time step is zero, negative or not finite
    #[error("invalid time step {0}")]
    InvalidTimeStep(f64),

    /// Screen extent is not positive
    #[error("invalid screen size {width}x{height}")]
    InvalidScreen {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },

    /// Store access failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Scene description rejected
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Whether the error is an unknown identifier
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::LookupFailure(_))
    }
}

fn check_time_step(delta_time: f64) -> Result<(), EngineError> {
    if delta_time.is_finite() && delta_time > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidTimeStep(delta_time))
    }
}

fn check_screen(width: f64, height: f64) -> Result<(), EngineError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidScreen { width, height })
    }
}

/// Run one frame on `world`: movement, then the boundary bounce
///
/// Inputs are validated before anything is touched.
pub fn advance(world: &mut World, delta_time: f64, screen_width: f64, screen_height: f64) -> Result<(), EngineError> {
    check_time_step(delta_time)?;
    check_screen(screen_width, screen_height)?;

    let frame = FrameContext {
        delta_time,
        screen_width,
        screen_height,
    };
    frame_schedule().run(world, &frame);
    Ok(())
}

/// Read-back view of one entity for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    /// Scene identifier
    pub id: String,
    /// Store handle
    pub entity: Entity,
    /// Entity kind
    pub kind: EntityKind,
    /// Whether the entity is a mirror image
    pub is_virtual: bool,
    /// Anchor position
    pub position: Vec2,
    /// Width and height
    pub size: Option<(f64, f64)>,
    /// Orientation in radians
    pub angle: Option<f64>,
    /// Fill or stroke color
    pub color: String,
    /// Pulsing flag, objects only
    pub is_pulsing: bool,
    /// Drawn segment, rays only
    pub segment: Option<RaySegment>,
}

/// The simulation: scene description, world and frame schedule
pub struct Simulation {
    config: SimulationConfig,
    scene: SceneDescription,
    world: World,
    ids: IdMap,
    schedule: SystemSchedule,
    epoch: u64,
    frame_count: u64,
}

impl Simulation {
    /// Create a simulation from a configuration and a scene
    pub fn new(config: SimulationConfig, scene: SceneDescription) -> Result<Self, EngineError> {
        config.validate()?;
        let (world, ids) = initialize_from_scene(&scene)?;
        log::info!(
            "Simulation ready: {} entities on a {}x{} screen",
            world.len(),
            config.screen.width,
            config.screen.height
        );

        Ok(Self {
            config,
            scene,
            world,
            ids,
            schedule: frame_schedule(),
            epoch: 0,
            frame_count: 0,
        })
    }

    /// Replace the scene, rebuilding the world
    ///
    /// On error the previous scene and world stay in place.
    pub fn reload(&mut self, scene: SceneDescription) -> Result<(), EngineError> {
        let (world, ids) = initialize_from_scene(&scene)?;
        self.scene = scene;
        self.world = world;
        self.ids = ids;
        self.epoch += 1;
        log::info!("Scene reloaded (epoch {}, {} entities)", self.epoch, self.world.len());
        Ok(())
    }

    /// Advance the simulation by `delta_time` seconds
    ///
    /// Steps longer than the configured maximum are clamped to it.
    pub fn advance(&mut self, delta_time: f64) -> Result<(), EngineError> {
        if let Err(err) = check_time_step(delta_time) {
            log::warn!("Rejected frame: {err}");
            return Err(err);
        }

        let max = self.config.tick.max_delta_time;
        if delta_time > max {
            log::debug!("Clamping time step {delta_time} to {max}");
        }
        let frame = FrameContext {
            delta_time: delta_time.min(max),
            screen_width: self.config.screen.width,
            screen_height: self.config.screen.height,
        };
        self.schedule.run(&mut self.world, &frame);
        self.frame_count += 1;
        Ok(())
    }

    /// Advance by one fixed step from the configuration
    pub fn step(&mut self) -> Result<(), EngineError> {
        self.advance(self.config.tick.fixed_delta_time)
    }

    /// Change the screen extent used by the boundary system
    pub fn set_screen_size(&mut self, width: f64, height: f64) -> Result<(), EngineError> {
        check_screen(width, height)?;
        self.config.screen.width = width;
        self.config.screen.height = height;
        Ok(())
    }

    /// Inspect `object_id` as seen by `viewer_id`
    pub fn inspect(&self, object_id: &str, viewer_id: &str) -> Result<InspectionResult, EngineError> {
        reflection::inspect(&self.world, &self.ids, object_id, viewer_id, &self.config.reflection).map_err(|err| {
            if err.is_lookup_failure() {
                log::warn!("Inspection failed: {err}");
            }
            err
        })
    }

    /// Inspect and hand the result to `on_emit`
    pub fn inspect_with<F>(&self, object_id: &str, viewer_id: &str, on_emit: F) -> Result<(), EngineError>
    where
        F: FnOnce(InspectionResult),
    {
        let result = self.inspect(object_id, viewer_id)?;
        on_emit(result);
        Ok(())
    }

    /// Inspect, merge the result into the scene and rebuild the world
    ///
    /// Current mirror positions and velocities are written back to the scene
    /// first so the rebuild does not rewind moving mirrors.
    pub fn inspect_and_merge(&mut self, object_id: &str, viewer_id: &str) -> Result<InspectionResult, EngineError> {
        let result = self.inspect(object_id, viewer_id)?;

        let mut scene = self.scene.clone();
        self.sync_mirrors(&mut scene)?;
        let summary: MergeSummary = scene.merge_inspection(&result, object_id);
        log::info!(
            "Inspected '{object_id}': {} paths, {} skipped, {} records added",
            result.paths.len(),
            result.skipped.len(),
            summary.added
        );

        self.reload(scene)?;
        Ok(result)
    }

    fn sync_mirrors(&self, scene: &mut SceneDescription) -> Result<(), EngineError> {
        for mirror in &mut scene.mirrors {
            let entity = self
                .ids
                .get(&mirror.id)
                .ok_or_else(|| EngineError::LookupFailure(mirror.id.clone()))?;
            mirror.position = self.world.position(entity)?;
            mirror.velocity = Some(self.world.velocity(entity)?);
        }
        Ok(())
    }

    /// Handle for a scene identifier
    pub fn entity(&self, id: &str) -> Result<Entity, EngineError> {
        self.ids.get(id).ok_or_else(|| EngineError::LookupFailure(id.to_string()))
    }

    /// Everything a renderer needs, in store order
    pub fn render_snapshot(&self) -> Result<Vec<EntityView>, EngineError> {
        let mut views = Vec::with_capacity(self.world.len());
        for (id, entity) in self.ids.iter() {
            let tags = self.world.tags(entity)?;
            let Some(kind) = EntityKind::from_tags(tags) else {
                continue;
            };
            views.push(EntityView {
                id: id.to_string(),
                entity,
                kind,
                is_virtual: tags.contains(EntityTags::VIRTUAL),
                position: self.world.position(entity)?,
                size: self
                    .world
                    .size(entity)
                    .ok()
                    .map(|size| (size.width, size.height)),
                angle: self.world.angle(entity).ok(),
                color: self.world.color(entity)?.to_string(),
                is_pulsing: self.world.is_pulsing(entity).unwrap_or(false),
                segment: self.world.ray_segment(entity).ok(),
            });
        }
        Ok(views)
    }

    /// The scene description
    pub const fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    /// The world
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The id map for the current world
    pub const fn ids(&self) -> &IdMap {
        &self.ids
    }

    /// The configuration
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of world rebuilds so far; handles from older epochs are stale
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of frames advanced
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
