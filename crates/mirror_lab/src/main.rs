//! Mirror lab
//!
//! Headless driver for the reflection engine: loads the default scene, sets
//! the mirrors drifting, runs a few seconds of frames and inspects the
//! pulsing object from the primary viewer.
//!
//! Usage: `mirror_lab [config.toml|config.ron]`

use mirror_engine::foundation::logging;
use mirror_engine::prelude::*;
use rand::Rng;

/// Seconds of simulated time before the inspection
const RUN_SECONDS: f64 = 3.0;

/// Largest initial mirror speed, in scene units per second
const MAX_MIRROR_SPEED: f64 = 120.0;

fn load_config() -> Result<SimulationConfig, EngineError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            Ok(SimulationConfig::load_from_file(path)?)
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn drifting_scene(rng: &mut impl Rng) -> SceneDescription {
    let mut scene = SceneDescription::default_scene();
    for mirror in &mut scene.mirrors {
        let speed = rng.gen_range(-MAX_MIRROR_SPEED..=MAX_MIRROR_SPEED);
        log::debug!("{} starts at {speed:.1} units/s", mirror.id);
        mirror.velocity = Some(Vec2::new(speed, 0.0));
    }
    scene
}

fn run() -> Result<(), EngineError> {
    let config = load_config()?;
    let frames = (RUN_SECONDS / config.tick.fixed_delta_time).ceil() as u64;
    let mut sim = Simulation::new(config, drifting_scene(&mut rand::thread_rng()))?;

    for _ in 0..frames {
        sim.step()?;
    }
    log::info!("Ran {} frames", sim.frame_count());

    let Some(object_id) = sim
        .scene()
        .objects
        .iter()
        .find(|object| object.is_pulsing)
        .map(|object| object.id.clone())
    else {
        log::warn!("No pulsing object to inspect");
        return Ok(());
    };
    let Some(viewer_id) = sim.scene().primary_viewer().map(|viewer| viewer.id.clone()) else {
        log::warn!("Scene has no viewer");
        return Ok(());
    };

    let result = sim.inspect_and_merge(&object_id, &viewer_id)?;
    for path in &result.paths {
        log::info!(
            "{}: reflection at ({:.1}, {:.1}), virtual viewer at ({:.1}, {:.1})",
            path.mirror_id,
            path.reflection_point.x,
            path.reflection_point.y,
            path.virtual_viewer.x,
            path.virtual_viewer.y
        );
    }
    for skipped in &result.skipped {
        log::info!("{}: skipped, {}", skipped.mirror_id, skipped.reason);
    }

    for view in sim.render_snapshot()? {
        log::debug!(
            "{:<48} {:<6} ({:>7.1}, {:>7.1}) {}",
            view.id,
            view.kind,
            view.position.x,
            view.position.y,
            view.color
        );
    }
    Ok(())
}

fn main() {
    logging::init_with_default_filter("info");

    if let Err(err) = run() {
        log::error!("mirror_lab failed: {err}");
        std::process::exit(1);
    }
}
