//! End-to-end reflection scenarios through the public API

use approx::assert_relative_eq;
use mirror_engine::ecs::systems::apply_boundary;
use mirror_engine::prelude::*;
use mirror_engine::reflection::SkipReason;
use mirror_engine::scene::{ObjectVariant, RayKind, ViewerVariant};

/// Horizontal mirror along y = 300 with the object straight above the viewer
fn vertical_sight_line(object_size: f64, viewer_size: f64, thickness: f64) -> SceneDescription {
    let mut scene = SceneDescription::new();
    scene.mirrors.push(MirrorSpec::new(
        "mirror",
        Vec2::new(400.0, 300.0 - thickness / 2.0),
        0.0,
        Size::new(200.0, thickness),
    ));
    scene.objects.push(
        ObjectSpec::new("object", Vec2::new(300.0, 100.0) - Vec2::repeat(object_size / 2.0))
            .with_size(Size::square(object_size)),
    );
    scene.viewers.push(
        ViewerSpec::new("viewer", Vec2::new(300.0, 500.0) - Vec2::repeat(viewer_size / 2.0))
            .with_size(Size::square(viewer_size)),
    );
    scene
}

fn assert_vertical_path(result: &InspectionResult) {
    assert_eq!(result.paths.len(), 1);
    assert!(result.skipped.is_empty());

    let path = &result.paths[0];
    assert_relative_eq!(path.reflection_point, Vec2::new(300.0, 300.0), epsilon = 1e-9);
    assert_relative_eq!(path.virtual_viewer, Vec2::new(300.0, 100.0), epsilon = 1e-9);

    let incident = result.rays.iter().find(|ray| ray.kind == RayKind::Incident).unwrap();
    assert_relative_eq!(incident.from, Vec2::new(300.0, 100.0), epsilon = 1e-9);
    assert_relative_eq!(incident.to, Vec2::new(300.0, 300.0), epsilon = 1e-9);

    let reflected = result.rays.iter().find(|ray| ray.kind == RayKind::Reflected).unwrap();
    assert_relative_eq!(reflected.from, Vec2::new(300.0, 300.0), epsilon = 1e-9);
    assert_relative_eq!(reflected.to, Vec2::new(300.0, 500.0), epsilon = 1e-9);
}

#[test]
fn test_point_entities_reflect_straight_back() {
    let scene = vertical_sight_line(0.0, 0.0, 0.0);
    let (world, ids) = initialize_from_scene(&scene).unwrap();

    let result = inspect(&world, &ids, "object", "viewer", &ReflectionConfig::default()).unwrap();

    assert_vertical_path(&result);
    assert_relative_eq!(result.virtual_viewers[0].position, Vec2::new(300.0, 100.0), epsilon = 1e-9);
}

#[test]
fn test_sized_entities_reflect_from_their_centers() {
    let scene = vertical_sight_line(30.0, 20.0, 20.0);
    let (world, ids) = initialize_from_scene(&scene).unwrap();

    let result = inspect(&world, &ids, "object", "viewer", &ReflectionConfig::default()).unwrap();

    assert_vertical_path(&result);
    let image = &result.virtual_viewers[0];
    assert_relative_eq!(image.position, Vec2::new(290.0, 90.0), epsilon = 1e-9);
    assert_eq!(image.variant, ViewerVariant::Virtual);
    assert_eq!(result.virtual_objects[0].variant, ObjectVariant::Virtual);
}

#[test]
fn test_repeated_inspection_is_idempotent() {
    let mut sim = Simulation::new(SimulationConfig::default(), SceneDescription::default_scene()).unwrap();

    let first = sim.inspect_and_merge("object1", "viewer1").unwrap();
    let after_first = sim.scene().clone();
    let second = sim.inspect_and_merge("object1", "viewer1").unwrap();

    assert_eq!(first, second);
    assert_eq!(sim.scene(), &after_first);
    assert_eq!(sim.scene().rays.len(), 4);
    assert_eq!(sim.world().len(), 12);
    assert_eq!(sim.epoch(), 2);
}

#[test]
fn test_lookup_failure_changes_nothing() {
    let mut sim = Simulation::new(SimulationConfig::default(), SceneDescription::default_scene()).unwrap();
    let before = sim.render_snapshot().unwrap();

    let err = sim.inspect_and_merge("object1", "nobody").unwrap_err();

    assert!(err.is_lookup_failure());
    assert_eq!(sim.render_snapshot().unwrap(), before);
    assert_eq!(sim.epoch(), 0);
}

#[test]
fn test_invalid_time_step_is_rejected() {
    let mut scene = SceneDescription::default_scene();
    scene.mirrors[0].velocity = Some(Vec2::new(40.0, 0.0));
    let mut sim = Simulation::new(SimulationConfig::default(), scene).unwrap();
    let before = sim.render_snapshot().unwrap();

    assert!(matches!(sim.advance(0.0), Err(EngineError::InvalidTimeStep(_))));
    assert!(matches!(sim.advance(f64::NAN), Err(EngineError::InvalidTimeStep(_))));
    assert_eq!(sim.render_snapshot().unwrap(), before);
}

#[test]
fn test_left_edge_bounce() {
    let mut scene = SceneDescription::new();
    scene.mirrors.push(
        MirrorSpec::new("m", Vec2::new(-5.0, 300.0), 90.0, Size::new(200.0, 20.0))
            .with_velocity(Vec2::new(-20.0, 0.0)),
    );
    let (mut world, ids) = initialize_from_scene(&scene).unwrap();
    let mirror = ids.get("m").unwrap();

    apply_boundary(&mut world, 800.0, 600.0);

    assert_eq!(world.position(mirror).unwrap(), Vec2::new(0.0, 300.0));
    assert_eq!(world.velocity(mirror).unwrap(), Vec2::new(20.0, 0.0));
}

#[test]
fn test_mirrors_bounce_between_edges() {
    let mut scene = SceneDescription::new();
    scene.mirrors.push(
        MirrorSpec::new("m", Vec2::new(300.0, 300.0), 90.0, Size::new(200.0, 20.0))
            .with_velocity(Vec2::new(500.0, 0.0)),
    );
    let mut sim = Simulation::new(SimulationConfig::default(), scene).unwrap();
    let mirror = sim.entity("m").unwrap();

    for _ in 0..600 {
        sim.step().unwrap();
        let x = sim.world().position(mirror).unwrap().x;
        assert!((0.0..=600.0).contains(&x), "mirror left the screen at x = {x}");
    }
}

#[test]
fn test_clip_policy_from_config() {
    let config = SimulationConfig::from_toml_str(
        r#"
        [reflection]
        segment_policy = "clip_to_segment"
        "#,
    )
    .unwrap();

    // both mirrors are 200 long and centered at y = 310; the paths through
    // them stay well within their ends
    let sim = Simulation::new(config, SceneDescription::default_scene()).unwrap();
    let result = sim.inspect("object1", "viewer1").unwrap();
    assert_eq!(result.paths.len(), 2);

    let mut scene = SceneDescription::default_scene();
    scene.mirrors[0].size.width = 6.0;
    let mut sim = Simulation::new(sim.config().clone(), scene).unwrap();
    let result = sim.inspect("object1", "viewer1").unwrap();
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.skipped[0].mirror_id, "mirror1");
    assert_eq!(result.skipped[0].reason, SkipReason::OutsideSegment);

    sim.reload(SceneDescription::default_scene()).unwrap();
    assert_eq!(sim.inspect("object1", "viewer1").unwrap().paths.len(), 2);
}
