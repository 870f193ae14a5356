//! Headless end-to-end tests for streaming, generation determinism, and the
//! shatter pipeline.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics
//! step — so they run fast and deterministically in CI.  Physics components
//! are plain data here; contact events are injected by hand.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use farside::asteroid::Asteroid;
use farside::celestial::{BodySeed, Orbit, Star};
use farside::config::SimConfig;
use farside::lifecycle::Health;
use farside::seed::GalaxySeed;
use farside::ship::ControlFocus;
use farside::simulation::SimulationPlugin;
use farside::streaming::{AstroBody, GalaxyMap, LoadTimer};
use farside::surface::SurfaceWorker;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Full simulation wiring on a headless app, with one catalogue point and a
/// streaming timer that fires every frame.
fn sim_app(points: Vec<Vec2>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SimConfig::default());
    app.insert_resource(GalaxySeed(1));
    app.insert_resource(GalaxyMap { points });
    app.insert_resource(LoadTimer(Timer::from_seconds(0.0, TimerMode::Repeating)));
    app.insert_resource(SurfaceWorker::spawn());
    app.add_message::<CollisionEvent>();
    app.add_message::<ContactForceEvent>();
    app.add_plugins(SimulationPlugin::default());
    app
}

fn spawn_focus(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((ControlFocus, Transform::from_translation(position.extend(0.0))))
        .id()
}

fn move_focus(app: &mut App, focus: Entity, position: Vec2) {
    app.world_mut()
        .get_mut::<Transform>(focus)
        .unwrap()
        .translation = position.extend(0.0);
}

/// Stable fingerprint of everything currently generated.
fn generation_snapshot(app: &mut App) -> Vec<(i64, u64, u32)> {
    let world = app.world_mut();
    let mut snapshot: Vec<(i64, u64, u32)> = world
        .query::<(&BodySeed, &Orbit)>()
        .iter(world)
        .map(|(seed, orbit)| {
            (
                seed.0,
                orbit.radial_distance.to_bits() as u64,
                orbit.angular_speed.to_bits(),
            )
        })
        .collect();
    snapshot.sort();
    snapshot
}

// ── Streaming ─────────────────────────────────────────────────────────────────

#[test]
fn nearby_catalogue_point_loads_and_far_one_does_not() {
    let mut app = sim_app(vec![Vec2::new(1_000.0, 0.0), Vec2::new(200_000.0, 0.0)]);
    spawn_focus(&mut app, Vec2::ZERO);
    app.update();

    let world = app.world_mut();
    assert_eq!(
        world.query::<&AstroBody>().iter(world).count(),
        1,
        "exactly the nearby point should materialise"
    );
}

#[test]
fn leaving_a_system_unloads_it_with_all_orbiters() {
    let mut app = sim_app(vec![Vec2::new(1_000.0, 0.0)]);
    let focus = spawn_focus(&mut app, Vec2::ZERO);
    app.update();
    {
        let world = app.world_mut();
        assert!(world.query::<&BodySeed>().iter(world).count() > 0);
    }

    move_focus(&mut app, focus, Vec2::new(500_000.0, 0.0));
    // One frame marks the root and cascades, the next confirms nothing is left.
    app.update();
    app.update();

    let world = app.world_mut();
    assert_eq!(
        world.query::<&BodySeed>().iter(world).count(),
        0,
        "unloading must take every body in the system"
    );
    assert!(
        world.query::<&Asteroid>().iter(world).count() == 0,
        "belt asteroids must not outlive their system"
    );
}

#[test]
fn reloading_a_system_regenerates_it_identically() {
    let mut app = sim_app(vec![Vec2::new(1_000.0, 0.0)]);
    let focus = spawn_focus(&mut app, Vec2::ZERO);
    app.update();
    let first = generation_snapshot(&mut app);
    assert!(!first.is_empty());

    move_focus(&mut app, focus, Vec2::new(500_000.0, 0.0));
    app.update();
    app.update();

    move_focus(&mut app, focus, Vec2::ZERO);
    app.update();
    let second = generation_snapshot(&mut app);

    assert_eq!(first, second, "a reloaded system must be bit-identical");
}

#[test]
fn different_galaxy_seed_yields_a_different_system() {
    let mut a = sim_app(vec![Vec2::new(1_000.0, 0.0)]);
    spawn_focus(&mut a, Vec2::ZERO);
    a.update();
    let snap_a = generation_snapshot(&mut a);

    let mut b = sim_app(vec![Vec2::new(1_000.0, 0.0)]);
    b.insert_resource(GalaxySeed(2));
    spawn_focus(&mut b, Vec2::ZERO);
    b.update();
    let snap_b = generation_snapshot(&mut b);

    assert_ne!(snap_a, snap_b);
}

// ── Orbits over time ──────────────────────────────────────────────────────────

#[test]
fn loaded_system_orbits_stay_consistent_over_many_frames() {
    let mut app = sim_app(vec![Vec2::new(1_000.0, 0.0)]);
    spawn_focus(&mut app, Vec2::ZERO);
    for _ in 0..20 {
        app.update();
    }

    // Every orbiting body must still sit exactly on its orbit circle.
    let world = app.world_mut();
    let positions: std::collections::HashMap<Entity, Vec2> = world
        .query::<(Entity, &Transform)>()
        .iter(world)
        .map(|(e, t)| (e, t.translation.truncate()))
        .collect();
    for (entity, orbit) in world.query::<(Entity, &Orbit)>().iter(world) {
        let Some(parent) = orbit.parent else { continue };
        let pos = positions[&entity];
        let parent_pos = positions[&parent];
        let dist = pos.distance(parent_pos);
        assert!(
            (dist - orbit.radial_distance).abs() < 1e-2,
            "body drifted off its orbit: {dist} vs {}",
            orbit.radial_distance
        );
    }
}

// ── Shatter pipeline ──────────────────────────────────────────────────────────

#[test]
fn violent_contact_shatters_an_asteroid_into_fragments() {
    let mut app = sim_app(vec![]);
    spawn_focus(&mut app, Vec2::ZERO);
    let cfg = SimConfig::default();

    let asteroid = Asteroid::new(
        vec![
            Vec2::new(-15.0, -15.0),
            Vec2::new(15.0, -15.0),
            Vec2::new(15.0, 15.0),
            Vec2::new(-15.0, 15.0),
        ],
        &mut StdRng::seed_from_u64(1),
    );
    let health = Health::new(asteroid.area * cfg.health_per_area);
    let rock = app
        .world_mut()
        .spawn((asteroid, health, Transform::default(), Velocity::zero()))
        .id();
    let wall = app.world_mut().spawn(Transform::default()).id();

    app.world_mut()
        .write_message(ContactForceEvent {
            collider1: rock,
            collider2: wall,
            total_force: Vec2::ZERO,
            total_force_magnitude: 40_000.0,
            max_force_direction: Vec2::X,
            max_force_magnitude: 40_000.0,
        });
    app.update();

    assert!(app.world().get_entity(rock).is_err(), "parent must be gone");
    let world = app.world_mut();
    let fragments = world.query::<&Asteroid>().iter(world).count();
    assert!(fragments >= 3, "expected fragments, got {fragments}");
}

#[test]
fn fragments_below_minimum_area_terminate_the_cascade() {
    let mut app = sim_app(vec![]);
    spawn_focus(&mut app, Vec2::ZERO);
    let cfg = SimConfig::default();

    // 6x6 square: area 36, below the minimum shatter area of 100.
    let mut asteroid = Asteroid::new(
        vec![
            Vec2::new(-3.0, -3.0),
            Vec2::new(3.0, -3.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(-3.0, 3.0),
        ],
        &mut StdRng::seed_from_u64(1),
    );
    asteroid.do_shatter = true;
    let health = Health::new(asteroid.area * cfg.health_per_area);
    let rock = app
        .world_mut()
        .spawn((asteroid, health, Transform::default(), Velocity::zero()))
        .id();
    app.update();

    assert!(app.world().get_entity(rock).is_err());
    let world = app.world_mut();
    assert_eq!(world.query::<&Asteroid>().iter(world).count(), 0);
}

// ── Star colouring ────────────────────────────────────────────────────────────

#[test]
fn loaded_stars_carry_a_spectral_colour() {
    let mut app = sim_app(vec![Vec2::new(1_000.0, 0.0)]);
    spawn_focus(&mut app, Vec2::ZERO);
    app.update();

    let world = app.world_mut();
    for star in world.query::<&Star>().iter(world) {
        assert!(star.temperature >= 1_000.0 && star.temperature < 50_000.0);
        let expected =
            farside::spectral::wavelength_to_rgb_default(star.peak_wavelength_nm);
        assert_eq!(star.color, expected);
    }
}
