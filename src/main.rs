use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;
use std::env;

use farside::config::{load_sim_config, SimConfig};
use farside::seed::GalaxySeed;
use farside::simulation::SimulationPlugin;
use farside::streaming::{GalaxyMap, LoadTimer};
use farside::surface::SurfaceWorker;
use farside::{graphics, ship};

/// Builds the galaxy-level resources once the config is final.
fn init_galaxy(mut commands: Commands, cfg: Res<SimConfig>) {
    let debug_mode = env::var("FARSIDE_DEBUG").is_ok();
    let seed = GalaxySeed::new(debug_mode);
    commands.insert_resource(GalaxyMap::generate(seed.0, &cfg));
    commands.insert_resource(LoadTimer::from_config(&cfg));
    commands.insert_resource(seed);
}

fn spawn_player(mut commands: Commands, cfg: Res<SimConfig>) {
    ship::spawn_basic_ship(&mut commands, &cfg, Vec2::ZERO, true);
}

/// Space has no ambient gravity; orbits are kinematic.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Farside".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_sim_config overwrites them from
        // assets/sim.toml (if present) before anything else runs.
        .insert_resource(SimConfig::default())
        .insert_resource(SurfaceWorker::spawn())
        // pixels_per_meter(1.0) keeps world units and physics units identical,
        // so collider masses and contact impulses match the tuned thresholds.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        .add_plugins(SimulationPlugin::default())
        .add_systems(
            Startup,
            (
                load_sim_config,
                init_galaxy,
                graphics::setup_camera,
                spawn_player,
                setup_physics_config,
            )
                .chain(),
        )
        .run();
}
