//! Galaxy catalogue and distance-based streaming.
//!
//! The catalogue is a list of anchor points generated once from the galaxy
//! seed.  A throttled system compares each point against the control focus:
//! points strictly inside the load distance are materialised through the
//! seeded generators, loaded roots strictly outside it are marked for
//! removal (their orbiters cascade).  A body sitting exactly on the
//! boundary is left alone in both directions, so it never flip-flops.

use crate::asteroid::Asteroid;
use crate::celestial::create_astronomical_object_at;
use crate::config::SimConfig;
use crate::lifecycle::MarkedForRemoval;
use crate::seed::{seed_for, GalaxySeed};
use crate::ship::ControlFocus;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Root entity of a loaded astronomical object, tagged with the location
/// seed it was generated from.  Used to dedupe loads and pick unload
/// candidates.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstroBody {
    pub seed: i64,
}

/// Immutable catalogue of astronomical-object anchor points.
#[derive(Resource, Debug, Clone)]
pub struct GalaxyMap {
    pub points: Vec<Vec2>,
}

impl GalaxyMap {
    /// Scatters the catalogue uniformly over the galaxy square.  Points are
    /// snapped to integer coordinates because the location seed truncates.
    pub fn generate(galaxy_seed: i64, cfg: &SimConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(galaxy_seed as u64);
        let r = cfg.galaxy_radius;
        let points = (0..cfg.galaxy_object_count)
            .map(|_| {
                Vec2::new(
                    rng.gen_range(-r..r).trunc(),
                    rng.gen_range(-r..r).trunc(),
                )
            })
            .collect();
        GalaxyMap { points }
    }
}

/// Throttles the streaming check; walking the catalogue every frame would
/// be wasted work.
#[derive(Resource)]
pub struct LoadTimer(pub Timer);

impl LoadTimer {
    pub fn from_config(cfg: &SimConfig) -> Self {
        LoadTimer(Timer::from_seconds(
            cfg.load_check_interval_secs,
            TimerMode::Repeating,
        ))
    }
}

/// What the streaming check decides for one squared distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamAction {
    Load,
    Unload,
    Keep,
}

/// Single-threshold hysteresis: load strictly below, unload strictly above,
/// exact boundary keeps the current state.
pub fn stream_action(dist_sq: f32, load_distance: f32) -> StreamAction {
    let threshold_sq = load_distance * load_distance;
    if dist_sq < threshold_sq {
        StreamAction::Load
    } else if dist_sq > threshold_sq {
        StreamAction::Unload
    } else {
        StreamAction::Keep
    }
}

/// Loads catalogue points near the control focus and unloads roots far from
/// it.  Loose asteroids beyond the load distance despawn outright; they are
/// transient debris, not catalogued content.
#[allow(clippy::too_many_arguments)]
pub fn space_loading_system(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<LoadTimer>,
    cfg: Res<SimConfig>,
    galaxy_seed: Res<GalaxySeed>,
    map: Res<GalaxyMap>,
    focus: Query<&Transform, With<ControlFocus>>,
    loaded: Query<(Entity, &Transform, &AstroBody)>,
    asteroids: Query<(Entity, &Transform), With<Asteroid>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let Ok(focus_transform) = focus.single() else {
        return;
    };
    let focus_pos = focus_transform.translation.truncate();

    let loaded_seeds: HashSet<i64> = loaded.iter().map(|(_, _, body)| body.seed).collect();

    for &point in &map.points {
        let seed = seed_for(galaxy_seed.0, point.x as i64, point.y as i64);
        if loaded_seeds.contains(&seed) {
            continue;
        }
        if stream_action(focus_pos.distance_squared(point), cfg.load_distance)
            == StreamAction::Load
        {
            debug!("loading astronomical object at {point} (seed {seed})");
            let root = create_astronomical_object_at(&mut commands, &cfg, galaxy_seed.0, point);
            commands.entity(root).insert(AstroBody { seed });
        }
    }

    for (entity, transform, body) in loaded.iter() {
        let d2 = focus_pos.distance_squared(transform.translation.truncate());
        if stream_action(d2, cfg.load_distance) == StreamAction::Unload {
            debug!("unloading astronomical object (seed {})", body.seed);
            commands.entity(entity).insert(MarkedForRemoval);
        }
    }

    for (entity, transform) in asteroids.iter() {
        let d2 = focus_pos.distance_squared(transform.translation.truncate());
        if stream_action(d2, cfg.load_distance) == StreamAction::Unload {
            commands.entity(entity).insert(MarkedForRemoval);
        }
    }
}
