//! Runtime simulation configuration loaded from `assets/sim.toml`.
//!
//! [`SimConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_sim_config`] reads
//! `assets/sim.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! The core treats these values as constants for the lifetime of a run: no
//! system mutates the resource after startup.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable generation, streaming, and combat configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/sim.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Galaxy Catalogue ─────────────────────────────────────────────────────
    pub galaxy_object_count: usize,
    pub galaxy_radius: f32,

    // ── Streaming ────────────────────────────────────────────────────────────
    pub load_distance: f32,
    pub load_check_interval_secs: f32,

    // ── Celestial Bodies ─────────────────────────────────────────────────────
    pub min_planets: u32,
    pub max_planets: u32,
    pub min_planet_dist: f32,
    pub max_planet_dist: f32,
    pub min_star_temperature: f64,
    pub max_star_temperature: f64,
    pub min_star_radius: f32,
    pub max_star_radius: f32,
    pub min_star_rot_speed: f32,
    pub max_star_rot_speed: f32,
    pub min_planet_rot_speed: f32,
    pub max_planet_rot_speed: f32,
    pub min_planet_tangential_speed: f32,
    pub max_planet_tangential_speed: f32,
    pub min_planet_size_exp: u32,
    pub max_planet_size_exp: u32,
    pub max_planet_size: f32,
    pub moon_dist_factor: f32,
    pub moon_size_scale: f32,
    pub life_max_spawn: u32,

    // ── Asteroid Belt ────────────────────────────────────────────────────────
    pub belt_radius: f32,
    pub belt_band_width: f32,
    pub belt_max_spawn: u32,
    pub belt_velocity: f32,
    pub belt_spawn_interval_secs: f32,
    pub orbit_lock_gain: f32,

    // ── Asteroid Geometry ────────────────────────────────────────────────────
    pub min_asteroid_size: f32,
    pub max_asteroid_size: f32,
    pub asteroid_density: f32,
    pub asteroid_restitution: f32,
    pub asteroid_friction: f32,
    pub health_per_area: f32,

    // ── Shatter ──────────────────────────────────────────────────────────────
    pub min_shatter_area: f32,

    // ── Contact Damage ───────────────────────────────────────────────────────
    pub asteroid_shatter_threshold: f32,
    pub vehicle_damage_threshold: f32,
    pub impact_damage_multiplier: f32,
    pub vehicle_damage_multiplier: f32,

    // ── Vehicles ─────────────────────────────────────────────────────────────
    pub ship_max_hp: f32,
    pub ship_collider_radius: f32,
    pub projectile_damage: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime_secs: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Galaxy Catalogue
            galaxy_object_count: GALAXY_OBJECT_COUNT,
            galaxy_radius: GALAXY_RADIUS,
            // Streaming
            load_distance: LOAD_DISTANCE,
            load_check_interval_secs: LOAD_CHECK_INTERVAL_SECS,
            // Celestial Bodies
            min_planets: MIN_PLANETS,
            max_planets: MAX_PLANETS,
            min_planet_dist: MIN_PLANET_DIST,
            max_planet_dist: MAX_PLANET_DIST,
            min_star_temperature: MIN_STAR_TEMPERATURE,
            max_star_temperature: MAX_STAR_TEMPERATURE,
            min_star_radius: MIN_STAR_RADIUS,
            max_star_radius: MAX_STAR_RADIUS,
            min_star_rot_speed: MIN_STAR_ROT_SPEED,
            max_star_rot_speed: MAX_STAR_ROT_SPEED,
            min_planet_rot_speed: MIN_PLANET_ROT_SPEED,
            max_planet_rot_speed: MAX_PLANET_ROT_SPEED,
            min_planet_tangential_speed: MIN_PLANET_TANGENTIAL_SPEED,
            max_planet_tangential_speed: MAX_PLANET_TANGENTIAL_SPEED,
            min_planet_size_exp: MIN_PLANET_SIZE_EXP,
            max_planet_size_exp: MAX_PLANET_SIZE_EXP,
            max_planet_size: MAX_PLANET_SIZE,
            moon_dist_factor: MOON_DIST_FACTOR,
            moon_size_scale: MOON_SIZE_SCALE,
            life_max_spawn: LIFE_MAX_SPAWN,
            // Asteroid Belt
            belt_radius: BELT_RADIUS,
            belt_band_width: BELT_BAND_WIDTH,
            belt_max_spawn: BELT_MAX_SPAWN,
            belt_velocity: BELT_VELOCITY,
            belt_spawn_interval_secs: BELT_SPAWN_INTERVAL_SECS,
            orbit_lock_gain: ORBIT_LOCK_GAIN,
            // Asteroid Geometry
            min_asteroid_size: MIN_ASTEROID_SIZE,
            max_asteroid_size: MAX_ASTEROID_SIZE,
            asteroid_density: ASTEROID_DENSITY,
            asteroid_restitution: ASTEROID_RESTITUTION,
            asteroid_friction: ASTEROID_FRICTION,
            health_per_area: HEALTH_PER_AREA,
            // Shatter
            min_shatter_area: MIN_SHATTER_AREA,
            // Contact Damage
            asteroid_shatter_threshold: ASTEROID_SHATTER_THRESHOLD,
            vehicle_damage_threshold: VEHICLE_DAMAGE_THRESHOLD,
            impact_damage_multiplier: IMPACT_DAMAGE_MULTIPLIER,
            vehicle_damage_multiplier: VEHICLE_DAMAGE_MULTIPLIER,
            // Vehicles
            ship_max_hp: SHIP_MAX_HP,
            ship_collider_radius: SHIP_COLLIDER_RADIUS,
            projectile_damage: PROJECTILE_DAMAGE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime_secs: PROJECTILE_LIFETIME_SECS,
        }
    }
}

/// Startup system: attempt to load `assets/sim.toml` and overwrite the
/// `SimConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are
/// logged but never abort the simulation; a missing file is not an error.
pub fn load_sim_config(mut config: ResMut<SimConfig>) {
    let path = "assets/sim.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("loaded simulation config from {path}");
            }
            Err(e) => {
                warn!("failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place.
            info!("no {path} found; using compiled defaults");
        }
    }
}
