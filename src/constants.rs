//! Centralised simulation constants.
//!
//! All tuneable values live here so they can be found and reasoned about in
//! one place.  `SimConfig::default()` mirrors every constant; any subset can
//! be overridden at runtime through `assets/sim.toml` without recompiling.

// ── Galaxy Catalogue ──────────────────────────────────────────────────────────

/// Number of astronomical-object anchor points scattered through the galaxy.
pub const GALAXY_OBJECT_COUNT: usize = 120;

/// Half-extent of the square region the catalogue points are scattered over
/// (world units).  Larger values spread systems further apart.
pub const GALAXY_RADIUS: f32 = 250_000.0;

// ── Streaming ─────────────────────────────────────────────────────────────────

/// Camera distance under which a catalogued body is loaded into the live
/// simulation, and over which a loaded body is unloaded.
///
/// A single threshold is used for both directions: load fires strictly below
/// it and unload strictly above it, so a body sitting exactly on the boundary
/// never oscillates between states.
pub const LOAD_DISTANCE: f32 = 25_000.0;

/// Seconds between streaming distance checks.  The check walks the whole
/// catalogue, so it is throttled rather than run every frame.
pub const LOAD_CHECK_INTERVAL_SECS: f32 = 4.0;

// ── Celestial Bodies ──────────────────────────────────────────────────────────

/// Minimum / maximum number of planets drawn for a planetary system.
pub const MIN_PLANETS: u32 = 1;
pub const MAX_PLANETS: u32 = 6;

/// Minimum / maximum radial gap drawn between consecutive planets
/// (world units).  Gaps accumulate, so orbits never overlap or reorder.
pub const MIN_PLANET_DIST: f32 = 600.0;
pub const MAX_PLANET_DIST: f32 = 1_200.0;

/// Star surface temperature draw range (kelvin).  1 000 K is a deep red
/// ember, 50 000 K a blue-white O-class; the visible tint comes from Wien's
/// law over this range.
pub const MIN_STAR_TEMPERATURE: f64 = 1_000.0;
pub const MAX_STAR_TEMPERATURE: f64 = 50_000.0;

/// Star visual radius draw range (world units).
pub const MIN_STAR_RADIUS: f32 = 60.0;
pub const MAX_STAR_RADIUS: f32 = 280.0;

/// Star self-rotation speed draw range (radians per second).
pub const MIN_STAR_ROT_SPEED: f32 = 0.002;
pub const MAX_STAR_ROT_SPEED: f32 = 0.05;

/// Planet self-rotation speed draw range (radians per second).
pub const MIN_PLANET_ROT_SPEED: f32 = 0.01;
pub const MAX_PLANET_ROT_SPEED: f32 = 0.3;

/// Planet tangential orbital speed draw range (world units per second).
pub const MIN_PLANET_TANGENTIAL_SPEED: f32 = 20.0;
pub const MAX_PLANET_TANGENTIAL_SPEED: f32 = 40.0;

/// Planet placeholder size is `2^exp` for an exponent drawn in this range.
/// The real surface is generated asynchronously and swapped in by seed.
pub const MIN_PLANET_SIZE_EXP: u32 = 7;
pub const MAX_PLANET_SIZE_EXP: u32 = 10;

/// Upper bound on planet visual size (world units), used to keep binary-star
/// separation clear of any planet orbit.
pub const MAX_PLANET_SIZE: f32 = 1_024.0;

/// Moon orbital distance as a multiple of its parent planet's size.
pub const MOON_DIST_FACTOR: f32 = 1.4;

/// Moon size scale relative to a planet drawn from the same exponent range.
pub const MOON_SIZE_SCALE: f32 = 0.25;

/// Maximum AI population a life-bearing planet's spawn marker allows.
pub const LIFE_MAX_SPAWN: u32 = 10;

/// Camera distance under which a star's galaxy-map marker is drawn.
pub const MARKER_VISIBILITY_STAR: f32 = 80_000.0;

/// Camera distance under which a planet's galaxy-map marker is drawn.
pub const MARKER_VISIBILITY_PLANET: f32 = 10_000.0;

// ── Asteroid Belt ─────────────────────────────────────────────────────────────

/// Belt (circumstellar disc) radius around the host star (world units).
pub const BELT_RADIUS: f32 = 1_500.0;

/// Width of the annular band the belt spawns into, centred on the radius.
pub const BELT_BAND_WIDTH: f32 = 220.0;

/// Maximum live asteroid population sourced from one belt.
pub const BELT_MAX_SPAWN: u32 = 180;

/// Tangential speed given to belt-spawned asteroids (world units per second).
pub const BELT_VELOCITY: f32 = 20.0;

/// Seconds between belt spawn attempts.  The belt is a rate-limited source,
/// not a physical body.
pub const BELT_SPAWN_INTERVAL_SECS: f32 = 1.0;

/// Spring gain pulling an orbit-locked asteroid back onto its belt ring.
/// Locked asteroids are steered, not simulated; any contact frees them.
pub const ORBIT_LOCK_GAIN: f32 = 0.8;

// ── Asteroid Geometry ─────────────────────────────────────────────────────────

/// Random asteroid bounding-box size draw range (world units).
pub const MIN_ASTEROID_SIZE: f32 = 14.0;
pub const MAX_ASTEROID_SIZE: f32 = 120.0;

/// Number of random points thrown into the box before hulling.
/// The hull of 7 points has at most 7 vertices, inside the physics backend's
/// 8-vertex convex polygon limit.
pub const ASTEROID_HULL_POINTS: usize = 7;

/// Minimum distance between two points before they are considered duplicates
/// during convex hull deduplication.  Prevents degenerate colliders.
pub const HULL_DEDUP_MIN_DIST: f32 = 0.5;

/// Collider density for asteroid rigid bodies (mass per world-unit²).
pub const ASTEROID_DENSITY: f32 = 0.5;

/// Asteroid restitution (bounciness) and contact friction.
pub const ASTEROID_RESTITUTION: f32 = 0.2;
pub const ASTEROID_FRICTION: f32 = 0.8;

/// Hit points per world-unit² of polygon area.
pub const HEALTH_PER_AREA: f32 = 0.3;

// ── Shatter ───────────────────────────────────────────────────────────────────

/// Asteroids below this area disappear instead of fracturing — terminal state.
pub const MIN_SHATTER_AREA: f32 = 100.0;

// ── Contact Damage ────────────────────────────────────────────────────────────

/// Contact impulse above which asteroid impact damage applies.
pub const ASTEROID_SHATTER_THRESHOLD: f32 = 15_000.0;

/// Contact impulse above which vehicles take collision damage.
pub const VEHICLE_DAMAGE_THRESHOLD: f32 = 15.0;

/// Asteroid damage per unit impulse per world-unit² of polygon area, applied
/// above the shatter threshold.  Health also scales with area, so the impulse
/// needed to break a full-health rock is size-independent:
/// `HEALTH_PER_AREA / IMPACT_DAMAGE_MULTIPLIER` = 30 000.
pub const IMPACT_DAMAGE_MULTIPLIER: f32 = 0.000_01;

/// Vehicle damage per unit impulse.
pub const VEHICLE_DAMAGE_MULTIPLIER: f32 = 0.4;

// ── Vehicles ──────────────────────────────────────────────────────────────────

/// Starting and maximum hit points for a basic ship.
pub const SHIP_MAX_HP: f32 = 100.0;

/// Ball collider radius for a basic ship (world units).
pub const SHIP_COLLIDER_RADIUS: f32 = 8.0;

/// Damage carried by one cannon projectile.
pub const PROJECTILE_DAMAGE: f32 = 15.0;

/// Projectile muzzle speed (world units per second).
pub const PROJECTILE_SPEED: f32 = 680.0;

/// Seconds before an unexploded projectile expires.
pub const PROJECTILE_LIFETIME_SECS: f32 = 5.0;

// ── Surface Worker ────────────────────────────────────────────────────────────

/// Capacity of the request / result channels between the simulation thread
/// and the surface-generation worker.  Requests beyond capacity are dropped
/// (the planet keeps its placeholder) rather than blocking the frame.
pub const SURFACE_QUEUE_CAPACITY: usize = 64;
