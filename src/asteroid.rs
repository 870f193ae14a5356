//! Asteroid spawning, belt sources, and orbit locking.
//!
//! An asteroid's shape is the convex hull of a handful of random points,
//! recentred so its centre of mass sits at the entity origin.  Health
//! scales with polygon area.  Belt-spawned asteroids are steered along
//! their ring until first contact frees them into plain rigid-body motion.

use crate::celestial::AsteroidBelt;
use crate::config::SimConfig;
use crate::constants::ASTEROID_HULL_POINTS;
use crate::error::SimError;
use crate::geometry::{convex_hull, polygon_area, polygon_centroid};
use crate::lifecycle::Health;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A destructible rock.  `vertices` are in local space, centred on the
/// polygon's area-weighted centroid.
#[derive(Component, Debug, Clone)]
pub struct Asteroid {
    pub vertices: Vec<Vec2>,
    /// Polygon area in world-unit².
    pub area: f32,
    /// Area-weighted centroid of `vertices`, in local space.  Kept alongside
    /// the physics backend's mass properties so geometry and dynamics can be
    /// cross-checked at shatter time.
    pub center_of_mass: Vec2,
    /// Fill tint, rolled once at creation.
    pub color: Color,
    /// Set by the contact resolver; the shatter system consumes it at the
    /// end of the frame.
    pub do_shatter: bool,
}

impl Asteroid {
    /// Builds the component from a polygon, deriving area and centre of mass
    /// and drawing a rocky tint from the caller's generator, so the whole
    /// asteroid stays a pure function of its seed.
    pub fn new(vertices: Vec<Vec2>, rng: &mut StdRng) -> Self {
        let area = polygon_area(&vertices);
        let center_of_mass = polygon_centroid(&vertices);
        let shade = rng.gen_range(0.4..0.8);
        Asteroid {
            vertices,
            area,
            center_of_mass,
            color: Color::srgb(shade, shade * 0.92, shade * 0.82),
            do_shatter: false,
        }
    }
}

/// Steering tether for a belt-spawned asteroid.  Present only while the
/// asteroid is still riding its ring; any contact removes it.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitLock {
    /// Star the belt belongs to.
    pub anchor: Entity,
    /// Ring radius to hold.
    pub radius: f32,
    /// Signed tangential cruise speed; the sign is the belt's rotation
    /// direction.
    pub speed: f32,
}

/// Hull vertices for a random asteroid of roughly `size` extent, recentred
/// on the centroid.  `None` when the draw degenerates below a triangle.
pub fn asteroid_vertices(rng: &mut StdRng, size: f32) -> Option<Vec<Vec2>> {
    let points: Vec<Vec2> = (0..ASTEROID_HULL_POINTS)
        .map(|_| Vec2::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size)))
        .collect();
    let hull = convex_hull(&points)?;
    if hull.len() < 3 {
        return None;
    }
    let centroid = polygon_centroid(&hull);
    Some(hull.iter().map(|v| *v - centroid).collect())
}

/// Spawns an asteroid with an explicit polygon, used both by the random
/// spawner and by the shatter system for fragments.
///
/// Returns `None` (with a logged warning) when the physics backend rejects
/// the polygon; nothing is spawned in that case.
pub fn spawn_asteroid_with_vertices(
    commands: &mut Commands,
    cfg: &SimConfig,
    rng: &mut StdRng,
    vertices: Vec<Vec2>,
    position: Vec2,
    velocity: Velocity,
) -> Option<Entity> {
    if vertices.len() < 3 {
        warn!(
            "{}",
            SimError::InsufficientVertices {
                got: vertices.len(),
                required: 3,
            }
        );
        return None;
    }
    let Some(collider) = Collider::convex_hull(&vertices) else {
        warn!(
            "{}",
            SimError::ColliderRejected {
                vertex_count: vertices.len(),
            }
        );
        return None;
    };

    let asteroid = Asteroid::new(vertices, rng);
    let health = Health::new(asteroid.area * cfg.health_per_area);
    let entity = commands
        .spawn((
            (
                asteroid,
                health,
                Transform::from_translation(position.extend(0.0)),
                RigidBody::Dynamic,
            ),
            (
                collider,
                ColliderMassProperties::Density(cfg.asteroid_density),
                Restitution::coefficient(cfg.asteroid_restitution),
                Friction::coefficient(cfg.asteroid_friction),
                velocity,
                ActiveEvents::COLLISION_EVENTS | ActiveEvents::CONTACT_FORCE_EVENTS,
            ),
        ))
        .id();
    Some(entity)
}

/// Spawns a random asteroid from `seed` at `position`.
pub fn spawn_asteroid(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: u64,
    position: Vec2,
    velocity: Velocity,
) -> Option<Entity> {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = rng.gen_range(cfg.min_asteroid_size..cfg.max_asteroid_size);
    let vertices = asteroid_vertices(&mut rng, size)?;
    spawn_asteroid_with_vertices(commands, cfg, &mut rng, vertices, position, velocity)
}

/// Rate-limited belt source.
///
/// Each tick, every belt under its locked-population cap emits one asteroid
/// at a random angle inside its annular band, moving tangentially and
/// tethered to the ring by an [`OrbitLock`].
pub fn belt_spawner_system(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<SimConfig>,
    mut belts: Query<(Entity, &Transform, &mut AsteroidBelt)>,
    locked: Query<&OrbitLock>,
) {
    for (star, transform, mut belt) in belts.iter_mut() {
        if !belt.timer.tick(time.delta()).just_finished() {
            continue;
        }
        let population = locked.iter().filter(|lock| lock.anchor == star).count();
        if population >= belt.max_spawn as usize {
            continue;
        }

        let mut rng = StdRng::seed_from_u64(rand::random());
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = belt.radius + rng.gen_range(-belt.band_width / 2.0..belt.band_width / 2.0);
        let star_pos = transform.translation.truncate();
        let position = star_pos + Vec2::from_angle(angle) * radius;
        // Tangential launch, perpendicular to the radial direction and
        // signed with the belt's rotation direction.
        let speed = belt.velocity * belt.direction;
        let linvel = Vec2::from_angle(angle + std::f32::consts::FRAC_PI_2) * speed;

        let seed = rng.gen::<u64>();
        if let Some(asteroid) = spawn_asteroid(
            &mut commands,
            &cfg,
            seed,
            position,
            Velocity {
                linvel,
                angvel: rng.gen_range(-0.5..0.5),
            },
        ) {
            commands.entity(asteroid).insert(OrbitLock {
                anchor: star,
                radius: belt.radius,
                speed,
            });
        }
    }
}

/// Steers locked asteroids along their ring.
///
/// Velocity is written directly: a locked asteroid is guided, not simulated.
/// The tangential component cruises at belt speed while a radial spring pulls
/// the asteroid back onto the ring.  Asteroids whose anchor star has unloaded
/// are freed to drift.
pub fn orbit_lock_system(
    mut commands: Commands,
    cfg: Res<SimConfig>,
    anchors: Query<&Transform, Without<OrbitLock>>,
    mut asteroids: Query<(Entity, &Transform, &OrbitLock, &mut Velocity)>,
) {
    for (entity, transform, lock, mut velocity) in asteroids.iter_mut() {
        let Ok(anchor_transform) = anchors.get(lock.anchor) else {
            commands.entity(entity).remove::<OrbitLock>();
            continue;
        };
        let anchor_pos = anchor_transform.translation.truncate();
        let offset = transform.translation.truncate() - anchor_pos;
        let dist = offset.length();
        if dist < f32::EPSILON {
            continue;
        }
        let radial = offset / dist;
        let tangent = radial.perp();
        let radial_correction = (lock.radius - dist) * cfg.orbit_lock_gain;
        velocity.linvel = tangent * lock.speed + radial * radial_correction;
    }
}
