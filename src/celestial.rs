//! Celestial body components and the seeded generators that spawn them.
//!
//! Every generator takes an explicit 64-bit seed and builds its own
//! `StdRng` from it, so the same seed always yields the same system no
//! matter what other generation ran before it.  The pure `*_parts`
//! functions draw all random values; the `create_*` functions spawn the
//! entities.  Tests exercise the parts functions without an ECS world.

use crate::config::SimConfig;
use crate::constants::{MARKER_VISIBILITY_PLANET, MARKER_VISIBILITY_STAR};
use crate::seed::seed_for;
use crate::spectral::{temperature_to_wavelength_nm, wavelength_to_rgb_default};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The seed a body was generated from.  Re-generating with the same seed
/// reproduces the body exactly, which is what lets streamed-out systems be
/// reloaded without persistence.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySeed(pub i64);

/// Gravitational-centre classification of a loaded grouping's root.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Barycenter {
    /// A star with nothing orbiting it.
    LoneStar,
    /// One star with a planet roster.
    UniStellar,
    /// An invisible pivot shared by multiple stars.
    MultiStellar,
    /// A starless planet.
    RoguePlanet,
}

/// A star.  Colour is derived from surface temperature through Wien's law.
#[derive(Component, Debug, Clone)]
pub struct Star {
    /// Surface temperature in kelvin.
    pub temperature: f64,
    /// Peak emission wavelength in nanometres.
    pub peak_wavelength_nm: f64,
    /// Approximate visible tint.
    pub color: [u8; 3],
    /// Visual radius in world units.
    pub radius: f32,
}

/// A planet.  The `size` is the placeholder extent until the asynchronous
/// surface generator delivers the real map.
#[derive(Component, Debug, Clone, Copy)]
pub struct Planet {
    pub size: f32,
}

/// A moon orbiting a planet.
#[derive(Component, Debug, Clone, Copy)]
pub struct Moon {
    pub size: f32,
}

/// Galaxy map presence: marker tint and the camera distance under which the
/// marker is drawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct MapMarker {
    pub color: Color,
    pub visibility: f32,
}

impl MapMarker {
    pub fn star() -> Self {
        MapMarker {
            color: Color::srgb(1.0, 0.9, 0.2),
            visibility: MARKER_VISIBILITY_STAR,
        }
    }

    pub fn planet() -> Self {
        MapMarker {
            color: Color::srgb(0.3, 0.5, 1.0),
            visibility: MARKER_VISIBILITY_PLANET,
        }
    }
}

/// Budget for AI spawned near a life-bearing planet.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnCapacity {
    pub max: u32,
    pub spawned: u32,
}

/// Circular orbit state.  Position is fully determined by the parent's
/// position, `radial_distance`, and `angle`; the physics engine never moves
/// orbiting bodies.
///
/// `parent` is a plain entity handle, not a hierarchy relationship: if the
/// parent despawns, the cascade removal system notices the dangling handle
/// and removes the orbiter too.
#[derive(Component, Debug, Clone, Copy)]
pub struct Orbit {
    /// Body this orbit is centred on.  `None` for self-rotating anchors
    /// (stars, rogue planets) that spin in place but do not translate.
    pub parent: Option<Entity>,
    /// Distance to the parent, world units.
    pub radial_distance: f32,
    /// Current phase angle, radians.
    pub angle: f32,
    /// Signed angular speed, radians per second.  Sign carries the orbit
    /// direction for the whole system.
    pub angular_speed: f32,
    /// Self-rotation speed, radians per second.
    pub rotation_speed: f32,
}

/// Rate-limited asteroid source attached to a star.  The belt is a spawner,
/// not a physical body: it emits asteroids into an annular band and steers
/// them back onto the ring until first contact frees them.
#[derive(Component, Debug, Clone)]
pub struct AsteroidBelt {
    pub radius: f32,
    pub band_width: f32,
    pub max_spawn: u32,
    pub velocity: f32,
    /// `1.0` or `-1.0`, the host system's shared orbit direction.
    pub direction: f32,
    pub timer: Timer,
}

impl AsteroidBelt {
    fn from_config(cfg: &SimConfig, direction: f32) -> Self {
        AsteroidBelt {
            radius: cfg.belt_radius,
            band_width: cfg.belt_band_width,
            max_spawn: cfg.belt_max_spawn,
            velocity: cfg.belt_velocity,
            direction,
            timer: Timer::from_seconds(cfg.belt_spawn_interval_secs, TimerMode::Repeating),
        }
    }
}

// ── Pure draw functions ───────────────────────────────────────────────────────

/// All random values a star needs, drawn in a fixed order.
#[derive(Debug, Clone)]
pub struct StarParts {
    pub temperature: f64,
    pub radius: f32,
    pub rotation_speed: f32,
}

/// Draws star parameters.  Draw order is part of the determinism contract:
/// reordering these calls changes every galaxy.
pub fn star_parts(rng: &mut StdRng, cfg: &SimConfig) -> StarParts {
    StarParts {
        temperature: rng.gen_range(cfg.min_star_temperature..cfg.max_star_temperature),
        radius: rng.gen_range(cfg.min_star_radius..cfg.max_star_radius),
        rotation_speed: rng.gen_range(cfg.min_star_rot_speed..cfg.max_star_rot_speed),
    }
}

/// All random values a planet needs, drawn in a fixed order.
#[derive(Debug, Clone)]
pub struct PlanetParts {
    pub size: f32,
    pub rotation_speed: f32,
    pub tangential_speed: f32,
}

/// Draws planet parameters.  Size is a power of two so placeholder surfaces
/// tile cleanly until the generated map arrives.
pub fn planet_parts(rng: &mut StdRng, cfg: &SimConfig) -> PlanetParts {
    let exp = rng.gen_range(cfg.min_planet_size_exp..=cfg.max_planet_size_exp);
    PlanetParts {
        size: (2_u32.pow(exp) as f32).min(cfg.max_planet_size),
        rotation_speed: rng.gen_range(cfg.min_planet_rot_speed..cfg.max_planet_rot_speed),
        tangential_speed: rng
            .gen_range(cfg.min_planet_tangential_speed..cfg.max_planet_tangential_speed),
    }
}

// ── Spawners ──────────────────────────────────────────────────────────────────

fn star_bundle(parts: &StarParts, seed: i64, position: Vec2, rotation_speed: f32) -> impl Bundle {
    let peak_nm = temperature_to_wavelength_nm(parts.temperature);
    (
        Star {
            temperature: parts.temperature,
            peak_wavelength_nm: peak_nm,
            color: wavelength_to_rgb_default(peak_nm),
            radius: parts.radius,
        },
        BodySeed(seed),
        MapMarker::star(),
        Orbit {
            parent: None,
            radial_distance: 0.0,
            angle: 0.0,
            angular_speed: 0.0,
            rotation_speed,
        },
        Transform::from_translation(position.extend(0.0)),
    )
}

/// Spawns a lone star at `position` from `seed`.
pub fn create_star(commands: &mut Commands, cfg: &SimConfig, seed: i64, position: Vec2) -> Entity {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let parts = star_parts(&mut rng, cfg);
    let rotation_speed = parts.rotation_speed;
    commands
        .spawn((
            star_bundle(&parts, seed, position, rotation_speed),
            Barycenter::LoneStar,
        ))
        .id()
}

/// Spawns a planet orbiting `parent` at `radial_distance` and phase `angle`,
/// plus a moon further out on the same radial line when the seed calls for
/// one.
///
/// Every planet carries a [`SpawnCapacity`] life marker.  Returns the planet
/// entity and the radial extent its moon ring adds beyond the orbit (zero
/// without a moon) so the caller can widen the spacing to the next planet.
pub fn create_planet(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: i64,
    parent: Entity,
    parent_pos: Vec2,
    radial_distance: f32,
    direction: f32,
) -> (Entity, f32) {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let parts = planet_parts(&mut rng, cfg);
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    // Tangential speed converts to angular speed about the parent.
    let angular_speed = direction * parts.tangential_speed / radial_distance;

    let position = parent_pos + Vec2::from_angle(angle) * radial_distance;
    let planet_id = commands
        .spawn((
            Planet { size: parts.size },
            BodySeed(seed),
            MapMarker::planet(),
            SpawnCapacity {
                max: cfg.life_max_spawn,
                spawned: 0,
            },
            Orbit {
                parent: Some(parent),
                radial_distance,
                angle,
                angular_speed,
                rotation_speed: direction * parts.rotation_speed,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();

    let mut moon_extent = 0.0;
    if rng.gen_bool(0.5) {
        create_moon(
            commands,
            cfg,
            rng.gen::<i64>(),
            planet_id,
            position,
            parts.size,
            angle,
            direction,
        );
        moon_extent = parts.size * cfg.moon_dist_factor;
    }
    (planet_id, moon_extent)
}

/// Spawns a moon orbiting `parent` just outside the planet's own extent,
/// starting at the same phase angle (further out along the radial line).
#[allow(clippy::too_many_arguments)]
pub fn create_moon(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: i64,
    parent: Entity,
    parent_pos: Vec2,
    parent_size: f32,
    angle: f32,
    direction: f32,
) -> Entity {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let parts = planet_parts(&mut rng, cfg);
    let size = parts.size * cfg.moon_size_scale;
    let radial_distance = parent_size * cfg.moon_dist_factor;
    let position = parent_pos + Vec2::from_angle(angle) * radial_distance;
    commands
        .spawn((
            Moon { size },
            BodySeed(seed),
            Orbit {
                parent: Some(parent),
                radial_distance,
                angle,
                angular_speed: direction * parts.tangential_speed / radial_distance,
                rotation_speed: direction * parts.rotation_speed,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

/// Spawns a star with a full planet roster and an asteroid belt.
///
/// Planet distances accumulate outward from the star's radius, widened by
/// each spawned moon's ring, so orbits never overlap or reorder.  Every body
/// in the system shares one orbit direction drawn from the system seed.
pub fn create_planetary_system(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: i64,
    position: Vec2,
) -> Entity {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    let star_parts_drawn = star_parts(&mut rng, cfg);
    let rotation_speed = direction * star_parts_drawn.rotation_speed;
    let star = commands
        .spawn((
            star_bundle(&star_parts_drawn, seed, position, rotation_speed),
            Barycenter::UniStellar,
            AsteroidBelt::from_config(cfg, direction),
        ))
        .id();

    let planet_count = rng.gen_range(cfg.min_planets..=cfg.max_planets);
    let mut distance = star_parts_drawn.radius;
    for _ in 0..planet_count {
        distance += rng.gen_range(cfg.min_planet_dist..cfg.max_planet_dist);
        let (_, moon_extent) =
            create_planet(commands, cfg, rng.gen::<i64>(), star, position, distance, direction);
        // A moon ring must not cross the next planet's orbit.
        distance += moon_extent;
    }
    star
}

/// Spawns two stars in anti-phase orbit around an invisible barycentre.
///
/// Both stars share one radial distance and angular speed; their phase
/// angles differ by exactly π, so the pair stays mirrored forever.
pub fn create_binary_system(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: i64,
    position: Vec2,
) -> Entity {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    let barycenter = commands
        .spawn((
            Barycenter::MultiStellar,
            BodySeed(seed),
            Orbit {
                parent: None,
                radial_distance: 0.0,
                angle: 0.0,
                angular_speed: 0.0,
                rotation_speed: 0.0,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();

    // Separation clears the largest possible planet orbit around either star.
    let separation = cfg.max_planet_size * 1.5;
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let tangential = rng.gen_range(cfg.min_planet_tangential_speed..cfg.max_planet_tangential_speed);
    let angular_speed = direction * tangential / separation;

    for phase in [0.0, std::f32::consts::PI] {
        let star_seed = rng.gen::<i64>();
        let mut star_rng = StdRng::seed_from_u64(star_seed as u64);
        let parts = star_parts(&mut star_rng, cfg);
        let star_angle = angle + phase;
        let star_pos = position + Vec2::from_angle(star_angle) * separation;
        let rotation_speed = direction * parts.rotation_speed;
        let mut star = commands.spawn(star_bundle(&parts, star_seed, star_pos, rotation_speed));
        star.insert(Orbit {
            parent: Some(barycenter),
            radial_distance: separation,
            angle: star_angle,
            angular_speed,
            rotation_speed,
        });
    }
    barycenter
}

/// Spawns a starless stationary planet, with a moon half the time.
pub fn create_rogue_planet(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: i64,
    position: Vec2,
) -> Entity {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let parts = planet_parts(&mut rng, cfg);
    let planet = commands
        .spawn((
            Planet { size: parts.size },
            BodySeed(seed),
            Barycenter::RoguePlanet,
            MapMarker::planet(),
            Orbit {
                parent: None,
                radial_distance: 0.0,
                angle: 0.0,
                angular_speed: 0.0,
                rotation_speed: parts.rotation_speed,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();
    if rng.gen_bool(0.5) {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        create_moon(
            commands,
            cfg,
            rng.gen::<i64>(),
            planet,
            position,
            parts.size,
            angle,
            1.0,
        );
    }
    planet
}

/// Spawns whichever astronomical object the seed rolls at `position`.
///
/// The roll is the first draw from the seed, so the object class is as
/// stable across reloads as every other property.
pub fn create_astronomical_object(
    commands: &mut Commands,
    cfg: &SimConfig,
    seed: i64,
    position: Vec2,
) -> Entity {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let roll: u32 = rng.gen_range(0..100);
    if roll < 70 {
        create_planetary_system(commands, cfg, seed, position)
    } else if roll < 85 {
        create_binary_system(commands, cfg, seed, position)
    } else {
        create_rogue_planet(commands, cfg, seed, position)
    }
}

/// [`create_astronomical_object`] with the seed derived from the position.
pub fn create_astronomical_object_at(
    commands: &mut Commands,
    cfg: &SimConfig,
    galaxy_seed: i64,
    position: Vec2,
) -> Entity {
    let seed = seed_for(galaxy_seed, position.x as i64, position.y as i64);
    create_astronomical_object(commands, cfg, seed, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn star_parts_are_deterministic() {
        let cfg = SimConfig::default();
        let a = star_parts(&mut rng(99), &cfg);
        let b = star_parts(&mut rng(99), &cfg);
        assert_eq!(a.temperature, b.temperature);
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.rotation_speed, b.rotation_speed);
    }

    #[test]
    fn star_parts_respect_ranges() {
        let cfg = SimConfig::default();
        for seed in 0..50 {
            let p = star_parts(&mut rng(seed), &cfg);
            assert!(p.temperature >= cfg.min_star_temperature);
            assert!(p.temperature < cfg.max_star_temperature);
            assert!(p.radius >= cfg.min_star_radius && p.radius < cfg.max_star_radius);
        }
    }

    #[test]
    fn planet_size_is_power_of_two() {
        let cfg = SimConfig::default();
        for seed in 0..50 {
            let p = planet_parts(&mut rng(seed), &cfg);
            let bits = p.size as u32;
            assert_eq!(bits.count_ones(), 1, "size {} not a power of two", p.size);
            assert!(p.size <= cfg.max_planet_size);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let cfg = SimConfig::default();
        let a = star_parts(&mut rng(1), &cfg);
        let b = star_parts(&mut rng(2), &cfg);
        assert_ne!(a.temperature, b.temperature);
    }

    #[test]
    fn planetary_system_is_reproducible() {
        let cfg = SimConfig::default();

        fn snapshot(cfg: &SimConfig) -> Vec<(f32, f32)> {
            let mut world = World::new();
            let mut queue = bevy::ecs::world::CommandQueue::default();
            let mut commands = Commands::new(&mut queue, &world);
            create_planetary_system(&mut commands, cfg, 777, Vec2::new(100.0, -40.0));
            queue.apply(&mut world);
            let mut out: Vec<(f32, f32)> = world
                .query::<(&Orbit, &BodySeed)>()
                .iter(&world)
                .map(|(o, _)| (o.radial_distance, o.angle))
                .collect();
            out.sort_by(|a, b| a.partial_cmp(b).unwrap());
            out
        }

        assert_eq!(snapshot(&cfg), snapshot(&cfg));
    }

    #[test]
    fn planet_distances_accumulate_monotonically() {
        let cfg = SimConfig::default();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        create_planetary_system(&mut commands, &cfg, 31337, Vec2::ZERO);
        queue.apply(&mut world);

        let mut distances: Vec<f32> = world
            .query::<(&Planet, &Orbit)>()
            .iter(&world)
            .map(|(_, o)| o.radial_distance)
            .collect();
        assert!(!distances.is_empty());
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in distances.windows(2) {
            assert!(
                pair[1] - pair[0] >= cfg.min_planet_dist,
                "consecutive orbits closer than the minimum gap"
            );
        }
    }

    #[test]
    fn two_planet_system_has_one_star_two_planets_increasing_distances() {
        let cfg = SimConfig {
            min_planets: 2,
            max_planets: 2,
            ..SimConfig::default()
        };
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        create_planetary_system(&mut commands, &cfg, 2024, Vec2::ZERO);
        queue.apply(&mut world);

        assert_eq!(world.query::<&Star>().iter(&world).count(), 1);
        let mut distances: Vec<f32> = world
            .query::<(&Planet, &Orbit)>()
            .iter(&world)
            .map(|(_, o)| o.radial_distance)
            .collect();
        assert_eq!(distances.len(), 2, "min=max=2 must yield exactly 2 planets");
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!(distances[0] < distances[1]);
    }

    #[test]
    fn every_planet_carries_a_life_marker() {
        let cfg = SimConfig::default();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        for seed in 0..10 {
            create_planetary_system(&mut commands, &cfg, seed, Vec2::ZERO);
        }
        queue.apply(&mut world);

        let planets = world.query::<&Planet>().iter(&world).count();
        let capacities = world
            .query::<(&Planet, &SpawnCapacity)>()
            .iter(&world)
            .count();
        assert!(planets > 0);
        assert_eq!(capacities, planets, "every planet gets a spawn capacity");
    }

    #[test]
    fn moon_rings_stay_inside_the_next_planets_orbit() {
        let cfg = SimConfig::default();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        for seed in 0..20 {
            create_planetary_system(&mut commands, &cfg, seed + 1000, Vec2::ZERO);
        }
        queue.apply(&mut world);

        let moon_radii: std::collections::HashMap<Entity, f32> = world
            .query::<(&Moon, &Orbit)>()
            .iter(&world)
            .filter_map(|(_, o)| o.parent.map(|p| (p, o.radial_distance)))
            .collect();

        // Group planets by host star and check each against its successor.
        let mut by_star: std::collections::HashMap<Entity, Vec<(Entity, f32)>> =
            std::collections::HashMap::new();
        for (entity, orbit, _) in world
            .query::<(Entity, &Orbit, &Planet)>()
            .iter(&world)
        {
            if let Some(star) = orbit.parent {
                by_star.entry(star).or_default().push((entity, orbit.radial_distance));
            }
        }
        let mut moons_checked = 0;
        for planets in by_star.values_mut() {
            planets.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
            for pair in planets.windows(2) {
                if let Some(&moon_r) = moon_radii.get(&pair[0].0) {
                    assert!(
                        pair[0].1 + moon_r < pair[1].1,
                        "moon ring crosses the next orbit: {} + {} vs {}",
                        pair[0].1,
                        moon_r,
                        pair[1].1
                    );
                    moons_checked += 1;
                }
            }
        }
        assert!(moons_checked > 0, "expected at least one inner-planet moon");
    }

    #[test]
    fn moons_start_on_their_planets_radial_line() {
        let cfg = SimConfig::default();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        // Enough systems that at least one moon exists.
        for seed in 0..20 {
            create_planetary_system(&mut commands, &cfg, seed, Vec2::ZERO);
        }
        queue.apply(&mut world);

        let planet_angles: std::collections::HashMap<Entity, f32> = world
            .query_filtered::<(Entity, &Orbit), With<Planet>>()
            .iter(&world)
            .map(|(e, o)| (e, o.angle))
            .collect();
        let mut moons = 0;
        for (moon_orbit, _) in world.query::<(&Orbit, &Moon)>().iter(&world) {
            let parent = moon_orbit.parent.expect("moons orbit planets");
            let planet_angle = planet_angles[&parent];
            assert!(
                (moon_orbit.angle - planet_angle).abs() < 1e-5,
                "moon must start on its planet's radial line"
            );
            moons += 1;
        }
        assert!(moons > 0, "expected at least one moon across 20 systems");
    }

    #[test]
    fn binary_stars_are_anti_phase() {
        let cfg = SimConfig::default();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        create_binary_system(&mut commands, &cfg, 4242, Vec2::ZERO);
        queue.apply(&mut world);

        let orbits: Vec<Orbit> = world
            .query::<(&Star, &Orbit)>()
            .iter(&world)
            .map(|(_, o)| *o)
            .collect();
        assert_eq!(orbits.len(), 2);
        assert_eq!(orbits[0].radial_distance, orbits[1].radial_distance);
        assert_eq!(orbits[0].angular_speed, orbits[1].angular_speed);
        let phase = (orbits[0].angle - orbits[1].angle).abs();
        assert!((phase - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn roots_carry_their_barycenter_class() {
        let cfg = SimConfig::default();
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        create_binary_system(&mut commands, &cfg, 1, Vec2::ZERO);
        create_rogue_planet(&mut commands, &cfg, 2, Vec2::new(9_000.0, 0.0));
        create_planetary_system(&mut commands, &cfg, 3, Vec2::new(-9_000.0, 0.0));
        queue.apply(&mut world);

        let classes: Vec<Barycenter> = world
            .query::<&Barycenter>()
            .iter(&world)
            .copied()
            .collect();
        assert!(classes.contains(&Barycenter::MultiStellar));
        assert!(classes.contains(&Barycenter::RoguePlanet));
        assert!(classes.contains(&Barycenter::UniStellar));
    }

    #[test]
    fn object_class_is_seed_stable() {
        let cfg = SimConfig::default();

        fn class_of(cfg: &SimConfig, seed: i64) -> (usize, usize, usize) {
            let mut world = World::new();
            let mut queue = bevy::ecs::world::CommandQueue::default();
            let mut commands = Commands::new(&mut queue, &world);
            create_astronomical_object(&mut commands, cfg, seed, Vec2::ZERO);
            queue.apply(&mut world);
            let stars = world.query::<&Star>().iter(&world).count();
            let planets = world.query::<&Planet>().iter(&world).count();
            let moons = world.query::<&Moon>().iter(&world).count();
            (stars, planets, moons)
        }

        for seed in [1_i64, 99, -5, 123456789] {
            assert_eq!(class_of(&cfg, seed), class_of(&cfg, seed));
        }
    }
}
