//! Asteroid fracture.
//!
//! A dying or violently struck asteroid breaks into triangular fragments:
//! its ring plus an interior point at the centroid are Delaunay-triangulated
//! and each usable triangle becomes a child asteroid inheriting the parent's
//! motion.  Below the minimum shatter area the rock just disappears, which
//! is what terminates the fracture recursion.
//!
//! Runs in the `Last` schedule, before the removal sweep, so fragments are
//! spawned in the same frame the parent is collected.

use crate::asteroid::{spawn_asteroid_with_vertices, Asteroid};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::geometry::{
    has_duplicate_vertex, polygon_centroid, triangulate_delaunay, triangulate_ear_clip,
};
use crate::lifecycle::{Health, MarkedForRemoval};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fragment polygons for an asteroid ring, in the parent's local space.
///
/// The triangulation runs over the ring plus its centroid as an interior
/// point; triangles touching a duplicated vertex are discarded.  When the
/// Delaunay pass produces nothing usable, plain ear clipping of the ring is
/// the fallback.  An empty result means the parent should vanish childless.
pub fn fragment_polygons(vertices: &[Vec2]) -> Vec<[Vec2; 3]> {
    let centroid = polygon_centroid(vertices);
    let mut points: Vec<Vec2> = vertices.to_vec();
    points.push(centroid);

    let mut fragments = collect_triangles(&points, &triangulate_delaunay(&points));
    if fragments.is_empty() {
        fragments = collect_triangles(vertices, &triangulate_ear_clip(vertices));
    }
    fragments
}

fn collect_triangles(points: &[Vec2], triangles: &[[usize; 3]]) -> Vec<[Vec2; 3]> {
    let mut out = Vec::with_capacity(triangles.len());
    let mut discarded = 0;
    for tri in triangles {
        let corners = [points[tri[0]], points[tri[1]], points[tri[2]]];
        if has_duplicate_vertex(&corners) {
            discarded += 1;
            continue;
        }
        out.push(corners);
    }
    if discarded > 0 {
        warn!("discarded {discarded} degenerate shatter triangles");
    }
    out
}

/// Breaks every flagged or dead asteroid into fragments and marks it for
/// the end-of-frame sweep.
pub fn shatter_system(
    mut commands: Commands,
    cfg: Res<SimConfig>,
    doomed: Query<(
        Entity,
        &Asteroid,
        &Health,
        &Transform,
        &Velocity,
        Option<&ReadMassProperties>,
    )>,
) {
    for (entity, asteroid, health, transform, velocity, mass_props) in doomed.iter() {
        if !asteroid.do_shatter && !health.is_dead() {
            continue;
        }
        commands.entity(entity).insert(MarkedForRemoval);

        // Terminal size: too small to fracture, the rock just vanishes.
        if asteroid.area < cfg.min_shatter_area {
            continue;
        }

        // The backend's centre of mass should agree with the stored
        // area-weighted centroid; drift here means the collider and the
        // polygon diverged.
        if let Some(props) = mass_props {
            let backend_com = props.local_center_of_mass;
            if backend_com.distance(asteroid.center_of_mass) > 1.0 {
                warn!(
                    "asteroid centroid disagreement: polygon {}, backend {backend_com}",
                    asteroid.center_of_mass
                );
            }
        }

        let fragments = fragment_polygons(&asteroid.vertices);
        if fragments.is_empty() {
            warn!(
                "{}",
                SimError::DegenerateShatter {
                    ring_len: asteroid.vertices.len(),
                }
            );
            continue;
        }

        let parent_pos = transform.translation.truncate();
        let rotation = transform.rotation;
        // Fragments are debris, not catalogued content: fresh random seed.
        let mut rng = StdRng::seed_from_u64(rand::random());
        for corners in fragments {
            let tri_centroid = (corners[0] + corners[1] + corners[2]) / 3.0;
            // Bake the parent's rotation into the fragment vertices so the
            // fragment spawns with an identity transform.
            let local: Vec<Vec2> = corners
                .iter()
                .map(|c| (rotation * (*c - tri_centroid).extend(0.0)).truncate())
                .collect();
            let offset = (rotation * tri_centroid.extend(0.0)).truncate();
            let position = parent_pos + offset;
            // Rigid-body velocity at the fragment's location.
            let linvel = velocity.linvel + velocity.angvel * offset.perp();
            spawn_asteroid_with_vertices(
                &mut commands,
                &cfg,
                &mut rng,
                local,
                position,
                Velocity {
                    linvel,
                    angvel: velocity.angvel,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polygon_area;
    use crate::lifecycle::removal_sweep_system;

    fn square(half: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
        ]
    }

    fn shatter_app() -> App {
        let mut app = App::new();
        app.insert_resource(SimConfig::default());
        app.add_systems(Update, (shatter_system, removal_sweep_system).chain());
        app
    }

    fn spawn_doomed(app: &mut App, vertices: Vec<Vec2>) -> Entity {
        let mut asteroid = Asteroid::new(vertices, &mut StdRng::seed_from_u64(1));
        asteroid.do_shatter = true;
        let health = Health::new(asteroid.area);
        app.world_mut()
            .spawn((asteroid, health, Transform::default(), Velocity::zero()))
            .id()
    }

    #[test]
    fn fragment_polygons_fan_around_centroid() {
        let fragments = fragment_polygons(&square(10.0));
        assert_eq!(fragments.len(), 4, "square + centroid should fan into 4");
        let total: f32 = fragments.iter().map(|f| polygon_area(f)).sum();
        assert!((total - 400.0).abs() < 1e-2, "fragment area must sum to parent");
    }

    #[test]
    fn shatter_replaces_parent_with_fragments() {
        let mut app = shatter_app();
        let parent = spawn_doomed(&mut app, square(10.0));
        app.update();

        assert!(app.world().get_entity(parent).is_err());
        let world = app.world_mut();
        let count = world.query::<&Asteroid>().iter(world).count();
        assert_eq!(count, 4);
    }

    #[test]
    fn fragments_inherit_parent_linear_velocity() {
        let mut app = shatter_app();
        let mut asteroid = Asteroid::new(square(10.0), &mut StdRng::seed_from_u64(2));
        asteroid.do_shatter = true;
        let health = Health::new(asteroid.area);
        app.world_mut().spawn((
            asteroid,
            health,
            Transform::default(),
            Velocity {
                linvel: Vec2::new(30.0, -5.0),
                angvel: 0.0,
            },
        ));
        app.update();

        let world = app.world_mut();
        for velocity in world
            .query_filtered::<&Velocity, With<Asteroid>>()
            .iter(world)
        {
            assert!((velocity.linvel - Vec2::new(30.0, -5.0)).length() < 1e-3);
        }
    }

    #[test]
    fn tiny_asteroid_vanishes_without_children() {
        let mut app = shatter_app();
        // 4x4 square: area 16, well under the minimum shatter area.
        let parent = spawn_doomed(&mut app, square(2.0));
        app.update();

        assert!(app.world().get_entity(parent).is_err());
        let world = app.world_mut();
        assert_eq!(world.query::<&Asteroid>().iter(world).count(), 0);
    }

    #[test]
    fn healthy_unflagged_asteroid_is_untouched() {
        let mut app = shatter_app();
        let asteroid = Asteroid::new(square(10.0), &mut StdRng::seed_from_u64(3));
        let health = Health::new(asteroid.area);
        let rock = app
            .world_mut()
            .spawn((asteroid, health, Transform::default(), Velocity::zero()))
            .id();
        app.update();
        assert!(app.world().get_entity(rock).is_ok());
    }

    #[test]
    fn dead_asteroid_shatters_without_the_flag() {
        let mut app = shatter_app();
        let asteroid = Asteroid::new(square(10.0), &mut StdRng::seed_from_u64(4));
        let health = Health {
            current: 0.0,
            max: asteroid.area,
        };
        let rock = app
            .world_mut()
            .spawn((asteroid, health, Transform::default(), Velocity::zero()))
            .id();
        app.update();
        assert!(app.world().get_entity(rock).is_err());
        let world = app.world_mut();
        assert!(world.query::<&Asteroid>().iter(world).count() > 0);
    }
}
