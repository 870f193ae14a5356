//! Kinematic orbital motion.
//!
//! Orbiting bodies are positioned analytically from their [`Orbit`] state;
//! the physics engine never integrates them.  Position resolution walks
//! parent-first so a moon reads its planet's position from the same frame,
//! not the previous one.

use crate::celestial::Orbit;
use crate::lifecycle::MarkedForRemoval;
use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;

/// World position of a body on a circular orbit around `parent_pos`.
pub fn orbit_position(parent_pos: Vec2, radial_distance: f32, angle: f32) -> Vec2 {
    parent_pos + Vec2::from_angle(angle) * radial_distance
}

/// Advances every orbit and writes the resulting transforms.
///
/// Two phases: first every body's phase angle and self-rotation advance by
/// `dt`, then positions resolve outward from the anchors (bodies with no
/// parent).  A body whose parent has despawned keeps its last position; the
/// cascade removal system will collect it.
pub fn orbit_update_system(
    time: Res<Time>,
    mut bodies: Query<(Entity, &mut Orbit, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (_, mut orbit, mut transform) in bodies.iter_mut() {
        orbit.angle = (orbit.angle + orbit.angular_speed * dt).rem_euclid(std::f32::consts::TAU);
        transform.rotate_z(orbit.rotation_speed * dt);
    }

    // Snapshot, then resolve parent-first.  Anchors keep their translation.
    let mut resolved: HashMap<Entity, Vec2> = HashMap::default();
    let mut pending: Vec<(Entity, Entity, f32, f32)> = Vec::new();
    for (entity, orbit, transform) in bodies.iter() {
        match orbit.parent {
            None => {
                resolved.insert(entity, transform.translation.truncate());
            }
            Some(parent) => {
                pending.push((entity, parent, orbit.radial_distance, orbit.angle));
            }
        }
    }

    // Each pass resolves at least one depth level; dangling parents stall
    // and their orbiters simply keep last frame's position.
    loop {
        let before = pending.len();
        pending.retain(|&(entity, parent, radial, angle)| {
            if let Some(&parent_pos) = resolved.get(&parent) {
                resolved.insert(entity, orbit_position(parent_pos, radial, angle));
                false
            } else {
                true
            }
        });
        if pending.len() == before {
            break;
        }
    }

    for (entity, orbit, mut transform) in bodies.iter_mut() {
        if orbit.parent.is_some() {
            if let Some(&pos) = resolved.get(&entity) {
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;
            }
        }
    }
}

/// Marks every body whose orbital parent is gone or already marked.
///
/// Runs to a fixpoint within one invocation, so removing a star takes its
/// planets and their moons down in the same frame.  Bodies orbiting a
/// different, healthy parent are never touched.
pub fn cascade_removal_system(
    mut commands: Commands,
    orbits: Query<(Entity, &Orbit)>,
    marked: Query<Entity, With<MarkedForRemoval>>,
    alive: Query<Entity>,
) {
    let mut dead: HashSet<Entity> = marked.iter().collect();
    loop {
        let mut progress = false;
        for (entity, orbit) in orbits.iter() {
            if dead.contains(&entity) {
                continue;
            }
            if let Some(parent) = orbit.parent {
                if dead.contains(&parent) || alive.get(parent).is_err() {
                    dead.insert(entity);
                    commands.entity(entity).insert(MarkedForRemoval);
                    progress = true;
                }
            }
        }
        if !progress {
            break;
        }
    }
}
