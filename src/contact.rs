//! Contact resolution.
//!
//! Two entry points: discrete collision-start events drive projectile hits,
//! aggro, and orbit-lock release; contact force events drive impulse damage
//! for asteroids and vehicles.  Nothing is despawned here, only health is
//! spent and flags are raised for the end-of-frame shatter and sweep.

use crate::asteroid::{Asteroid, OrbitLock};
use crate::config::SimConfig;
use crate::lifecycle::{Health, MarkedForRemoval};
use crate::ship::{Ai, AiState, CamTarget, ControlFocus, Projectile, Shield, Vehicle};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Handles collision-start events.
///
/// Projectiles damage whatever they hit and are spent on impact, with two
/// exceptions: a round never hurts the craft that fired it, and a raised
/// shield eats the round without damage.  An AI craft that takes a hit
/// turns on its attacker, and the camera chases the action: it moves to an
/// attacked AI craft, or to the shooter when the control focus takes the
/// hit.  Any contact involving a belt-locked asteroid breaks the lock.
#[allow(clippy::too_many_arguments)]
pub fn contact_begin_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    projectiles: Query<&Projectile>,
    locked: Query<(), With<OrbitLock>>,
    shields: Query<&Shield>,
    mut healths: Query<&mut Health>,
    mut brains: Query<&mut Ai>,
    focused: Query<(), With<ControlFocus>>,
    cam_targets: Query<Entity, With<CamTarget>>,
    alive: Query<Entity>,
) {
    let mut spent: HashSet<Entity> = HashSet::default();

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        // First touch frees a belt-locked asteroid.
        for entity in [e1, e2] {
            if locked.contains(entity) {
                commands.entity(entity).remove::<OrbitLock>();
            }
        }

        for (projectile_entity, target) in [(e1, e2), (e2, e1)] {
            let Ok(projectile) = projectiles.get(projectile_entity) else {
                continue;
            };
            if spent.contains(&projectile_entity) {
                continue;
            }
            // A round passes harmlessly through its own shooter.
            if target == projectile.source {
                continue;
            }

            spent.insert(projectile_entity);
            commands.entity(projectile_entity).insert(MarkedForRemoval);

            // Camera retarget: follow a hit AI craft, or the attacker when
            // the focused craft is the one taking fire.
            let new_cam_target = if brains.contains(target) {
                Some(target)
            } else if focused.contains(target) && alive.get(projectile.source).is_ok() {
                Some(projectile.source)
            } else {
                None
            };
            if let Some(new_target) = new_cam_target {
                for current in cam_targets.iter() {
                    commands.entity(current).remove::<CamTarget>();
                }
                commands.entity(new_target).insert(CamTarget);
            }

            if shields.get(target).is_ok_and(|shield| shield.blocks()) {
                continue;
            }
            if let Ok(mut health) = healths.get_mut(target) {
                health.damage(projectile.damage);
            }
            if let Ok(mut ai) = brains.get_mut(target) {
                if alive.get(projectile.source).is_ok() {
                    ai.state = AiState::Attack(projectile.source);
                }
            }
        }
    }
}

/// Applies impulse damage from contact force events.
///
/// Asteroids only care about violent impacts: above the shatter threshold
/// the hit spends health in proportion to both the impulse and the rock's
/// area, and a rock broken by the hit is flagged for shatter.  Vehicles
/// bruise at a much lower threshold unless their shield is up.
pub fn contact_force_system(
    mut force_events: MessageReader<ContactForceEvent>,
    cfg: Res<SimConfig>,
    mut asteroids: Query<(&mut Asteroid, &mut Health), Without<Vehicle>>,
    mut vehicles: Query<(&mut Health, Option<&Shield>), With<Vehicle>>,
) {
    for event in force_events.read() {
        let magnitude = event.max_force_magnitude;
        for entity in [event.collider1, event.collider2] {
            if let Ok((mut asteroid, mut health)) = asteroids.get_mut(entity) {
                if magnitude > cfg.asteroid_shatter_threshold {
                    health.damage(magnitude * cfg.impact_damage_multiplier * asteroid.area);
                    if health.is_dead() {
                        asteroid.do_shatter = true;
                    }
                }
            } else if let Ok((mut health, shield)) = vehicles.get_mut(entity) {
                if magnitude > cfg.vehicle_damage_threshold
                    && !shield.is_some_and(|s| s.blocks())
                {
                    health.damage(magnitude * cfg.vehicle_damage_multiplier);
                }
            }
        }
    }
}
