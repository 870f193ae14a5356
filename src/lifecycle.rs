//! Entity health and deferred removal.
//!
//! Nothing in the simulation despawns an entity directly.  Systems tag
//! entities with [`MarkedForRemoval`] and a single sweep at the end of the
//! frame despawns everything tagged, after the shatter pipeline has had its
//! chance to react.  This keeps ordering races out of the contact and orbit
//! systems.

use bevy::prelude::*;

/// Hit points.  `current` never exceeds `max`; reaching zero marks the
/// entity for removal (and, for asteroids, triggers a shatter first).
#[derive(Component, Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Health { current: max, max }
    }

    /// Subtract `amount`, clamping at zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Tag component: this entity is dead and will be despawned by
/// [`removal_sweep_system`] at the end of the current frame.
///
/// Tagging is idempotent; inserting it twice is harmless.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MarkedForRemoval;

/// Despawns every entity tagged [`MarkedForRemoval`].
///
/// Runs in the `Last` schedule, ordered after the shatter system so that a
/// dead asteroid's fragments are spawned before the parent disappears.
pub fn removal_sweep_system(mut commands: Commands, doomed: Query<Entity, With<MarkedForRemoval>>) {
    for entity in doomed.iter() {
        commands.entity(entity).despawn();
    }
}

/// Marks any entity whose health reached zero.
///
/// Asteroid death routing (shatter vs disappear) happens downstream in the
/// shatter system; this system only translates "dead" into the removal tag.
pub fn death_system(
    mut commands: Commands,
    dead: Query<(Entity, &Health), (Changed<Health>, Without<MarkedForRemoval>)>,
) {
    for (entity, health) in dead.iter() {
        if health.is_dead() {
            commands.entity(entity).insert(MarkedForRemoval);
        }
    }
}
