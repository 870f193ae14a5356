//! Simulation plugin and the subsystem registry behind it.
//!
//! Subsystems are registered through an explicit enum rather than discovered
//! dynamically, so the full system list is visible in one place and a
//! headless test can wire up exactly the slice it needs.
//!
//! Ordering matters at the back of the frame: contact resolution and death
//! detection run in `Update` (reading the previous physics step's events),
//! cascades resolve in `PostUpdate`, and the shatter-then-sweep pair runs in
//! `Last` so fragments exist before their parent despawns.

use crate::{asteroid, contact, graphics, lifecycle, orbit, shatter, ship, streaming, surface};
use bevy::prelude::*;

/// Set containing the damage-dealing contact systems.  Death detection is
/// ordered after it whether or not the combat subsystem is registered.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DamageSet;

/// One registrable slice of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Galaxy catalogue streaming around the control focus.
    Streaming,
    /// Kinematic orbit resolution.
    Orbits,
    /// Belt spawning and ring steering.
    Belts,
    /// Asynchronous planet surface generation.
    Surfaces,
    /// Contact resolution and projectile expiry.
    Combat,
    /// Camera follow.
    Graphics,
}

impl Subsystem {
    pub const ALL: [Subsystem; 6] = [
        Subsystem::Streaming,
        Subsystem::Orbits,
        Subsystem::Belts,
        Subsystem::Surfaces,
        Subsystem::Combat,
        Subsystem::Graphics,
    ];

    /// Adds this subsystem's systems to the app's schedules.
    fn register(self, app: &mut App) {
        match self {
            Subsystem::Streaming => {
                app.add_systems(Update, streaming::space_loading_system);
            }
            Subsystem::Orbits => {
                app.add_systems(Update, orbit::orbit_update_system);
            }
            Subsystem::Belts => {
                app.add_systems(
                    Update,
                    (asteroid::belt_spawner_system, asteroid::orbit_lock_system),
                );
            }
            Subsystem::Surfaces => {
                app.add_systems(
                    Update,
                    (surface::surface_request_system, surface::surface_poll_system),
                );
            }
            Subsystem::Combat => {
                app.add_systems(
                    Update,
                    (
                        (contact::contact_begin_system, contact::contact_force_system)
                            .chain()
                            .in_set(DamageSet),
                        ship::expire_system,
                    ),
                );
            }
            Subsystem::Graphics => {
                app.add_systems(Update, graphics::camera_follow_system);
            }
        }
    }
}

/// Wires the requested subsystems plus the always-on lifecycle backbone:
/// death detection, removal cascades, shatter, and the end-of-frame sweep.
pub struct SimulationPlugin {
    pub subsystems: Vec<Subsystem>,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        SimulationPlugin {
            subsystems: Subsystem::ALL.to_vec(),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        for subsystem in &self.subsystems {
            subsystem.register(app);
        }
        app.add_systems(Update, lifecycle::death_system.after(DamageSet))
            .add_systems(
                PostUpdate,
                (orbit::cascade_removal_system, ship::attached_cleanup_system),
            )
            .add_systems(
                Last,
                (shatter::shatter_system, lifecycle::removal_sweep_system).chain(),
            );
    }
}
