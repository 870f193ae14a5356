//! Vehicles, shields, AI state, and projectiles.

use crate::config::SimConfig;
use crate::lifecycle::{Health, MarkedForRemoval};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Marks an entity as a pilotable or AI-driven craft.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Vehicle;

/// The entity the streaming system measures distances from.  Exactly one is
/// expected; with none present, streaming simply pauses.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ControlFocus;

/// The entity the camera follows.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct CamTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldState {
    Off,
    Charging,
    On,
}

/// Energy shield.  Only a fully raised shield absorbs hits; a charging one
/// offers no protection.
#[derive(Component, Debug, Clone, Copy)]
pub struct Shield {
    pub state: ShieldState,
}

impl Shield {
    pub fn blocks(&self) -> bool {
        self.state == ShieldState::On
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Wander,
    /// Attacking a specific target, usually whoever shot first.
    Attack(Entity),
}

/// Minimal AI brain.  Contact resolution flips it to `Attack` when the
/// craft takes a hit from a live attacker.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ai {
    pub state: AiState,
}

impl Default for Ai {
    fn default() -> Self {
        Ai {
            state: AiState::Idle,
        }
    }
}

/// A cannon round.  `source` lets the resolver skip self-hits.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub damage: f32,
    pub source: Entity,
}

/// Rigid attachment to a host entity (turrets, shield emitters, debris
/// stuck to a hull).  When the host dies the whole cluster goes with it.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttachedTo(pub Entity);

/// Despawn after a fixed lifetime, used for projectiles that never hit.
#[derive(Component, Debug)]
pub struct Expire {
    pub timer: Timer,
}

impl Expire {
    pub fn after_seconds(secs: f32) -> Self {
        Expire {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }
}

/// Marks expired entities for the end-of-frame sweep.
pub fn expire_system(
    mut commands: Commands,
    time: Res<Time>,
    mut expiring: Query<(Entity, &mut Expire)>,
) {
    for (entity, mut expire) in expiring.iter_mut() {
        if expire.timer.tick(time.delta()).just_finished() {
            commands.entity(entity).insert(MarkedForRemoval);
        }
    }
}

/// Takes attached clusters down with their host, to a fixpoint so chained
/// attachments resolve in one frame.
pub fn attached_cleanup_system(
    mut commands: Commands,
    attached: Query<(Entity, &AttachedTo)>,
    marked: Query<Entity, With<MarkedForRemoval>>,
    alive: Query<Entity>,
) {
    let mut dead: bevy::platform::collections::HashSet<Entity> = marked.iter().collect();
    loop {
        let mut progress = false;
        for (entity, attachment) in attached.iter() {
            if dead.contains(&entity) {
                continue;
            }
            if dead.contains(&attachment.0) || alive.get(attachment.0).is_err() {
                dead.insert(entity);
                commands.entity(entity).insert(MarkedForRemoval);
                progress = true;
            }
        }
        if !progress {
            break;
        }
    }
}

/// Spawns a basic ship.  When `focus` is set the ship becomes both the
/// streaming focus and the camera target.
pub fn spawn_basic_ship(
    commands: &mut Commands,
    cfg: &SimConfig,
    position: Vec2,
    focus: bool,
) -> Entity {
    let mut ship = commands.spawn((
        Vehicle,
        Health::new(cfg.ship_max_hp),
        Shield {
            state: ShieldState::Off,
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Dynamic,
        Collider::ball(cfg.ship_collider_radius),
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS | ActiveEvents::CONTACT_FORCE_EVENTS,
    ));
    if focus {
        ship.insert((ControlFocus, CamTarget));
    }
    ship.id()
}

/// Spawns an AI ship with a wandering brain.
pub fn spawn_ai_ship(commands: &mut Commands, cfg: &SimConfig, position: Vec2) -> Entity {
    let ship = spawn_basic_ship(commands, cfg, position, false);
    commands.entity(ship).insert(Ai {
        state: AiState::Wander,
    });
    ship
}

/// Fires a projectile from `source` along `direction`.
pub fn spawn_projectile(
    commands: &mut Commands,
    cfg: &SimConfig,
    source: Entity,
    position: Vec2,
    direction: Vec2,
) -> Entity {
    let direction = direction.normalize_or_zero();
    commands
        .spawn((
            Projectile {
                damage: cfg.projectile_damage,
                source,
            },
            Expire::after_seconds(cfg.projectile_lifetime_secs),
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Dynamic,
            Collider::ball(1.5),
            Velocity {
                linvel: direction * cfg.projectile_speed,
                angvel: 0.0,
            },
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}
