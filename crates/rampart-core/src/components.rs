//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::{Position, Rgb};

/// Marks an entity as a path-following enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Progress along the level path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathFollower {
    /// Index of the waypoint most recently reached.
    /// Always in `[0, path.len() - 1]`.
    pub waypoint: usize,
}

/// Hit points. An entity is alive iff `hp > 0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

/// Movement speed with a transient slow effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Unmodified speed (world units per tick).
    pub base_speed: f64,
    /// Effective speed after slow effects.
    pub speed: f64,
    /// Ticks until the slow expires; 0 means no slow active.
    pub slow_remaining: u32,
}

/// Collision radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub radius: f64,
}

/// Cosmetic tint for the rendering collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tint {
    pub color: Rgb,
}

/// Monotonic spawn sequence number. Gives targeting scans and snapshot
/// lists a stable insertion order independent of hecs iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// A placed tower. One component for all variants; the `kind` tag selects
/// the on-shot effect and the static parameters in the `TowerSpec` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    pub range: f64,
    /// Ticks between shots.
    pub fire_rate: u32,
    pub damage: i32,
    /// Ticks accumulated since the last shot, saturating at `fire_rate`.
    pub cooldown: u32,
    /// Upgrade level, starting at 1.
    pub level: u32,
    /// Cost of the next upgrade. Strictly increases per upgrade.
    pub upgrade_cost: u32,
    /// Cosmetic flash countdown set on upgrade. Never gates firing.
    pub upgrade_flash: u32,
}

/// A projectile in flight, bound to one target enemy.
///
/// The target is a raw `hecs::Entity` handle, never dereferenced without
/// a `world.get` check, since the enemy may die or despawn while the
/// projectile travels. No serde derive: entity handles are process-local
/// and never cross the snapshot boundary.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub target: hecs::Entity,
    pub damage: i32,
    /// Travel speed (world units per tick).
    pub speed: f64,
    /// Spawn point; used for the range-exceeded expiry check.
    pub origin: Position,
    /// Max travel distance from `origin` before the shot expires.
    pub origin_range: f64,
    /// Splash radius around the impact point, if this is a splash shot.
    pub splash_radius: Option<f64>,
    /// Tint inherited from the firing tower.
    pub color: Rgb,
}
