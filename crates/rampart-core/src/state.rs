//! Game state snapshot: the complete visible state sent to the
//! rendering collaborator each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, TowerKind, TowerShape};
use crate::events::GameEvent;
use crate::types::{Position, Rgb, SimTime};

/// Complete read-only game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,

    // --- HUD scalars ---
    pub currency: u32,
    pub health: i32,
    pub wave_number: u32,
    pub level_index: usize,
    /// A wave-start command was issued and the wave has not spawned yet.
    pub wave_pending: bool,

    // --- Live entities, in spawn order ---
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,

    /// In-flight drag-placement candidate, if any.
    pub drag: Option<DragView>,
    /// HUD detail for the selected tower, if any.
    pub selected: Option<SelectedTowerView>,

    /// Events produced during this tick.
    pub events: Vec<GameEvent>,
}

/// A live enemy on the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub radius: f64,
    pub color: Rgb,
    pub health: i32,
    /// Whether a slow effect is currently active.
    pub slowed: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Position,
    pub kind: TowerKind,
    pub shape: TowerShape,
    pub color: Rgb,
    pub range: f64,
    pub level: u32,
    pub upgrade_cost: u32,
    pub selected: bool,
    /// Remaining ticks of the cosmetic upgrade flash.
    pub upgrade_flash: u32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub radius: f64,
    pub color: Rgb,
}

/// The tower being dragged into place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragView {
    pub kind: TowerKind,
    pub position: Position,
    /// Whether committing here would be legal. Drawn as the red ring
    /// when false.
    pub valid: bool,
}

/// HUD line for the selected tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedTowerView {
    pub kind: TowerKind,
    pub level: u32,
    pub upgrade_cost: u32,
}
