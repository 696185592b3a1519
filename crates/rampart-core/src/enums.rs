//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase. Commands are drained in every phase; the
/// simulation systems only run while `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing normally.
    #[default]
    Active,
    /// Simulation frozen; commands (placement, upgrades) still apply.
    Paused,
    /// Player health reached zero. Only `RestartGame` leaves this phase.
    GameOver,
}

/// Tower variant. One entity type with a variant tag; per-variant
/// parameters come from the `TowerSpec` table in `constants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Single-target, slow firing, high damage growth.
    Normal,
    /// Area-of-effect damage around the impact point.
    Splash,
    /// Long range, weak damage, slows the target on shot-commit.
    Slow,
}

impl TowerKind {
    /// All variants in menu order.
    pub const ALL: [TowerKind; 3] = [TowerKind::Normal, TowerKind::Splash, TowerKind::Slow];
}

/// Silhouette drawn by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerShape {
    Square,
    Circle,
    Triangle,
}
