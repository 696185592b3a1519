//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and drained at the next tick boundary. Invalid
//! commands (unaffordable placement, upgrade with nothing selected, a
//! commit at an illegal spot) are silently dropped, never errors.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Tower placement (drag lifecycle) ---
    /// Pick up a tower of the given kind for drag-placement.
    /// Ignored if a drag is already in flight or the kind is unaffordable.
    PlaceTowerBegin { kind: TowerKind, position: Position },
    /// Move the in-flight drag candidate.
    PlaceTowerMove { position: Position },
    /// Commit the drag candidate. Places the tower only if the position
    /// is legal under the level's placement policy and the cost is covered.
    PlaceTowerCommit,

    // --- Tower management ---
    /// Select the first tower within click range of the position.
    /// A miss leaves the current selection unchanged.
    SelectTower { position: Position },
    /// Upgrade the selected tower. No-op if nothing is selected or the
    /// upgrade is unaffordable.
    UpgradeSelected,

    // --- Simulation control ---
    /// Toggle between Active and Paused.
    TogglePause,
    /// Reset to the starting state. Only honored during game over.
    RestartGame,
    /// Request the next wave. The wave spawns once no live enemies remain.
    StartNextWave,
}
