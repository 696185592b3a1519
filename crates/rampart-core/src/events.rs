//! Events emitted by the simulation for audio and UI feedback.
//!
//! Each snapshot carries the events produced during that tick.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// Feedback events for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave of enemies entered the path.
    WaveSpawned { wave_number: u32, enemy_count: u32 },
    /// An enemy was destroyed; the reward was credited.
    EnemyKilled { reward: u32 },
    /// An enemy reached the path end; player health was deducted.
    EnemyLeaked { health_remaining: i32 },
    /// A drag-placement committed successfully.
    TowerPlaced { kind: TowerKind },
    /// The selected tower was upgraded.
    TowerUpgraded { kind: TowerKind, level: u32 },
    /// All waves of the level were cleared; towers reset, bonus credited.
    LevelCompleted { level_index: usize, bonus: u32 },
    /// Player health reached zero. Emitted exactly once per run.
    GameOver { wave_number: u32 },
}
