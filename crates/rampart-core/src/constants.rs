//! Simulation constants and tuning parameters.

use crate::enums::{TowerKind, TowerShape};
use crate::types::Rgb;

/// Simulation tick rate (Hz). One logical tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Starting state ---

/// Currency balance at game start.
pub const STARTING_CURRENCY: u32 = 100;

/// Player health at game start.
pub const STARTING_HEALTH: i32 = 10;

// --- Economy ---

/// Currency awarded per enemy kill.
pub const KILL_REWARD: u32 = 10;

/// Player health lost per enemy reaching the path end.
pub const LEAK_DAMAGE: i32 = 1;

/// Currency bonus for completing a level.
pub const LEVEL_CLEAR_BONUS: u32 = 100;

/// Waves per level before advancing to the next one.
pub const WAVES_PER_LEVEL: u32 = 5;

// --- Waves ---

/// Enemies spawned per wave = wave number times this factor.
pub const WAVE_SIZE_FACTOR: u32 = 2;

/// Enemy speed range (world units per tick), sampled per enemy.
pub const ENEMY_SPEED_MIN: f64 = 0.3;
pub const ENEMY_SPEED_MAX: f64 = 1.0;

/// Enemy health range, sampled per enemy.
pub const ENEMY_HEALTH_MIN: i32 = 40;
pub const ENEMY_HEALTH_MAX: i32 = 80;

/// Collision radius of an enemy.
pub const ENEMY_RADIUS: f64 = 15.0;

/// Cosmetic tints sampled for spawned enemies.
pub const ENEMY_PALETTE: [Rgb; 3] = [Rgb(255, 0, 0), Rgb(0, 255, 0), Rgb(0, 128, 255)];

// --- Projectiles ---

/// Projectile travel speed (world units per tick).
pub const PROJECTILE_SPEED: f64 = 6.0;

/// Collision radius of a projectile.
pub const PROJECTILE_RADIUS: f64 = 3.0;

// --- Interaction ---

/// Click radius for selecting a placed tower.
pub const SELECT_RADIUS: f64 = 20.0;

/// Keep-out distance from path segments under the path-buffer
/// placement policy.
pub const PATH_BUFFER: f64 = 20.0;

/// Cosmetic flash timer set on a successful upgrade (ticks).
pub const UPGRADE_FLASH_TICKS: u32 = 60;

// --- Tower variant table ---

/// Slow-effect parameters for the Slow variant.
#[derive(Debug, Clone, Copy)]
pub struct SlowSpec {
    /// Ticks the slow persists after the last application.
    pub duration_ticks: u32,
    /// Multiplier applied to the target's effective speed per shot.
    pub multiplier: f64,
}

/// Static per-variant parameters. Base stats are copied onto the tower
/// at placement; upgrades mutate the copy, never the table.
#[derive(Debug, Clone, Copy)]
pub struct TowerSpec {
    pub kind: TowerKind,
    pub range: f64,
    /// Ticks between shots.
    pub fire_rate: u32,
    pub damage: i32,
    /// Placement cost.
    pub cost: u32,
    /// First upgrade cost; grows by `upgrade_cost_step` per upgrade.
    pub upgrade_cost: u32,
    pub upgrade_cost_step: u32,
    /// Stat deltas per upgrade level.
    pub range_per_level: f64,
    pub damage_per_level: i32,
    /// Splash radius (Splash variant only).
    pub splash_radius: Option<f64>,
    /// Slow effect (Slow variant only).
    pub slow: Option<SlowSpec>,
    pub shape: TowerShape,
    pub color: Rgb,
}

const TOWER_SPECS: [TowerSpec; 3] = [
    TowerSpec {
        kind: TowerKind::Normal,
        range: 100.0,
        fire_rate: 60,
        damage: 12,
        cost: 20,
        upgrade_cost: 15,
        upgrade_cost_step: 20,
        range_per_level: 35.0,
        damage_per_level: 18,
        splash_radius: None,
        slow: None,
        shape: TowerShape::Square,
        color: Rgb(0, 128, 255),
    },
    TowerSpec {
        kind: TowerKind::Splash,
        range: 95.0,
        fire_rate: 50,
        damage: 13,
        cost: 50,
        upgrade_cost: 30,
        upgrade_cost_step: 20,
        range_per_level: 9.0,
        damage_per_level: 7,
        splash_radius: Some(12.0),
        slow: None,
        shape: TowerShape::Circle,
        color: Rgb(255, 128, 0),
    },
    TowerSpec {
        kind: TowerKind::Slow,
        range: 150.0,
        fire_rate: 37,
        damage: 7,
        cost: 15,
        upgrade_cost: 25,
        upgrade_cost_step: 20,
        range_per_level: 18.0,
        damage_per_level: 5,
        splash_radius: None,
        slow: Some(SlowSpec {
            duration_ticks: 3600,
            multiplier: 0.65,
        }),
        shape: TowerShape::Triangle,
        color: Rgb(128, 0, 255),
    },
];

/// Look up the static parameters for a tower variant.
pub fn tower_spec(kind: TowerKind) -> &'static TowerSpec {
    match kind {
        TowerKind::Normal => &TOWER_SPECS[0],
        TowerKind::Splash => &TOWER_SPECS[1],
        TowerKind::Slow => &TOWER_SPECS[2],
    }
}
