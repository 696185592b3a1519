//! Entity spawn factories for populating the simulation world.
//!
//! Creates enemies, towers, and projectiles with appropriate
//! component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::TowerKind;
use rampart_core::types::Position;
use rampart_map::Path;

/// Spawn a single enemy at the path start with randomized speed, health,
/// and tint. Deterministic given the seeded RNG.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, path: &Path, seq: SpawnOrder) -> Entity {
    let speed = rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX);
    let hp = rng.gen_range(ENEMY_HEALTH_MIN..=ENEMY_HEALTH_MAX);
    let color = ENEMY_PALETTE[rng.gen_range(0..ENEMY_PALETTE.len())];

    world.spawn((
        Enemy,
        path.start(),
        PathFollower::default(),
        Health { hp },
        Mobility {
            base_speed: speed,
            speed,
            slow_remaining: 0,
        },
        Hull {
            radius: ENEMY_RADIUS,
        },
        Tint { color },
        seq,
    ))
}

/// Spawn a tower of the given variant with base stats from the stat table.
pub fn spawn_tower(world: &mut World, kind: TowerKind, position: Position, seq: SpawnOrder) -> Entity {
    let spec = tower_spec(kind);
    world.spawn((
        Tower {
            kind,
            range: spec.range,
            fire_rate: spec.fire_rate,
            damage: spec.damage,
            cooldown: 0,
            level: 1,
            upgrade_cost: spec.upgrade_cost,
            upgrade_flash: 0,
        },
        position,
        seq,
    ))
}

/// Spawn a projectile bound to `target`, inheriting the firing tower's
/// damage, range, and variant parameters.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    target: Entity,
    kind: TowerKind,
    damage: i32,
    origin_range: f64,
    seq: SpawnOrder,
) -> Entity {
    let spec = tower_spec(kind);
    world.spawn((
        Projectile {
            target,
            damage,
            speed: PROJECTILE_SPEED,
            origin,
            origin_range,
            splash_radius: spec.splash_radius,
            color: spec.color,
        },
        origin,
        seq,
    ))
}
