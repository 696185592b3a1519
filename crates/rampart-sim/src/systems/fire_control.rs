//! Tower fire control: cooldown gating, target acquisition, and shot
//! commitment.
//!
//! Targeting scans the enemy collection in spawn order and takes the
//! first enemy in range. The Slow variant applies its speed effect at
//! shot-commit time, before the projectile travels.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Mobility, SpawnOrder, Tower};
use rampart_core::constants::tower_spec;
use rampart_core::enums::TowerKind;
use rampart_core::types::Position;

use crate::world_setup;

/// A committed shot, applied after the tower scan completes.
struct Shot {
    origin: Position,
    target: Entity,
    kind: TowerKind,
    damage: i32,
    range: f64,
}

/// Range predicate: Euclidean distance within the tower's radius.
/// Pure, no side effects.
pub fn in_range(tower_pos: Position, range: f64, enemy_pos: Position) -> bool {
    tower_pos.distance_to(&enemy_pos) <= range
}

/// Tick every tower's cooldown and fire at most one projectile each.
pub fn run(world: &mut World, next_spawn_seq: &mut u64) {
    // Stable targeting order: enemies by spawn sequence, independent of
    // hecs archetype iteration.
    let mut enemies: Vec<(SpawnOrder, Entity, Position)> = world
        .query_mut::<(&Enemy, &SpawnOrder, &Position)>()
        .into_iter()
        .map(|(entity, (_enemy, seq, pos))| (*seq, entity, *pos))
        .collect();
    enemies.sort_by_key(|(seq, _, _)| *seq);

    let mut shots: Vec<Shot> = Vec::new();
    for (_entity, (tower, pos)) in world.query_mut::<(&mut Tower, &Position)>() {
        if tower.upgrade_flash > 0 {
            tower.upgrade_flash -= 1;
        }

        // Saturate at the period so the counter stays in [0, fire_rate];
        // the first in-range scan after that fires.
        tower.cooldown = (tower.cooldown + 1).min(tower.fire_rate);
        if tower.cooldown < tower.fire_rate {
            continue;
        }

        let target = enemies
            .iter()
            .find(|(_, _, enemy_pos)| in_range(*pos, tower.range, *enemy_pos));
        if let Some(&(_, target_entity, _)) = target {
            tower.cooldown = 0;
            shots.push(Shot {
                origin: *pos,
                target: target_entity,
                kind: tower.kind,
                damage: tower.damage,
                range: tower.range,
            });
        }
    }

    for shot in shots {
        // Slow lands at shot-commit, not projectile-impact. Repeated
        // shots stack multiplicatively and reset the timer.
        if let Some(slow) = tower_spec(shot.kind).slow {
            if let Ok(mut mobility) = world.get::<&mut Mobility>(shot.target) {
                mobility.speed *= slow.multiplier;
                mobility.slow_remaining = slow.duration_ticks;
            }
        }

        let seq = SpawnOrder(*next_spawn_seq);
        *next_spawn_seq += 1;
        let _ = world_setup::spawn_projectile(
            world,
            shot.origin,
            shot.target,
            shot.kind,
            shot.damage,
            shot.range,
            seq,
        );
    }
}
