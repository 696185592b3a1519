//! Wave spawning system.
//!
//! The engine gates this on "wave requested and no live enemies"; the
//! system itself is a pure batch factory: `2 × wave_number` enemies with
//! randomized speed, health, and tint, all entering at the path start.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::SpawnOrder;
use rampart_core::constants::WAVE_SIZE_FACTOR;
use rampart_core::events::GameEvent;
use rampart_map::Path;

use crate::economy::EconomyState;
use crate::world_setup;

/// Spawn the current wave and advance the wave counter.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    economy: &mut EconomyState,
    path: &Path,
    next_spawn_seq: &mut u64,
    events: &mut Vec<GameEvent>,
) {
    let wave_number = economy.wave_number;
    let enemy_count = wave_number * WAVE_SIZE_FACTOR;

    for _ in 0..enemy_count {
        let seq = SpawnOrder(*next_spawn_seq);
        *next_spawn_seq += 1;
        let _ = world_setup::spawn_enemy(world, rng, path, seq);
    }

    events.push(GameEvent::WaveSpawned {
        wave_number,
        enemy_count,
    });
    economy.wave_number += 1;
}
