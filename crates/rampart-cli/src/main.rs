//! Headless runner: drives the simulation engine at the fixed tick rate
//! and prints JSON snapshots to stdout.
//!
//! Plays a small scripted session against the built-in level rotation:
//! two towers go down, then waves are requested back-to-back until the
//! game ends or the time cap is hit. Useful for smoke-testing the sim
//! and for piping snapshots into other tools.

use std::time::{Duration, Instant};

use rampart_core::commands::PlayerCommand;
use rampart_core::constants::TICK_RATE;
use rampart_core::enums::{GamePhase, TowerKind};
use rampart_core::types::Position;
use rampart_map::default_levels;
use rampart_sim::{SimConfig, SimulationEngine};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Hard cap on session length: one simulated minute.
const MAX_TICKS: u64 = 60 * TICK_RATE as u64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let levels = default_levels()?;
    let mut engine = SimulationEngine::new(SimConfig::default(), levels)?;

    engine.queue_commands([
        PlayerCommand::PlaceTowerBegin {
            kind: TowerKind::Normal,
            position: Position::from((200.0, 140.0)),
        },
        PlayerCommand::PlaceTowerCommit,
        PlayerCommand::PlaceTowerBegin {
            kind: TowerKind::Slow,
            position: Position::from((340.0, 250.0)),
        },
        PlayerCommand::PlaceTowerCommit,
        PlayerCommand::StartNextWave,
    ]);

    let mut next_tick_time = Instant::now();
    for tick in 0..MAX_TICKS {
        let snapshot = engine.tick();

        if snapshot.enemies.is_empty()
            && !snapshot.wave_pending
            && snapshot.phase == GamePhase::Active
        {
            engine.queue_command(PlayerCommand::StartNextWave);
        }

        // One snapshot per simulated second keeps the output readable.
        let game_over = snapshot.phase == GamePhase::GameOver;
        if tick % TICK_RATE as u64 == 0 || game_over {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
        if game_over {
            break;
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else {
            // Fell behind; resynchronize instead of sprinting to catch up.
            next_tick_time = now;
        }
    }

    Ok(())
}
