//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::commands::PlayerCommand;
use rampart_core::components::{SpawnOrder, Tower};
use rampart_core::constants::{tower_spec, LEVEL_CLEAR_BONUS, SELECT_RADIUS, UPGRADE_FLASH_TICKS, WAVES_PER_LEVEL};
use rampart_core::enums::{GamePhase, TowerKind};
use rampart_core::events::GameEvent;
use rampart_core::state::{DragView, GameStateSnapshot};
use rampart_core::types::{Position, SimTime};
use rampart_map::{Level, MapError};

use crate::economy::EconomyState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// An uncommitted drag-placement candidate.
#[derive(Debug, Clone, Copy)]
struct DragState {
    kind: TowerKind,
    position: Position,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    levels: Vec<Level>,
    level_index: usize,
    economy: EconomyState,
    /// A wave-start command was issued; the wave spawns once the live
    /// enemy set is empty.
    wave_pending: bool,
    selected: Option<Entity>,
    drag: Option<DragState>,
    next_spawn_seq: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine over the given level rotation.
    /// Fails fast if the rotation is empty.
    pub fn new(config: SimConfig, levels: Vec<Level>) -> Result<Self, MapError> {
        if levels.is_empty() {
            return Err(MapError::NoLevels);
        }
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            levels,
            level_index: 0,
            economy: EconomyState::default(),
            wave_pending: false,
            selected: None,
            drag: None,
            next_spawn_seq: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Commands drain in every phase; systems only run while
    /// Active.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        let drag = self.drag_view();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            self.level_index,
            self.wave_pending,
            self.selected,
            drag,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The level currently in play.
    pub fn current_level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    /// Get a read-only reference to the economy state.
    #[cfg(test)]
    pub fn economy(&self) -> &EconomyState {
        &self.economy
    }

    /// Mutable economy access (for tests that force progression states).
    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut EconomyState {
        &mut self.economy
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands are silent no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTowerBegin { kind, position } => {
                if self.drag.is_none() && self.economy.can_afford(tower_spec(kind).cost) {
                    self.drag = Some(DragState { kind, position });
                }
            }
            PlayerCommand::PlaceTowerMove { position } => {
                if let Some(drag) = &mut self.drag {
                    drag.position = position;
                }
            }
            PlayerCommand::PlaceTowerCommit => {
                if let Some(drag) = self.drag.take() {
                    self.commit_placement(drag);
                }
            }
            PlayerCommand::SelectTower { position } => {
                if let Some(entity) = self.tower_at(position) {
                    self.selected = Some(entity);
                }
            }
            PlayerCommand::UpgradeSelected => {
                self.upgrade_selected();
            }
            PlayerCommand::TogglePause => {
                self.phase = match self.phase {
                    GamePhase::Active => GamePhase::Paused,
                    GamePhase::Paused => GamePhase::Active,
                    GamePhase::GameOver => GamePhase::GameOver,
                };
            }
            PlayerCommand::RestartGame => {
                if self.phase == GamePhase::GameOver {
                    self.restart();
                }
            }
            PlayerCommand::StartNextWave => {
                self.wave_pending = true;
            }
        }
    }

    /// Place the dragged tower if the spot is legal and the cost covered.
    fn commit_placement(&mut self, drag: DragState) {
        let legal = self
            .current_level()
            .is_valid_placement(drag.position, drag.kind);
        if legal && self.economy.try_spend(tower_spec(drag.kind).cost) {
            let seq = self.next_seq();
            let _ = world_setup::spawn_tower(&mut self.world, drag.kind, drag.position, seq);
            self.events.push(GameEvent::TowerPlaced { kind: drag.kind });
        }
    }

    /// First tower (in placement order) within click range of `position`.
    fn tower_at(&self, position: Position) -> Option<Entity> {
        let mut query = self.world.query::<(&Tower, &SpawnOrder, &Position)>();
        let mut hits: Vec<(SpawnOrder, Entity)> = query
            .iter()
            .filter(|(_, (_, _, pos))| pos.distance_to(&position) <= SELECT_RADIUS)
            .map(|(entity, (_, seq, _))| (*seq, entity))
            .collect();
        hits.sort_by_key(|(seq, _)| *seq);
        hits.first().map(|(_, entity)| *entity)
    }

    /// Upgrade the selected tower: monotonic stat increases, strictly
    /// increasing next cost. No-op when unaffordable or nothing selected.
    fn upgrade_selected(&mut self) {
        let Some(entity) = self.selected else {
            return;
        };
        let Ok(mut tower) = self.world.get::<&mut Tower>(entity) else {
            return;
        };
        if !self.economy.try_spend(tower.upgrade_cost) {
            return;
        }

        let spec = tower_spec(tower.kind);
        tower.level += 1;
        tower.range += spec.range_per_level;
        tower.damage += spec.damage_per_level;
        tower.upgrade_cost += spec.upgrade_cost_step;
        tower.upgrade_flash = UPGRADE_FLASH_TICKS;
        self.events.push(GameEvent::TowerUpgraded {
            kind: tower.kind,
            level: tower.level,
        });
    }

    /// Reset to the starting state. The RNG stream continues; a fresh
    /// engine gives a fresh stream.
    fn restart(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.level_index = 0;
        self.economy = EconomyState::default();
        self.wave_pending = false;
        self.selected = None;
        self.drag = None;
        self.next_spawn_seq = 0;
    }

    /// Run all systems for one tick, in the fixed order.
    fn run_systems(&mut self) {
        // 1. Wave control: level progression, then due-wave spawning.
        self.run_wave_control();

        // 2. Enemy movement and death/arrival resolution.
        systems::movement::run(
            &mut self.world,
            &self.levels[self.level_index].path,
            &mut self.economy,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 3. Game-over check. Aborts the rest of the tick; fires at most
        // once because systems never run outside the Active phase.
        if self.economy.health <= 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                wave_number: self.economy.wave_number,
            });
            return;
        }

        // 4. Tower cooldowns and firing.
        systems::fire_control::run(&mut self.world, &mut self.next_spawn_seq);

        // 5. Projectile flight and impact resolution.
        systems::projectile::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Level progression and wave spawning, both gated on an empty live
    /// enemy set.
    fn run_wave_control(&mut self) {
        let any_enemies = self
            .world
            .query_mut::<&rampart_core::components::Enemy>()
            .into_iter()
            .next()
            .is_some();
        if any_enemies {
            return;
        }

        if self.economy.wave_number > WAVES_PER_LEVEL {
            self.advance_level();
        }

        if self.wave_pending {
            systems::wave_spawner::run(
                &mut self.world,
                &mut self.rng,
                &mut self.economy,
                &self.levels[self.level_index].path,
                &mut self.next_spawn_seq,
                &mut self.events,
            );
            self.wave_pending = false;
        }
    }

    /// Rotate to the next level: towers do not carry across, the wave
    /// counter resets, and the completion bonus is credited.
    fn advance_level(&mut self) {
        let completed = self.level_index;
        self.level_index = (self.level_index + 1) % self.levels.len();
        self.economy.complete_level();

        let towers: Vec<Entity> = self
            .world
            .query_mut::<&Tower>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in towers {
            let _ = self.world.despawn(entity);
        }
        self.selected = None;

        self.events.push(GameEvent::LevelCompleted {
            level_index: completed,
            bonus: LEVEL_CLEAR_BONUS,
        });
    }

    /// Snapshot view of the drag candidate, with live legality feedback.
    fn drag_view(&self) -> Option<DragView> {
        self.drag.map(|drag| DragView {
            kind: drag.kind,
            position: drag.position,
            valid: self
                .current_level()
                .is_valid_placement(drag.position, drag.kind),
        })
    }

    fn next_seq(&mut self) -> SpawnOrder {
        let seq = SpawnOrder(self.next_spawn_seq);
        self.next_spawn_seq += 1;
        seq
    }
}
