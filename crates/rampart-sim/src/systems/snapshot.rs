//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::constants::{tower_spec, PROJECTILE_RADIUS};
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime};

use crate::economy::EconomyState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &EconomyState,
    level_index: usize,
    wave_pending: bool,
    selected: Option<Entity>,
    drag: Option<DragView>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        currency: economy.currency,
        health: economy.health,
        wave_number: economy.wave_number,
        level_index,
        wave_pending,
        enemies: build_enemies(world),
        towers: build_towers(world, selected),
        projectiles: build_projectiles(world),
        drag,
        selected: build_selected(world, selected),
        events,
    }
}

/// Enemy views in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&Enemy, &Position, &Hull, &Tint, &Health, &Mobility, &SpawnOrder)>();
    let mut enemies: Vec<(SpawnOrder, EnemyView)> = query
        .iter()
        .map(|(_, (_enemy, pos, hull, tint, health, mobility, seq))| {
            (
                *seq,
                EnemyView {
                    position: *pos,
                    radius: hull.radius,
                    color: tint.color,
                    health: health.hp,
                    slowed: mobility.slow_remaining > 0,
                },
            )
        })
        .collect();

    enemies.sort_by_key(|(seq, _)| *seq);
    enemies.into_iter().map(|(_, view)| view).collect()
}

/// Tower views in placement order.
fn build_towers(world: &World, selected: Option<Entity>) -> Vec<TowerView> {
    let mut query = world.query::<(&Tower, &Position, &SpawnOrder)>();
    let mut towers: Vec<(SpawnOrder, TowerView)> = query
        .iter()
        .map(|(entity, (tower, pos, seq))| {
            let spec = tower_spec(tower.kind);
            (
                *seq,
                TowerView {
                    position: *pos,
                    kind: tower.kind,
                    shape: spec.shape,
                    color: spec.color,
                    range: tower.range,
                    level: tower.level,
                    upgrade_cost: tower.upgrade_cost,
                    selected: selected == Some(entity),
                    upgrade_flash: tower.upgrade_flash,
                },
            )
        })
        .collect();

    towers.sort_by_key(|(seq, _)| *seq);
    towers.into_iter().map(|(_, view)| view).collect()
}

/// Projectile views in firing order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut query = world.query::<(&Projectile, &Position, &SpawnOrder)>();
    let mut projectiles: Vec<(SpawnOrder, ProjectileView)> = query
        .iter()
        .map(|(_, (shot, pos, seq))| {
            (
                *seq,
                ProjectileView {
                    position: *pos,
                    radius: PROJECTILE_RADIUS,
                    color: shot.color,
                },
            )
        })
        .collect();

    projectiles.sort_by_key(|(seq, _)| *seq);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

/// HUD detail for the selected tower, if it still exists.
fn build_selected(world: &World, selected: Option<Entity>) -> Option<SelectedTowerView> {
    let entity = selected?;
    let tower = world.get::<&Tower>(entity).ok()?;
    Some(SelectedTowerView {
        kind: tower.kind,
        level: tower.level,
        upgrade_cost: tower.upgrade_cost,
    })
}
