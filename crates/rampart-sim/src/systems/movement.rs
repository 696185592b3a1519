//! Enemy movement system: waypoint advance, slow-timer expiry, and
//! death/arrival resolution.
//!
//! Movement is snap-then-continue. The tick on which the remaining
//! distance drops to the step size counts as arrival at the waypoint;
//! the position may overshoot by up to one step, which is an accepted
//! tolerance.

use glam::DVec2;
use hecs::{Entity, World};

use rampart_core::components::{Enemy, Health, Mobility, PathFollower};
use rampart_core::constants::KILL_REWARD;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;
use rampart_map::Path;

use crate::economy::EconomyState;

/// Advance every enemy along the path, then resolve deaths and leaks.
/// Removed enemies go through the despawn buffer; the collection is
/// never mutated while being iterated.
pub fn run(
    world: &mut World,
    path: &Path,
    economy: &mut EconomyState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    advance_enemies(world, path);
    resolve_enemies(world, path, economy, events, despawn_buffer);
}

fn advance_enemies(world: &mut World, path: &Path) {
    let waypoints = path.waypoints();

    for (_entity, (_enemy, pos, follower, mobility)) in
        world.query_mut::<(&Enemy, &mut Position, &mut PathFollower, &mut Mobility)>()
    {
        if follower.waypoint < path.last_index() {
            let target = waypoints[follower.waypoint + 1];
            let to_target: DVec2 = target.to_vec() - pos.to_vec();
            let distance = to_target.length();
            if distance > 0.0 {
                let step = to_target / distance * mobility.speed;
                *pos = Position::from_vec(pos.to_vec() + step);
            }
            if distance <= mobility.speed {
                follower.waypoint += 1;
            }
        }

        if mobility.slow_remaining > 0 {
            mobility.slow_remaining -= 1;
            if mobility.slow_remaining == 0 {
                mobility.speed = mobility.base_speed;
            }
        }
    }
}

/// Deaths award currency; arrivals at the final waypoint cost player
/// health. A dead enemy at the path end counts as a kill, not a leak.
fn resolve_enemies(
    world: &mut World,
    path: &Path,
    economy: &mut EconomyState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (_enemy, health, follower)) in
        world.query_mut::<(&Enemy, &Health, &PathFollower)>()
    {
        if health.hp <= 0 {
            economy.award_kill();
            events.push(GameEvent::EnemyKilled {
                reward: KILL_REWARD,
            });
            despawn_buffer.push(entity);
        } else if follower.waypoint == path.last_index() {
            economy.apply_leak();
            events.push(GameEvent::EnemyLeaked {
                health_remaining: economy.health,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
