//! Projectile flight and impact system.
//!
//! Projectiles home on their bound target's current position every tick.
//! The target handle is validated through `world.get` before any use;
//! a target that died or despawned turns the shot into a no-damage
//! expiry, never a dangling dereference.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Health, Hull, Projectile};
use rampart_core::constants::PROJECTILE_RADIUS;
use rampart_core::types::Position;

/// Advance and resolve every projectile. Resolved projectiles go through
/// the despawn buffer after the scan.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let shots: Vec<(Entity, Projectile)> = world
        .query_mut::<&Projectile>()
        .into_iter()
        .map(|(entity, shot)| (entity, *shot))
        .collect();

    for (entity, shot) in shots {
        // Target lost: expire in place, no movement, no damage.
        let Some((target_pos, target_radius)) = target_state(world, shot.target) else {
            despawn_buffer.push(entity);
            continue;
        };

        let mut impact = None;
        let mut expired = false;
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            let to_target = target_pos.to_vec() - pos.to_vec();
            let distance = to_target.length();
            if distance > 0.0 {
                *pos = Position::from_vec(pos.to_vec() + to_target / distance * shot.speed);
            }

            if pos.distance_to(&target_pos) <= PROJECTILE_RADIUS + target_radius {
                impact = Some(*pos);
            } else if shot.origin.distance_to(&pos) > shot.origin_range {
                // Outran the firing tower's range: an intentional miss.
                expired = true;
            }
        }

        if let Some(impact_pos) = impact {
            apply_impact(world, &shot, impact_pos);
            despawn_buffer.push(entity);
        } else if expired {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Resolve the bound target to a live enemy, if it still exists.
fn target_state(world: &World, target: Entity) -> Option<(Position, f64)> {
    let position = *world.get::<&Position>(target).ok()?;
    let radius = world.get::<&Hull>(target).ok()?.radius;
    let alive = world.get::<&Health>(target).ok()?.hp > 0;
    alive.then_some((position, radius))
}

/// Splash hits everything within the blast radius of the impact point,
/// primary target included; the primary then takes direct damage if
/// still alive.
fn apply_impact(world: &mut World, shot: &Projectile, impact: Position) {
    if let Some(radius) = shot.splash_radius {
        for (_entity, (_enemy, pos, health)) in
            world.query_mut::<(&Enemy, &Position, &mut Health)>()
        {
            if pos.distance_to(&impact) <= radius {
                health.hp -= shot.damage;
            }
        }
    }

    if let Ok(mut health) = world.get::<&mut Health>(shot.target) {
        if health.hp > 0 {
            health.hp -= shot.damage;
        }
    }
}
