//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state: entity state lives in components,
//! economy and progression state in the engine.

pub mod fire_control;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod wave_spawner;
