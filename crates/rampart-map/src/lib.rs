//! Level data for Rampart.
//!
//! The map collaborator hands the core an ordered enemy path and a set of
//! named placement regions per level; this crate holds those immutable
//! structures, the placement-legality policies, and their load-time
//! validation. Authoring-format parsing (TMX and friends) stays outside.

pub use rampart_core as core;

pub mod geometry;
pub mod levels;
pub mod path;
pub mod placement;

pub use levels::{default_levels, Level};
pub use path::Path;
pub use placement::{PlacementPolicy, PlacementRegion};

use thiserror::Error;

/// Validation errors raised while constructing level data.
/// These are one-time load failures, never per-tick conditions.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("enemy path needs at least 2 waypoints, got {0}")]
    PathTooShort(usize),
    #[error("placement region {name:?} needs at least 3 vertices, got {vertices}")]
    DegenerateRegion { name: String, vertices: usize },
    #[error("placement region {0:?} allows no tower kinds")]
    EmptyAllowedSet(String),
    #[error("the level rotation must contain at least one level")]
    NoLevels,
}
