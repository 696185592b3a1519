//! Placement legality: named regions or a path keep-out buffer.
//!
//! Both policies sit behind one `Level::is_valid_placement` contract so
//! either can be configured per level without touching callers.

use serde::{Deserialize, Serialize};

use rampart_core::enums::TowerKind;
use rampart_core::types::Position;

use crate::geometry::point_in_polygon;
use crate::MapError;

/// A named polygon restricting which tower variants may be built inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRegion {
    pub name: String,
    pub polygon: Vec<Position>,
    /// Tower kinds buildable inside this region.
    pub allowed: Vec<TowerKind>,
}

impl PlacementRegion {
    /// Build a region, failing fast on degenerate data.
    pub fn new(
        name: impl Into<String>,
        polygon: Vec<Position>,
        allowed: Vec<TowerKind>,
    ) -> Result<Self, MapError> {
        let name = name.into();
        if polygon.len() < 3 {
            return Err(MapError::DegenerateRegion {
                name,
                vertices: polygon.len(),
            });
        }
        if allowed.is_empty() {
            return Err(MapError::EmptyAllowedSet(name));
        }
        Ok(Self {
            name,
            polygon,
            allowed,
        })
    }

    /// Does this region permit building `kind` at `position`?
    pub fn allows(&self, position: Position, kind: TowerKind) -> bool {
        self.allowed.contains(&kind) && point_in_polygon(position, &self.polygon)
    }
}

/// How a level decides whether a tower may stand at a position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// Legal iff inside at least one region whose allowed set contains
    /// the requested kind.
    Regions(Vec<PlacementRegion>),
    /// Legal iff farther than `buffer` from every path segment.
    PathBuffer { buffer: f64 },
}
