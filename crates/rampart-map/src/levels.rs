//! Level definitions: a path plus a placement policy.

use serde::{Deserialize, Serialize};

use rampart_core::constants::PATH_BUFFER;
use rampart_core::enums::TowerKind;
use rampart_core::types::Position;

use crate::path::Path;
use crate::placement::PlacementPolicy;
use crate::MapError;

/// One playable level. Immutable input data from the map collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub path: Path,
    pub policy: PlacementPolicy,
}

impl Level {
    pub fn new(name: impl Into<String>, path: Path, policy: PlacementPolicy) -> Self {
        Self {
            name: name.into(),
            path,
            policy,
        }
    }

    /// Single placement-legality contract over both policies.
    pub fn is_valid_placement(&self, position: Position, kind: TowerKind) -> bool {
        match &self.policy {
            PlacementPolicy::Regions(regions) => {
                regions.iter().any(|region| region.allows(position, kind))
            }
            PlacementPolicy::PathBuffer { buffer } => {
                !self.path.within_buffer(position, *buffer)
            }
        }
    }
}

/// The built-in level rotation.
pub fn default_levels() -> Result<Vec<Level>, MapError> {
    let meadow = Path::new(
        [
            (100.0, 100.0),
            (300.0, 100.0),
            (300.0, 300.0),
            (500.0, 300.0),
            (700.0, 500.0),
        ]
        .map(Position::from)
        .to_vec(),
    )?;

    let switchback = Path::new(
        [
            (50.0, 600.0),
            (200.0, 600.0),
            (200.0, 200.0),
            (500.0, 200.0),
            (500.0, 500.0),
            (800.0, 500.0),
        ]
        .map(Position::from)
        .to_vec(),
    )?;

    Ok(vec![
        Level::new(
            "meadow",
            meadow,
            PlacementPolicy::PathBuffer {
                buffer: PATH_BUFFER,
            },
        ),
        Level::new(
            "switchback",
            switchback,
            PlacementPolicy::PathBuffer {
                buffer: PATH_BUFFER,
            },
        ),
    ])
}
