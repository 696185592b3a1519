//! The enemy path: an ordered, validated sequence of waypoints.

use serde::{Deserialize, Serialize};

use rampart_core::types::Position;

use crate::geometry::point_segment_distance;
use crate::MapError;

/// Ordered waypoints enemies walk, start to finish. Immutable after
/// construction; at least two points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Path {
    /// Build a path, failing fast on fewer than two waypoints.
    pub fn new(waypoints: Vec<Position>) -> Result<Self, MapError> {
        if waypoints.len() < 2 {
            return Err(MapError::PathTooShort(waypoints.len()));
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    /// The spawn point.
    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    /// Index of the final waypoint; reaching it counts as a leak.
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.waypoints.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Is `point` within `buffer` distance of any path segment?
    pub fn within_buffer(&self, point: Position, buffer: f64) -> bool {
        self.segments()
            .any(|(a, b)| point_segment_distance(point, a, b) <= buffer)
    }
}
