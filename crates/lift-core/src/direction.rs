//! Travel direction shared by passengers, floor queues, and elevators.

use crate::FloorId;

/// Direction of travel.  An elevator always has a direction, even when idle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Direction of a trip from `origin` to `destination`: up iff the
    /// destination is above the origin.
    #[inline]
    pub fn of_trip(origin: FloorId, destination: FloorId) -> Direction {
        if destination > origin { Direction::Up } else { Direction::Down }
    }

    /// Direction that leads from `from` towards `to`.  Equal floors yield up.
    #[inline]
    pub fn towards(from: FloorId, to: FloorId) -> Direction {
        if to < from { Direction::Down } else { Direction::Up }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The floor one step from `floor` in this direction, or `None` when that
    /// would leave a building of `num_floors` floors.
    #[inline]
    pub fn step(self, floor: FloorId, num_floors: u16) -> Option<FloorId> {
        match self {
            Direction::Up if floor.0 + 1 < num_floors => Some(FloorId(floor.0 + 1)),
            Direction::Down if floor.0 > 0            => Some(FloorId(floor.0 - 1)),
            _ => None,
        }
    }

    /// Human-readable label, matching the event log format.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "Up",
            Direction::Down => "Down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
