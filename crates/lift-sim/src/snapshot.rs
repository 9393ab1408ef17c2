//! Read-only views of the building at a tick, for display and output.

use lift_core::{Direction, ElevatorId, FloorId, Tick};
use lift_building::{DoorPosition, ElevatorState, ElevatorUnit, FloorQueues};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub id:        ElevatorId,
    pub floor:     FloorId,
    pub occupants: u32,
    pub state:     ElevatorState,
    pub direction: Direction,
    pub door:      DoorPosition,
}

impl ElevatorSnapshot {
    pub fn of(unit: &ElevatorUnit) -> Self {
        Self {
            id:        unit.id(),
            floor:     unit.floor(),
            occupants: unit.occupants(),
            state:     unit.state(),
            direction: unit.direction(),
            door:      unit.door(),
        }
    }
}

/// Group sizes waiting on one floor, head of each queue first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorSnapshot {
    pub floor: FloorId,
    pub up:    Vec<u32>,
    pub down:  Vec<u32>,
}

impl FloorSnapshot {
    pub fn of(floor: FloorId, queues: &FloorQueues) -> Self {
        Self {
            floor,
            up:   queues.iter(Direction::Up).map(|g| g.size()).collect(),
            down: queues.iter(Direction::Down).map(|g| g.size()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSnapshot {
    /// The tick these views were taken at.
    pub tick:      Tick,
    pub elevators: Vec<ElevatorSnapshot>,
    pub floors:    Vec<FloorSnapshot>,
}
