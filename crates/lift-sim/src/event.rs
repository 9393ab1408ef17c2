//! Structured simulation events.
//!
//! The engine buffers events while it processes a tick and hands them to the
//! observer in emission order at the end of the tick.  Formatting them for
//! humans or files is the observer's job.

use lift_core::{Direction, ElevatorId, FloorId, GroupId, SimConfig, Tick};
use lift_building::ElevatorState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// The configuration a run was built with.  First event of every run.
    ConfigApplied {
        tick:   Tick,
        config: SimConfig,
    },

    /// An elevator changed state or floor during its step.
    StateChanged {
        tick:       Tick,
        elevator:   ElevatorId,
        from:       ElevatorState,
        to:         ElevatorState,
        from_floor: FloorId,
        to_floor:   FloorId,
    },

    /// A group joined a floor queue.
    CallRegistered {
        tick:      Tick,
        group:     GroupId,
        size:      u32,
        floor:     FloorId,
        direction: Direction,
    },

    Boarded {
        tick:      Tick,
        elevator:  ElevatorId,
        group:     GroupId,
        size:      u32,
        floor:     FloorId,
        direction: Direction,
    },

    /// The head group did not fit and was left waiting.
    Skipped {
        tick:      Tick,
        elevator:  ElevatorId,
        group:     GroupId,
        size:      u32,
        floor:     FloorId,
        direction: Direction,
    },

    /// A group's patience ran out; `elevator` is the one that found it.
    GaveUp {
        tick:      Tick,
        elevator:  ElevatorId,
        group:     GroupId,
        size:      u32,
        floor:     FloorId,
        direction: Direction,
    },

    /// A group got off at its destination.
    Arrived {
        tick:     Tick,
        elevator: ElevatorId,
        group:    GroupId,
        size:     u32,
        floor:    FloorId,
    },

    /// An impolite group stopped the doors from closing.
    DoorForcedOpen {
        tick:     Tick,
        elevator: ElevatorId,
        group:    GroupId,
        floor:    FloorId,
    },

    EndOfSimulation { tick: Tick },
}

impl SimEvent {
    pub fn tick(&self) -> Tick {
        match *self {
            SimEvent::ConfigApplied { tick, .. }
            | SimEvent::StateChanged { tick, .. }
            | SimEvent::CallRegistered { tick, .. }
            | SimEvent::Boarded { tick, .. }
            | SimEvent::Skipped { tick, .. }
            | SimEvent::GaveUp { tick, .. }
            | SimEvent::Arrived { tick, .. }
            | SimEvent::DoorForcedOpen { tick, .. }
            | SimEvent::EndOfSimulation { tick } => tick,
        }
    }

    /// Stable lower-case name, used as the `kind` column in event exports.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::ConfigApplied { .. }   => "config",
            SimEvent::StateChanged { .. }    => "state",
            SimEvent::CallRegistered { .. }  => "call",
            SimEvent::Boarded { .. }         => "board",
            SimEvent::Skipped { .. }         => "skip",
            SimEvent::GaveUp { .. }          => "giveup",
            SimEvent::Arrived { .. }         => "arrival",
            SimEvent::DoorForcedOpen { .. }  => "forced_open",
            SimEvent::EndOfSimulation { .. } => "end",
        }
    }

    /// The elevator involved, if any.
    pub fn elevator(&self) -> Option<ElevatorId> {
        match *self {
            SimEvent::StateChanged { elevator, .. }
            | SimEvent::Boarded { elevator, .. }
            | SimEvent::Skipped { elevator, .. }
            | SimEvent::GaveUp { elevator, .. }
            | SimEvent::Arrived { elevator, .. }
            | SimEvent::DoorForcedOpen { elevator, .. } => Some(elevator),
            _ => None,
        }
    }

    /// The passenger group involved, if any.
    pub fn group(&self) -> Option<GroupId> {
        match *self {
            SimEvent::CallRegistered { group, .. }
            | SimEvent::Boarded { group, .. }
            | SimEvent::Skipped { group, .. }
            | SimEvent::GaveUp { group, .. }
            | SimEvent::Arrived { group, .. }
            | SimEvent::DoorForcedOpen { group, .. } => Some(group),
            _ => None,
        }
    }
}
