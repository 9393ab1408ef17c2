//! Elevator FSM states and the door position counter.

use std::fmt;

/// The seven states of the elevator state machine.
///
/// The transition table itself lives in `lift-sim`; `match`ing on this enum
/// there is exhaustive, so adding a state is a compile error until every
/// transition is defined.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ElevatorState {
    /// Idle with the doors closed.
    #[default]
    Stop,
    /// Travelling non-stop to a call picked while idle.
    MoveToFloor,
    OpenDoor,
    /// Letting out groups whose destination is this floor.
    Offload,
    /// Taking on groups waiting here in the travel direction.
    Board,
    CloseDoor,
    /// Travelling one floor at a time, checking each floor on arrival.
    MoveOneFloor,
}

impl ElevatorState {
    /// Short label used in the event log.
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorState::Stop         => "STOP",
            ElevatorState::MoveToFloor  => "MVTOFLR",
            ElevatorState::OpenDoor     => "OPENDR",
            ElevatorState::Offload      => "OFFLD",
            ElevatorState::Board        => "BOARD",
            ElevatorState::CloseDoor    => "CLOSEDR",
            ElevatorState::MoveOneFloor => "MV1FLR",
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DoorPosition ──────────────────────────────────────────────────────────────

/// How far open the doors are, in ticks of door travel.
///
/// `0` is fully closed; the configured door tick count is fully open.  The
/// counter is clamped to that range.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct DoorPosition(pub u32);

impl DoorPosition {
    pub const CLOSED: DoorPosition = DoorPosition(0);

    /// One tick of opening towards `fully_open`.
    #[inline]
    pub fn open_step(&mut self, fully_open: u32) {
        self.0 = (self.0 + 1).min(fully_open);
    }

    /// One tick of closing.
    #[inline]
    pub fn close_step(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    #[inline]
    pub fn is_open(self, fully_open: u32) -> bool {
        self.0 >= fully_open
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        self.0 == 0
    }
}
