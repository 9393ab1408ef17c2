//! Passenger groups and the records they are created from.

use lift_core::{Direction, FloorId, GroupId, Tick};

// ── ArrivalRecord ─────────────────────────────────────────────────────────────

/// One row of passenger input, exactly as supplied by the outside world.
///
/// Floors are **one-based** here (floor 1 is the ground floor); they are
/// converted to zero-based [`FloorId`]s when the record becomes a
/// [`PassengerGroup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRecord {
    /// Tick at which the group calls the elevator.
    pub tick:        Tick,
    /// People in the group.
    pub size:        u32,
    /// One-based origin floor.
    pub origin:      u16,
    /// One-based destination floor.
    pub destination: u16,
    /// Polite groups never force a closing door open.
    pub polite:      bool,
    /// Ticks the group waits before giving up.
    pub patience:    u64,
}

impl ArrivalRecord {
    /// Default patience when the input omits it.
    pub const DEFAULT_PATIENCE: u64 = 1000;

    /// Check the record against a building of `num_floors` floors.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self, num_floors: u16) -> Result<(), String> {
        if self.size == 0 {
            return Err("group size must be at least 1".into());
        }
        for (what, floor) in [("origin", self.origin), ("destination", self.destination)] {
            if floor == 0 || floor > num_floors {
                return Err(format!(
                    "{what} floor {floor} is outside floors 1..={num_floors}"
                ));
            }
        }
        if self.origin == self.destination {
            return Err(format!("origin and destination are both floor {}", self.origin));
        }
        Ok(())
    }
}

// ── PassengerGroup ────────────────────────────────────────────────────────────

/// A group of people travelling together from one floor to another.
///
/// The group is always boarded and offloaded as a unit.  Arrival facts are
/// immutable; the board and destination-arrival ticks are stamped once by
/// the dispatch engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerGroup {
    id:          GroupId,
    arrival:     Tick,
    size:        u32,
    origin:      FloorId,
    destination: FloorId,
    polite:      bool,
    patience:    u64,
    board_tick:  Option<Tick>,
    arrived_at:  Option<Tick>,
}

impl PassengerGroup {
    /// Create a group from a validated record (see [`ArrivalRecord::validate`]).
    pub fn from_record(id: GroupId, record: &ArrivalRecord) -> Self {
        Self {
            id,
            arrival:     record.tick,
            size:        record.size,
            origin:      FloorId(record.origin.saturating_sub(1)),
            destination: FloorId(record.destination.saturating_sub(1)),
            polite:      record.polite,
            patience:    record.patience,
            board_tick:  None,
            arrived_at:  None,
        }
    }

    #[inline]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Tick at which the group joined its floor queue.
    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> FloorId {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> FloorId {
        self.destination
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of_trip(self.origin, self.destination)
    }

    #[inline]
    pub fn is_polite(&self) -> bool {
        self.polite
    }

    #[inline]
    pub fn patience(&self) -> u64 {
        self.patience
    }

    /// `true` once `now` is past the last tick the group is willing to wait.
    ///
    /// A patience of `u64::MAX` never runs out.
    #[inline]
    pub fn has_given_up(&self, now: Tick) -> bool {
        now.0.saturating_sub(self.arrival.0) > self.patience
    }

    #[inline]
    pub fn board_tick(&self) -> Option<Tick> {
        self.board_tick
    }

    /// Tick at which the group left the elevator at its destination.
    #[inline]
    pub fn arrived_at(&self) -> Option<Tick> {
        self.arrived_at
    }

    pub fn mark_boarded(&mut self, tick: Tick) {
        debug_assert!(self.board_tick.is_none(), "group {} boarded twice", self.id);
        self.board_tick = Some(tick);
    }

    pub fn mark_arrived(&mut self, tick: Tick) {
        debug_assert!(self.arrived_at.is_none(), "group {} arrived twice", self.id);
        self.arrived_at = Some(tick);
    }
}

// ── GroupIdAllocator ──────────────────────────────────────────────────────────

/// Hands out monotonically increasing [`GroupId`]s, starting at 0.
///
/// One allocator is owned by each run, so ids are reproducible across runs
/// and independent between runs in the same process.
#[derive(Debug, Default)]
pub struct GroupIdAllocator {
    next: u32,
}

impl GroupIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
