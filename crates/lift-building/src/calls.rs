//! The call index and call prioritisation.
//!
//! # Refresh model
//!
//! [`CallIndex::refresh`] recomputes every flag and count from the floor
//! queues in one pass.  The dispatch engine calls it once per tick, after new
//! arrivals are admitted and before any elevator steps, so every elevator in
//! a tick sees the same view of pending calls.  There is no incremental
//! patching: a boarding or give-up during the tick is only reflected at the
//! next refresh.
//!
//! # Prioritisation (idle elevator at floor F)
//!
//! ```text
//! 1. calls on F        → only up: up · only down: down
//!                        both: more people waiting wins, tie → up
//! 2. no calls on F     → U = lowest floor with an up call
//!                        D = highest floor with a down call
//!                        more people waiting building-wide wins;
//!                        tie → candidate closer to F, tie → U
//! ```

use std::cmp::Ordering;

use lift_core::{Direction, FloorId};

use crate::FloorQueues;

/// Where an idle elevator should go and which way it should head once there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallTarget {
    /// Origin floor of the group at the head of the chosen queue.
    pub floor:     FloorId,
    /// Direction of that queue, adopted on arrival.
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FloorCalls {
    up:          bool,
    down:        bool,
    up_people:   u32,
    down_people: u32,
}

impl FloorCalls {
    #[inline]
    fn has(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up   => self.up,
            Direction::Down => self.down,
        }
    }

    #[inline]
    fn any(&self) -> bool {
        self.up || self.down
    }
}

/// Cached view of which floors have pending calls.
#[derive(Clone, Debug)]
pub struct CallIndex {
    floors:      Vec<FloorCalls>,
    any_up:      bool,
    any_down:    bool,
    up_people:   u32,
    down_people: u32,
}

impl CallIndex {
    /// An index for `num_floors` floors with no pending calls.
    pub fn new(num_floors: u16) -> Self {
        Self {
            floors:      vec![FloorCalls::default(); num_floors as usize],
            any_up:      false,
            any_down:    false,
            up_people:   0,
            down_people: 0,
        }
    }

    /// Recompute everything from the current floor queues.
    pub fn refresh(&mut self, queues: &[FloorQueues]) {
        debug_assert_eq!(queues.len(), self.floors.len());
        self.any_up = false;
        self.any_down = false;
        self.up_people = 0;
        self.down_people = 0;

        for (calls, queue) in self.floors.iter_mut().zip(queues) {
            *calls = FloorCalls {
                up:          queue.pending(Direction::Up),
                down:        queue.pending(Direction::Down),
                up_people:   queue.people(Direction::Up),
                down_people: queue.people(Direction::Down),
            };
            self.any_up |= calls.up;
            self.any_down |= calls.down;
            self.up_people += calls.up_people;
            self.down_people += calls.down_people;
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if any floor has a call in either direction.
    #[inline]
    pub fn call_pending(&self) -> bool {
        self.any_up || self.any_down
    }

    /// `true` if `floor` has a call in `dir`.
    #[inline]
    pub fn call_on_floor(&self, floor: FloorId, dir: Direction) -> bool {
        self.floors[floor.index()].has(dir)
    }

    /// People waiting building-wide to travel in `dir`.
    pub fn people_waiting(&self, dir: Direction) -> u32 {
        match dir {
            Direction::Up   => self.up_people,
            Direction::Down => self.down_people,
        }
    }

    /// `true` if any floor strictly beyond `floor` in `dir` has a call in
    /// either direction.  An elevator travelling that way passes those
    /// floors whatever their call direction is.
    pub fn calls_pending_in_dir(&self, floor: FloorId, dir: Direction) -> bool {
        let i = floor.index();
        match dir {
            Direction::Up   => self.floors[i + 1..].iter().any(FloorCalls::any),
            Direction::Down => self.floors[..i].iter().any(FloorCalls::any),
        }
    }

    /// `true` when nothing is left ahead in `dir` but someone on `floor`
    /// wants to go the other way.
    pub fn should_change_dir(&self, floor: FloorId, dir: Direction) -> bool {
        !self.calls_pending_in_dir(floor, dir) && self.call_on_floor(floor, dir.opposite())
    }

    // ── Prioritisation ────────────────────────────────────────────────────

    /// Choose the call an idle elevator at `floor` should serve next.
    ///
    /// Returns `None` only when no call is pending anywhere.
    pub fn prioritize(&self, floor: FloorId) -> Option<CallTarget> {
        let here = &self.floors[floor.index()];
        let direction = match (here.up, here.down) {
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            (true, true) if here.up_people >= here.down_people => Direction::Up,
            (true, true) => Direction::Down,
            (false, false) => return self.prioritize_other_floors(floor),
        };
        Some(CallTarget { floor, direction })
    }

    fn prioritize_other_floors(&self, floor: FloorId) -> Option<CallTarget> {
        let lowest_up = self
            .floors
            .iter()
            .position(|f| f.up)
            .map(|i| CallTarget { floor: FloorId(i as u16), direction: Direction::Up });
        let highest_down = self
            .floors
            .iter()
            .rposition(|f| f.down)
            .map(|i| CallTarget { floor: FloorId(i as u16), direction: Direction::Down });

        match (lowest_up, highest_down) {
            (None, None) => None,
            (Some(up), None) => Some(up),
            (None, Some(down)) => Some(down),
            (Some(up), Some(down)) => match self.up_people.cmp(&self.down_people) {
                Ordering::Greater => Some(up),
                Ordering::Less => Some(down),
                Ordering::Equal => {
                    if floor.distance(up.floor) <= floor.distance(down.floor) {
                        Some(up)
                    } else {
                        Some(down)
                    }
                }
            },
        }
    }
}
