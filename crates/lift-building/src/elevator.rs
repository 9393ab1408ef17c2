//! `ElevatorUnit` — one elevator car's registers and primitive actions.
//!
//! The unit knows how to move, open and close its doors, and take groups on
//! and off.  It never looks at floor queues or the call index; the transition
//! table in `lift-sim` does that and calls the primitives here.
//!
//! # Per-step bookkeeping
//!
//! ```text
//! begin_step()        prev_floor ← floor
//! <primitive actions> may change floor, door, manifest, transfer cycles
//! enter(next)         prev_state ← state, state ← next
//!                     on an actual change: ticks_in_state ← 0, can_board ← true
//! state_changed()     (prev_state, prev_floor) ≠ (state, floor)
//! ```

use lift_core::{Direction, ElevatorConfig, ElevatorId, FloorId, LiftError, LiftResult};
use lift_traffic::PassengerGroup;

use crate::{DoorPosition, ElevatorState, Manifest};

/// Progress of one boarding or offloading cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Transfer {
    active:       bool,
    people:       u32,
    ticks_needed: u64,
}

#[derive(Debug)]
pub struct ElevatorUnit {
    id:         ElevatorId,
    config:     ElevatorConfig,
    num_floors: u16,

    state:          ElevatorState,
    prev_state:     ElevatorState,
    floor:          FloorId,
    prev_floor:     FloorId,
    direction:      Direction,
    ticks_in_state: u64,
    door:           DoorPosition,
    manifest:       Manifest,

    move_to_floor:       FloorId,
    post_move_direction: Direction,
    forced_open:         bool,
    can_board:           bool,
    boarding:            Transfer,
    offloading:          Transfer,
}

impl ElevatorUnit {
    /// A stopped, empty elevator with closed doors at `floor`, heading up.
    ///
    /// Fails if `config` does not validate or `floor` is outside the building.
    pub fn new(
        id:         ElevatorId,
        config:     ElevatorConfig,
        num_floors: u16,
        floor:      FloorId,
    ) -> LiftResult<Self> {
        config.validate()?;
        if floor.0 >= num_floors {
            return Err(LiftError::FloorOutOfRange { floor, num_floors });
        }
        Ok(Self {
            id,
            config,
            num_floors,
            state: ElevatorState::Stop,
            prev_state: ElevatorState::Stop,
            floor,
            prev_floor: floor,
            direction: Direction::Up,
            ticks_in_state: 0,
            door: DoorPosition::CLOSED,
            manifest: Manifest::new(num_floors),
            move_to_floor: floor,
            post_move_direction: Direction::Up,
            forced_open: false,
            can_board: true,
            boarding: Transfer::default(),
            offloading: Transfer::default(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn id(&self) -> ElevatorId { self.id }
    #[inline] pub fn config(&self) -> &ElevatorConfig { &self.config }
    #[inline] pub fn state(&self) -> ElevatorState { self.state }
    #[inline] pub fn prev_state(&self) -> ElevatorState { self.prev_state }
    #[inline] pub fn floor(&self) -> FloorId { self.floor }
    #[inline] pub fn prev_floor(&self) -> FloorId { self.prev_floor }
    #[inline] pub fn direction(&self) -> Direction { self.direction }
    #[inline] pub fn ticks_in_state(&self) -> u64 { self.ticks_in_state }
    #[inline] pub fn door(&self) -> DoorPosition { self.door }
    #[inline] pub fn manifest(&self) -> &Manifest { &self.manifest }
    #[inline] pub fn occupants(&self) -> u32 { self.manifest.occupants() }
    #[inline] pub fn move_to_floor(&self) -> FloorId { self.move_to_floor }
    #[inline] pub fn post_move_direction(&self) -> Direction { self.post_move_direction }
    #[inline] pub fn is_forced_open(&self) -> bool { self.forced_open }
    #[inline] pub fn can_board(&self) -> bool { self.can_board }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.manifest.occupants() >= self.config.capacity
    }

    /// Idle: stopped this step and the one before.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == ElevatorState::Stop && self.prev_state == ElevatorState::Stop
    }

    #[inline]
    pub fn door_fully_open(&self) -> bool {
        self.door.is_open(self.config.ticks_per_door)
    }

    #[inline]
    pub fn door_fully_closed(&self) -> bool {
        self.door.is_closed()
    }

    // ── FSM registers ─────────────────────────────────────────────────────

    /// Start a step: remember where the car was.
    pub fn begin_step(&mut self) {
        self.prev_floor = self.floor;
    }

    /// Finish a step in state `next`.
    pub fn enter(&mut self, next: ElevatorState) {
        self.prev_state = self.state;
        self.state = next;
        if self.prev_state != next {
            self.ticks_in_state = 0;
            self.can_board = true;
        }
    }

    /// `true` if the last step changed state or floor.
    pub fn state_changed(&self) -> bool {
        self.prev_state != self.state || self.prev_floor != self.floor
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.opposite();
    }

    /// Head for `target`; adopt `then` once there.
    pub fn set_move_target(&mut self, target: FloorId, then: Direction) {
        self.move_to_floor = target;
        self.post_move_direction = then;
        self.direction = Direction::towards(self.floor, target);
    }

    pub fn set_forced_open(&mut self, forced: bool) {
        self.forced_open = forced;
    }

    // ── Motion and doors ──────────────────────────────────────────────────

    /// One tick of travel.  The floor changes when the time in state reaches
    /// a multiple of the floor travel time.  Returns `true` on a floor change.
    pub fn move_one_tick(&mut self) -> bool {
        self.ticks_in_state += 1;
        if self.ticks_in_state % self.config.ticks_per_floor != 0 {
            return false;
        }
        match self.direction.step(self.floor, self.num_floors) {
            Some(next) => {
                self.floor = next;
                true
            }
            None => false,
        }
    }

    pub fn open_door_tick(&mut self) {
        self.door.open_step(self.config.ticks_per_door);
    }

    pub fn close_door_tick(&mut self) {
        self.can_board = true;
        self.door.close_step();
    }

    // ── Boarding ──────────────────────────────────────────────────────────

    /// `true` if a group of `size` people fits right now.
    #[inline]
    pub fn has_room_for(&self, size: u32) -> bool {
        self.manifest.occupants() + size <= self.config.capacity
    }

    /// A group did not fit; stop boarding attempts until the next reset.
    pub fn block_boarding(&mut self) {
        self.can_board = false;
    }

    /// Take `group` on board and extend this stop's boarding cycle.
    ///
    /// # Panics
    ///
    /// If the group does not fit.  Callers check [`has_room_for`](Self::has_room_for).
    pub fn board(&mut self, group: PassengerGroup) {
        assert!(
            self.has_room_for(group.size()),
            "elevator {} over capacity: {} + {} > {}",
            self.id,
            self.manifest.occupants(),
            group.size(),
            self.config.capacity,
        );
        self.boarding.people += group.size();
        self.boarding.ticks_needed = self.config.transfer_ticks(self.boarding.people);
        self.manifest.add(group);
    }

    /// One tick of boarding.  Returns `true` once the cycle is complete.
    pub fn advance_boarding(&mut self) -> bool {
        self.ticks_in_state += 1;
        if self.ticks_in_state >= self.boarding.ticks_needed {
            self.boarding = Transfer::default();
            self.can_board = true;
            true
        } else {
            self.boarding.active = true;
            false
        }
    }

    #[inline]
    pub fn boarding_in_progress(&self) -> bool {
        self.boarding.active
    }

    // ── Offloading ────────────────────────────────────────────────────────

    /// `true` if anyone on board is getting off at the current floor.
    #[inline]
    pub fn has_offload_here(&self) -> bool {
        self.manifest.has_for(self.floor)
    }

    /// Remove the whole batch leaving at the current floor and start the
    /// offload cycle.
    pub fn begin_offload(&mut self) -> Vec<PassengerGroup> {
        let batch = self.manifest.take_floor(self.floor);
        let people = batch.iter().map(PassengerGroup::size).sum();
        self.offloading = Transfer {
            active:       true,
            people,
            ticks_needed: self.config.transfer_ticks(people),
        };
        batch
    }

    /// One tick of offloading.  Returns `true` once the cycle is complete.
    pub fn advance_offload(&mut self) -> bool {
        self.ticks_in_state += 1;
        if self.ticks_in_state >= self.offloading.ticks_needed {
            self.offloading = Transfer::default();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn offload_in_progress(&self) -> bool {
        self.offloading.active
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Assert the capacity invariant and the manifest occupant sum.
    pub fn check_invariants(&self) {
        assert!(
            self.manifest.occupants() <= self.config.capacity,
            "elevator {} holds {} people, capacity {}",
            self.id,
            self.manifest.occupants(),
            self.config.capacity,
        );
        debug_assert_eq!(self.manifest.recount(), self.manifest.occupants());
    }
}
