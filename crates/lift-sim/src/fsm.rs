//! The elevator transition table.
//!
//! [`step`] runs one elevator through one tick: it performs the action of the
//! current state and returns the next state.  Every arm of the `match` is
//! total; there is no reachable combination of queues and manifest without a
//! successor.
//!
//! ```text
//! STOP ──call elsewhere──► MVTOFLR ──at target──► OPENDR
//!   │                                               │ fully open
//!   └──call here──────────────────────────────────► ├──offload here──► OFFLD ──► BOARD / CLOSEDR
//!                                                   └──────────────────────────► BOARD ──► CLOSEDR
//! CLOSEDR ──impolite arrival──► OPENDR
//!         ──closed, occupied──► MV1FLR
//!         ──closed, empty────► STOP / MV1FLR / OPENDR
//! MV1FLR  ──new floor, stop needed──► OPENDR
//!         ──new floor, nothing anywhere──► STOP
//! ```

use lift_core::Tick;
use lift_building::{CallIndex, ElevatorState, ElevatorUnit, FloorQueues};

use crate::{Outcomes, SimEvent};

/// Everything one elevator step may read or touch besides the elevator.
pub(crate) struct StepContext<'a> {
    pub now:      Tick,
    pub calls:    &'a CallIndex,
    pub floors:   &'a mut [FloorQueues],
    pub outcomes: &'a mut Outcomes,
    pub events:   &'a mut Vec<SimEvent>,
}

/// Advance `unit` by one tick.
pub(crate) fn step(unit: &mut ElevatorUnit, ctx: &mut StepContext<'_>) {
    unit.begin_step();

    let next = match unit.state() {
        ElevatorState::Stop         => stop(unit, ctx),
        ElevatorState::MoveToFloor  => move_to_floor(unit),
        ElevatorState::OpenDoor     => open_door(unit),
        ElevatorState::Offload      => offload(unit, ctx),
        ElevatorState::Board        => board(unit, ctx),
        ElevatorState::CloseDoor    => close_door(unit, ctx),
        ElevatorState::MoveOneFloor => move_one_floor(unit, ctx),
    };
    unit.enter(next);
    unit.check_invariants();

    if unit.state_changed() {
        ctx.events.push(SimEvent::StateChanged {
            tick:       ctx.now,
            elevator:   unit.id(),
            from:       unit.prev_state(),
            to:         unit.state(),
            from_floor: unit.prev_floor(),
            to_floor:   unit.floor(),
        });
    }
}

// ── States ────────────────────────────────────────────────────────────────────

fn stop(unit: &mut ElevatorUnit, ctx: &StepContext<'_>) -> ElevatorState {
    let Some(target) = ctx.calls.prioritize(unit.floor()) else {
        return ElevatorState::Stop;
    };
    if target.floor == unit.floor() {
        unit.set_direction(target.direction);
        ElevatorState::OpenDoor
    } else {
        unit.set_move_target(target.floor, target.direction);
        ElevatorState::MoveToFloor
    }
}

fn move_to_floor(unit: &mut ElevatorUnit) -> ElevatorState {
    unit.move_one_tick();
    if unit.floor() != unit.move_to_floor() {
        return ElevatorState::MoveToFloor;
    }
    unit.set_direction(unit.post_move_direction());
    ElevatorState::OpenDoor
}

fn open_door(unit: &mut ElevatorUnit) -> ElevatorState {
    unit.open_door_tick();
    if !unit.door_fully_open() {
        ElevatorState::OpenDoor
    } else if unit.has_offload_here() {
        ElevatorState::Offload
    } else {
        ElevatorState::Board
    }
}

fn offload(unit: &mut ElevatorUnit, ctx: &mut StepContext<'_>) -> ElevatorState {
    if !unit.offload_in_progress() {
        for group in unit.begin_offload() {
            ctx.events.push(SimEvent::Arrived {
                tick:     ctx.now,
                elevator: unit.id(),
                group:    group.id(),
                size:     group.size(),
                floor:    unit.floor(),
            });
            ctx.outcomes.record_success(group, ctx.now);
        }
    }
    if !unit.advance_offload() {
        return ElevatorState::Offload;
    }

    let floor = unit.floor();
    if ctx.calls.call_on_floor(floor, unit.direction()) {
        ElevatorState::Board
    } else if unit.is_empty() && ctx.calls.should_change_dir(floor, unit.direction()) {
        unit.reverse_direction();
        if ctx.calls.call_on_floor(floor, unit.direction()) {
            ElevatorState::Board
        } else {
            ElevatorState::CloseDoor
        }
    } else {
        ElevatorState::CloseDoor
    }
}

fn board(unit: &mut ElevatorUnit, ctx: &mut StepContext<'_>) -> ElevatorState {
    let (now, floor, dir, id) = (ctx.now, unit.floor(), unit.direction(), unit.id());
    let queue = &mut ctx.floors[floor.index()];

    // A full car still reports the head group it is leaving behind.
    if unit.is_full() {
        if let Some(head) = queue.peek(dir) {
            ctx.events.push(SimEvent::Skipped {
                tick: now, elevator: id, group: head.id(), size: head.size(), floor, direction: dir,
            });
        }
    }

    let mut boarded = false;
    while !unit.is_full() && unit.can_board() {
        let Some(head) = queue.peek(dir) else { break };

        if head.has_given_up(now) {
            if let Some(group) = queue.poll(dir) {
                ctx.events.push(SimEvent::GaveUp {
                    tick: now, elevator: id, group: group.id(), size: group.size(), floor, direction: dir,
                });
                ctx.outcomes.record_give_up(group, now);
            }
            continue;
        }

        if !unit.has_room_for(head.size()) {
            ctx.events.push(SimEvent::Skipped {
                tick: now, elevator: id, group: head.id(), size: head.size(), floor, direction: dir,
            });
            unit.block_boarding();
            break;
        }

        if let Some(mut group) = queue.poll(dir) {
            group.mark_boarded(now);
            ctx.events.push(SimEvent::Boarded {
                tick: now, elevator: id, group: group.id(), size: group.size(), floor, direction: dir,
            });
            unit.board(group);
            boarded = true;
        }
    }

    if boarded || unit.boarding_in_progress() {
        unit.advance_boarding();
    }
    if unit.boarding_in_progress() {
        ElevatorState::Board
    } else {
        ElevatorState::CloseDoor
    }
}

fn close_door(unit: &mut ElevatorUnit, ctx: &mut StepContext<'_>) -> ElevatorState {
    let (floor, dir) = (unit.floor(), unit.direction());

    if !unit.is_forced_open() {
        if let Some(head) = ctx.floors[floor.index()].peek(dir) {
            if !head.is_polite() && head.arrival() == ctx.now {
                unit.set_forced_open(true);
                ctx.events.push(SimEvent::DoorForcedOpen {
                    tick:     ctx.now,
                    elevator: unit.id(),
                    group:    head.id(),
                    floor,
                });
                return ElevatorState::OpenDoor;
            }
        }
    }

    unit.close_door_tick();
    if !unit.door_fully_closed() {
        return ElevatorState::CloseDoor;
    }
    unit.set_forced_open(false);
    if !unit.is_empty() {
        return ElevatorState::MoveOneFloor;
    }

    let calls = ctx.calls;
    if !calls.call_pending() {
        ElevatorState::Stop
    } else if calls.calls_pending_in_dir(floor, dir) {
        ElevatorState::MoveOneFloor
    } else if calls.call_on_floor(floor, dir) {
        ElevatorState::OpenDoor
    } else {
        unit.reverse_direction();
        if calls.call_on_floor(floor, unit.direction()) {
            ElevatorState::OpenDoor
        } else {
            ElevatorState::MoveOneFloor
        }
    }
}

fn move_one_floor(unit: &mut ElevatorUnit, ctx: &StepContext<'_>) -> ElevatorState {
    if !unit.move_one_tick() {
        return ElevatorState::MoveOneFloor;
    }

    let (floor, dir, calls) = (unit.floor(), unit.direction(), ctx.calls);
    if unit.has_offload_here() || calls.call_on_floor(floor, dir) {
        return ElevatorState::OpenDoor;
    }
    if !unit.is_empty() {
        return ElevatorState::MoveOneFloor;
    }

    if !calls.call_pending() {
        ElevatorState::Stop
    } else if calls.should_change_dir(floor, dir) {
        unit.reverse_direction();
        ElevatorState::OpenDoor
    } else {
        // Nothing left ahead: turn round rather than run past the end floor.
        if !calls.calls_pending_in_dir(floor, dir) {
            unit.reverse_direction();
        }
        ElevatorState::MoveOneFloor
    }
}
