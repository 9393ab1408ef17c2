//! Unit tests for lift-building.

use lift_core::{Direction, ElevatorConfig, ElevatorId, FloorId, GroupId, LiftError, Tick};
use lift_traffic::{ArrivalRecord, PassengerGroup};

use crate::{CallIndex, CallTarget, DoorPosition, ElevatorState, ElevatorUnit, FloorQueues, Manifest};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A group; floors are one-based as in the passenger file.
fn group(id: u32, size: u32, origin: u16, destination: u16) -> PassengerGroup {
    PassengerGroup::from_record(
        GroupId(id),
        &ArrivalRecord {
            tick: Tick(0),
            size,
            origin,
            destination,
            polite: true,
            patience: 1000,
        },
    )
}

fn building(num_floors: u16) -> Vec<FloorQueues> {
    (0..num_floors).map(|_| FloorQueues::new()).collect()
}

fn enqueue(floors: &mut [FloorQueues], g: PassengerGroup) {
    let (origin, dir) = (g.origin(), g.direction());
    floors[origin.index()].add(dir, g);
}

fn index_of(floors: &[FloorQueues]) -> CallIndex {
    let mut index = CallIndex::new(floors.len() as u16);
    index.refresh(floors);
    index
}

fn config() -> ElevatorConfig {
    ElevatorConfig {
        capacity:        10,
        ticks_per_floor: 5,
        ticks_per_door:  2,
        people_per_tick: 3,
    }
}

fn unit_at(floor: u16) -> ElevatorUnit {
    ElevatorUnit::new(ElevatorId(0), config(), 6, FloorId(floor)).unwrap()
}

// ── FloorQueues ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod floor_queues {
    use super::*;

    #[test]
    fn fifo_per_direction() {
        let mut q = FloorQueues::new();
        q.add(Direction::Up, group(0, 1, 1, 3));
        q.add(Direction::Up, group(1, 2, 1, 4));
        q.add(Direction::Down, group(2, 1, 3, 1));

        assert_eq!(q.peek(Direction::Up).map(|g| g.id()), Some(GroupId(0)));
        assert_eq!(q.poll(Direction::Up).map(|g| g.id()), Some(GroupId(0)));
        assert_eq!(q.poll(Direction::Up).map(|g| g.id()), Some(GroupId(1)));
        assert!(q.poll(Direction::Up).is_none());
        assert!(q.pending(Direction::Down));
    }

    #[test]
    fn people_counts_group_sizes() {
        let mut q = FloorQueues::new();
        q.add(Direction::Up, group(0, 4, 1, 3));
        q.add(Direction::Up, group(1, 3, 1, 2));
        assert_eq!(q.len(Direction::Up), 2);
        assert_eq!(q.people(Direction::Up), 7);
        assert_eq!(q.people(Direction::Down), 0);
        assert!(!q.is_empty());
    }

    #[test]
    fn iter_is_head_first() {
        let mut q = FloorQueues::new();
        q.add(Direction::Down, group(5, 1, 4, 1));
        q.add(Direction::Down, group(6, 2, 4, 2));
        let sizes: Vec<u32> = q.iter(Direction::Down).map(|g| g.size()).collect();
        assert_eq!(sizes, vec![1, 2]);
    }
}

// ── CallIndex ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod call_index {
    use super::*;

    #[test]
    fn empty_building_has_no_calls() {
        let index = index_of(&building(5));
        assert!(!index.call_pending());
        assert_eq!(index.prioritize(FloorId(2)), None);
    }

    #[test]
    fn refresh_reflects_queues() {
        let mut floors = building(5);
        enqueue(&mut floors, group(0, 2, 2, 4));
        let mut index = index_of(&floors);
        assert!(index.call_pending());
        assert!(index.call_on_floor(FloorId(1), Direction::Up));
        assert!(!index.call_on_floor(FloorId(1), Direction::Down));
        assert_eq!(index.people_waiting(Direction::Up), 2);

        floors[1].poll(Direction::Up);
        // Stale until refreshed.
        assert!(index.call_pending());
        index.refresh(&floors);
        assert!(!index.call_pending());
    }

    #[test]
    fn calls_ahead_count_either_direction() {
        let mut floors = building(5);
        // Down call on floor 4 (zero-based 3).
        enqueue(&mut floors, group(0, 1, 4, 1));
        let index = index_of(&floors);
        assert!(index.calls_pending_in_dir(FloorId(0), Direction::Up));
        assert!(!index.calls_pending_in_dir(FloorId(3), Direction::Up));
        assert!(!index.calls_pending_in_dir(FloorId(0), Direction::Down));
        assert!(index.calls_pending_in_dir(FloorId(4), Direction::Down));
    }

    #[test]
    fn change_direction_only_when_nothing_ahead() {
        let mut floors = building(5);
        enqueue(&mut floors, group(0, 1, 3, 1)); // down call on zero-based 2
        let index = index_of(&floors);
        assert!(index.should_change_dir(FloorId(2), Direction::Up));

        let mut floors = building(5);
        enqueue(&mut floors, group(0, 1, 3, 1));
        enqueue(&mut floors, group(1, 1, 5, 1)); // something above
        let index = index_of(&floors);
        assert!(!index.should_change_dir(FloorId(2), Direction::Up));
    }
}

// ── Prioritisation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod prioritisation {
    use super::*;

    #[test]
    fn local_floor_beats_remote_demand() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 1, 3, 1));
        enqueue(&mut floors, group(1, 9, 6, 1));
        let index = index_of(&floors);
        assert_eq!(
            index.prioritize(FloorId(2)),
            Some(CallTarget { floor: FloorId(2), direction: Direction::Down })
        );
    }

    #[test]
    fn local_both_ways_larger_side_wins() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 2, 3, 5));
        enqueue(&mut floors, group(1, 3, 3, 1));
        let index = index_of(&floors);
        assert_eq!(index.prioritize(FloorId(2)).map(|t| t.direction), Some(Direction::Down));
    }

    #[test]
    fn local_both_ways_tie_goes_up() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 2, 3, 5));
        enqueue(&mut floors, group(1, 2, 3, 1));
        let index = index_of(&floors);
        assert_eq!(index.prioritize(FloorId(2)).map(|t| t.direction), Some(Direction::Up));
    }

    #[test]
    fn remote_larger_demand_wins() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 1, 2, 6)); // up from zero-based 1
        enqueue(&mut floors, group(1, 4, 5, 1)); // down from zero-based 4
        let index = index_of(&floors);
        assert_eq!(
            index.prioritize(FloorId(0)),
            Some(CallTarget { floor: FloorId(4), direction: Direction::Down })
        );
    }

    #[test]
    fn remote_picks_lowest_up_and_highest_down() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 1, 4, 6));
        enqueue(&mut floors, group(1, 1, 2, 6));
        enqueue(&mut floors, group(2, 5, 3, 1));
        enqueue(&mut floors, group(3, 5, 5, 1));
        let index = index_of(&floors);
        // 2 up vs 10 down: highest down call wins.
        assert_eq!(index.prioritize(FloorId(0)).map(|t| t.floor), Some(FloorId(4)));
    }

    #[test]
    fn equal_demand_equal_distance_up_wins() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 3, 2, 5)); // up from zero-based 1
        enqueue(&mut floors, group(1, 3, 6, 1)); // down from zero-based 5
        let index = index_of(&floors);
        assert_eq!(
            index.prioritize(FloorId(3)),
            Some(CallTarget { floor: FloorId(1), direction: Direction::Up })
        );
    }

    #[test]
    fn equal_demand_closer_candidate_wins() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 3, 1, 5)); // up from zero-based 0
        enqueue(&mut floors, group(1, 3, 6, 1)); // down from zero-based 5
        let index = index_of(&floors);
        assert_eq!(
            index.prioritize(FloorId(4)),
            Some(CallTarget { floor: FloorId(5), direction: Direction::Down })
        );
    }

    #[test]
    fn only_one_side_pending() {
        let mut floors = building(6);
        enqueue(&mut floors, group(0, 1, 5, 6));
        let index = index_of(&floors);
        assert_eq!(
            index.prioritize(FloorId(0)),
            Some(CallTarget { floor: FloorId(4), direction: Direction::Up })
        );
    }
}

// ── State and door ────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let states = [
            ElevatorState::Stop,
            ElevatorState::MoveToFloor,
            ElevatorState::OpenDoor,
            ElevatorState::Offload,
            ElevatorState::Board,
            ElevatorState::CloseDoor,
            ElevatorState::MoveOneFloor,
        ];
        let mut labels: Vec<&str> = states.iter().map(|s| s.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);
        assert_eq!(ElevatorState::MoveOneFloor.to_string(), "MV1FLR");
    }

    #[test]
    fn door_clamps_both_ends() {
        let mut door = DoorPosition::CLOSED;
        door.close_step();
        assert!(door.is_closed());
        for _ in 0..5 {
            door.open_step(2);
        }
        assert_eq!(door, DoorPosition(2));
        assert!(door.is_open(2));
        door.close_step();
        assert!(!door.is_open(2));
        assert!(!door.is_closed());
    }
}

// ── Manifest ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod manifest {
    use super::*;

    #[test]
    fn occupants_track_adds_and_takes() {
        let mut m = Manifest::new(6);
        m.add(group(0, 2, 1, 3));
        m.add(group(1, 3, 1, 3));
        m.add(group(2, 1, 1, 5));
        assert_eq!(m.occupants(), 6);
        assert!(m.has_for(FloorId(2)));

        let leaving = m.take_floor(FloorId(2));
        let ids: Vec<GroupId> = leaving.iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec![GroupId(0), GroupId(1)]);
        assert_eq!(m.occupants(), 1);
        assert_eq!(m.recount(), 1);
        assert!(!m.has_for(FloorId(2)));
    }
}

// ── ElevatorUnit ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_unit {
    use super::*;

    #[test]
    fn starts_idle_and_closed() {
        let unit = unit_at(0);
        assert!(unit.is_idle());
        assert!(unit.is_empty());
        assert!(unit.door_fully_closed());
        assert_eq!(unit.direction(), Direction::Up);
    }

    #[test]
    fn moves_one_floor_per_floor_time() {
        let mut unit = unit_at(0);
        unit.set_move_target(FloorId(2), Direction::Down);
        unit.enter(ElevatorState::MoveToFloor);
        let mut changes = Vec::new();
        for t in 1..=10 {
            if unit.move_one_tick() {
                changes.push(t);
            }
        }
        assert_eq!(changes, vec![5, 10]);
        assert_eq!(unit.floor(), FloorId(2));
    }

    #[test]
    fn rejects_unusable_config() {
        let stalled = ElevatorConfig { ticks_per_floor: 0, ..config() };
        assert!(matches!(
            ElevatorUnit::new(ElevatorId(0), stalled, 6, FloorId(0)),
            Err(LiftError::Config(_))
        ));
        let blocked = ElevatorConfig { people_per_tick: 0, ..config() };
        assert!(ElevatorUnit::new(ElevatorId(0), blocked, 6, FloorId(0)).is_err());
    }

    #[test]
    fn rejects_floor_outside_building() {
        assert!(matches!(
            ElevatorUnit::new(ElevatorId(0), config(), 6, FloorId(6)),
            Err(LiftError::FloorOutOfRange { num_floors: 6, .. })
        ));
    }

    #[test]
    fn never_leaves_the_building() {
        let mut unit = ElevatorUnit::new(ElevatorId(0), config(), 6, FloorId(5)).unwrap();
        unit.enter(ElevatorState::MoveOneFloor);
        for _ in 0..20 {
            assert!(!unit.move_one_tick());
        }
        assert_eq!(unit.floor(), FloorId(5));
    }

    #[test]
    fn state_change_resets_time_and_can_board() {
        let mut unit = unit_at(0);
        unit.enter(ElevatorState::Board);
        unit.block_boarding();
        assert!(!unit.can_board());
        unit.enter(ElevatorState::Board);
        assert!(!unit.can_board());
        unit.enter(ElevatorState::CloseDoor);
        assert!(unit.can_board());
        assert_eq!(unit.ticks_in_state(), 0);
        assert!(unit.state_changed());
    }

    #[test]
    fn boarding_takes_ceil_people_over_rate() {
        let mut unit = unit_at(0);
        unit.enter(ElevatorState::Board);
        unit.board(group(0, 7, 1, 3));
        // ceil(7 / 3) = 3 ticks
        assert!(!unit.advance_boarding());
        assert!(unit.boarding_in_progress());
        assert!(!unit.advance_boarding());
        assert!(unit.advance_boarding());
        assert!(!unit.boarding_in_progress());
        assert_eq!(unit.occupants(), 7);
    }

    #[test]
    fn late_joiner_extends_boarding() {
        let mut unit = unit_at(0);
        unit.enter(ElevatorState::Board);
        unit.board(group(0, 4, 1, 3));
        assert!(!unit.advance_boarding()); // ceil(4 / 3) = 2
        unit.board(group(1, 3, 1, 3));
        // total 7 people → 3 ticks, one already spent
        assert!(!unit.advance_boarding());
        assert!(unit.advance_boarding());
        assert_eq!(unit.occupants(), 7);
    }

    #[test]
    fn room_check_is_exact() {
        let mut unit = unit_at(0);
        unit.board(group(0, 6, 1, 3));
        assert!(unit.has_room_for(4));
        assert!(!unit.has_room_for(5));
    }

    #[test]
    #[should_panic(expected = "over capacity")]
    fn boarding_past_capacity_panics() {
        let mut unit = unit_at(0);
        unit.board(group(0, 11, 1, 3));
    }

    #[test]
    fn offload_takes_whole_batch() {
        let mut unit = unit_at(0);
        unit.board(group(0, 4, 1, 3));
        unit.board(group(1, 1, 1, 4));
        unit.enter(ElevatorState::MoveOneFloor);
        for _ in 0..10 {
            unit.move_one_tick();
        }
        assert_eq!(unit.floor(), FloorId(2));
        assert!(unit.has_offload_here());

        unit.enter(ElevatorState::Offload);
        let batch = unit.begin_offload();
        assert_eq!(batch.len(), 1);
        assert!(unit.offload_in_progress());
        assert!(!unit.advance_offload()); // ceil(4 / 3) = 2
        assert!(unit.advance_offload());
        assert!(!unit.offload_in_progress());
        assert_eq!(unit.occupants(), 1);
        unit.check_invariants();
    }

    #[test]
    fn door_cycle() {
        let mut unit = unit_at(0);
        unit.open_door_tick();
        assert!(!unit.door_fully_open());
        unit.open_door_tick();
        assert!(unit.door_fully_open());
        unit.close_door_tick();
        unit.close_door_tick();
        assert!(unit.door_fully_closed());
    }
}
