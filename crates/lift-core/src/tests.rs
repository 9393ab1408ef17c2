//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, FloorId, GroupId};

    #[test]
    fn index_roundtrip() {
        let id = GroupId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(GroupId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(GroupId::INVALID.0, u32::MAX);
        assert_eq!(ElevatorId::INVALID.0, u16::MAX);
        assert_eq!(FloorId::default(), FloorId::INVALID);
    }

    #[test]
    fn floor_numbers_are_one_based() {
        assert_eq!(FloorId(0).number(), 1);
        assert_eq!(FloorId::from_number(3), Some(FloorId(2)));
        assert_eq!(FloorId::from_number(0), None);
    }

    #[test]
    fn floor_distance_is_symmetric() {
        assert_eq!(FloorId(1).distance(FloorId(4)), 3);
        assert_eq!(FloorId(4).distance(FloorId(1)), 3);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(2).to_string(), "ElevatorId(2)");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, FloorId};

    #[test]
    fn trip_direction() {
        assert_eq!(Direction::of_trip(FloorId(0), FloorId(3)), Direction::Up);
        assert_eq!(Direction::of_trip(FloorId(3), FloorId(0)), Direction::Down);
    }

    #[test]
    fn opposite_flips() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn step_stays_inside_building() {
        assert_eq!(Direction::Up.step(FloorId(0), 3), Some(FloorId(1)));
        assert_eq!(Direction::Up.step(FloorId(2), 3), None);
        assert_eq!(Direction::Down.step(FloorId(0), 3), None);
        assert_eq!(Direction::Down.step(FloorId(2), 3), Some(FloorId(1)));
    }

    #[test]
    fn towards_target() {
        assert_eq!(Direction::towards(FloorId(4), FloorId(1)), Direction::Down);
        assert_eq!(Direction::towards(FloorId(1), FloorId(4)), Direction::Up);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(15).since(Tick(4)), 11);
        assert_eq!(Tick(7).since(Tick(7)), 0);
        assert!(Tick(3) < Tick(4));
    }

    #[test]
    fn clock_advances_from_zero() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod config {
    use crate::{ElevatorConfig, SimConfig};

    #[test]
    fn defaults_are_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn transfer_ticks_round_up() {
        let cfg = ElevatorConfig { people_per_tick: 3, ..ElevatorConfig::default() };
        assert_eq!(cfg.transfer_ticks(0), 0);
        assert_eq!(cfg.transfer_ticks(3), 1);
        assert_eq!(cfg.transfer_ticks(4), 2);
        assert_eq!(cfg.transfer_ticks(7), 3);
    }

    #[test]
    fn single_floor_rejected() {
        let cfg = SimConfig { num_floors: 1, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_throughput_rejected() {
        let mut cfg = SimConfig::default();
        cfg.elevator.people_per_tick = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn no_elevators_rejected() {
        let cfg = SimConfig { num_elevators: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
