//! Plain data row types written by output backends.

use lift_sim::{GiveUpRecord, SimEvent, SuccessRecord};

/// One line of the passenger data export.
///
/// Floors are one-based.  For a group that gave up, `wait_to_board` holds
/// its patience and `total_time` is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerDataRow {
    pub id:            u32,
    pub size:          u32,
    pub from:          u32,
    pub to:            u32,
    pub wait_to_board: i64,
    pub total_time:    i64,
}

impl PassengerDataRow {
    pub const HEADER: [&'static str; 6] = ["ID", "Number", "From", "To", "WaitToBoard", "TotalTime"];

    pub fn from_success(record: &SuccessRecord) -> Self {
        let g = record.group();
        Self {
            id:            g.id().0,
            size:          g.size(),
            from:          g.origin().number(),
            to:            g.destination().number(),
            wait_to_board: record.wait_to_board() as i64,
            total_time:    record.total_time() as i64,
        }
    }

    pub fn from_give_up(record: &GiveUpRecord) -> Self {
        let g = record.group();
        Self {
            id:            g.id().0,
            size:          g.size(),
            from:          g.origin().number(),
            to:            g.destination().number(),
            wait_to_board: g.patience() as i64,
            total_time:    -1,
        }
    }
}

/// One event, flattened for tabular storage.  Floors are one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:      u64,
    pub kind:      &'static str,
    pub elevator:  Option<u16>,
    pub group:     Option<u32>,
    pub size:      Option<u32>,
    pub floor:     Option<u32>,
    pub direction: Option<&'static str>,
    /// Free text: state transition, configuration summary, …
    pub detail:    String,
}

impl EventRow {
    pub const HEADER: [&'static str; 8] =
        ["tick", "kind", "elevator", "group", "size", "floor", "direction", "detail"];

    pub fn from_event(event: &SimEvent) -> Self {
        let mut row = Self {
            tick:      event.tick().0,
            kind:      event.kind(),
            elevator:  event.elevator().map(|e| e.0),
            group:     event.group().map(|g| g.0),
            size:      None,
            floor:     None,
            direction: None,
            detail:    String::new(),
        };
        match event {
            SimEvent::ConfigApplied { config, .. } => {
                let e = &config.elevator;
                row.detail = format!(
                    "floors={} elevators={} capacity={} floor_ticks={} door_ticks={} per_tick={}",
                    config.num_floors,
                    config.num_elevators,
                    e.capacity,
                    e.ticks_per_floor,
                    e.ticks_per_door,
                    e.people_per_tick,
                );
            }
            SimEvent::StateChanged { from, to, from_floor, to_floor, .. } => {
                row.floor = Some(to_floor.number());
                row.detail = format!("{from}@{} -> {to}@{}", from_floor.number(), to_floor.number());
            }
            SimEvent::CallRegistered { size, floor, direction, .. }
            | SimEvent::Boarded { size, floor, direction, .. }
            | SimEvent::Skipped { size, floor, direction, .. }
            | SimEvent::GaveUp { size, floor, direction, .. } => {
                row.size = Some(*size);
                row.floor = Some(floor.number());
                row.direction = Some(direction.as_str());
            }
            SimEvent::Arrived { size, floor, .. } => {
                row.size = Some(*size);
                row.floor = Some(floor.number());
            }
            SimEvent::DoorForcedOpen { floor, .. } => {
                row.floor = Some(floor.number());
            }
            SimEvent::EndOfSimulation { .. } => {}
        }
        row
    }
}
