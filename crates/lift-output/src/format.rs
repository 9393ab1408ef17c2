//! Human-readable log lines for [`SimEvent`]s.
//!
//! Floors are printed one-based.  Fields are separated by three spaces so the
//! lines line up when grepped side by side.

use lift_sim::SimEvent;

/// Render one event as a single log line.
pub fn log_line(event: &SimEvent) -> String {
    match event {
        SimEvent::ConfigApplied { config, .. } => {
            let e = &config.elevator;
            format!(
                "CONFIG:   Floors={}   Elevators={}   Capacity={}   Ticks-Floor={}   Ticks-Door={}   Ticks-Passengers={}",
                config.num_floors,
                config.num_elevators,
                e.capacity,
                e.ticks_per_floor,
                e.ticks_per_door,
                e.people_per_tick,
            )
        }
        SimEvent::StateChanged { tick, elevator, from, to, from_floor, to_floor } => format!(
            "Time={}   Elevator={}   Prev State: {}   Curr State: {}   PrevFloor: {}   CurrFloor: {}",
            tick.0,
            elevator.0,
            from,
            to,
            from_floor.number(),
            to_floor.number(),
        ),
        SimEvent::CallRegistered { tick, group, size, floor, direction } => format!(
            "Time={}   Called={} Floor={} Dir={}   passID={}",
            tick.0, size, floor.number(), direction, group.0,
        ),
        SimEvent::Boarded { tick, group, size, floor, direction, .. } => format!(
            "Time={}   Board={} Floor={} Dir={}   passID={}",
            tick.0, size, floor.number(), direction, group.0,
        ),
        SimEvent::Skipped { tick, group, size, floor, direction, .. } => format!(
            "Time={}   Skip={} Floor={} Dir={}   passID={}",
            tick.0, size, floor.number(), direction, group.0,
        ),
        SimEvent::GaveUp { tick, group, size, floor, direction, .. } => format!(
            "Time={}   GaveUp={} Floor={} Dir={}   passID={}",
            tick.0, size, floor.number(), direction, group.0,
        ),
        SimEvent::Arrived { tick, group, size, floor, .. } => format!(
            "Time={}   Arrived={} Floor={} passID={}",
            tick.0, size, floor.number(), group.0,
        ),
        SimEvent::DoorForcedOpen { tick, elevator, group, floor } => format!(
            "Time={}   Elevator={}   Doors forced open Floor={}   passID={}",
            tick.0, elevator.0, floor.number(), group.0,
        ),
        SimEvent::EndOfSimulation { tick } => {
            format!("Time={}   Detected End of Simulation", tick.0)
        }
    }
}
