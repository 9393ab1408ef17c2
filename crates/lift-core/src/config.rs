//! Building and elevator configuration.
//!
//! Typically loaded from the key/value configuration file by `lift-traffic`
//! and passed to the dispatch builder.  Every elevator in a run shares the
//! same [`ElevatorConfig`].

use crate::{LiftError, LiftResult};

// ── ElevatorConfig ────────────────────────────────────────────────────────────

/// Per-elevator parameters, fixed for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorConfig {
    /// Maximum number of people on board.
    pub capacity: u32,

    /// Ticks needed to travel between two adjacent floors.
    pub ticks_per_floor: u64,

    /// Ticks needed for the doors to go from closed to open (or back).
    pub ticks_per_door: u32,

    /// People that can board or leave per tick.
    pub people_per_tick: u32,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            capacity:        15,
            ticks_per_floor: 5,
            ticks_per_door:  2,
            people_per_tick: 3,
        }
    }
}

impl ElevatorConfig {
    /// Ticks needed to move `people` through the doors: `ceil(people / people_per_tick)`.
    #[inline]
    pub fn transfer_ticks(&self, people: u32) -> u64 {
        people.div_ceil(self.people_per_tick) as u64
    }

    pub fn validate(&self) -> LiftResult<()> {
        if self.capacity == 0 {
            return Err(LiftError::Config("elevator capacity must be at least 1".into()));
        }
        if self.ticks_per_floor == 0 {
            return Err(LiftError::Config("floorTicks must be at least 1".into()));
        }
        if self.ticks_per_door == 0 {
            return Err(LiftError::Config("doorTicks must be at least 1".into()));
        }
        if self.people_per_tick == 0 {
            return Err(LiftError::Config("passPerTick must be at least 1".into()));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Floors in the building.  Must be at least 2.
    pub num_floors: u16,

    /// Elevators in the building.  Must be at least 1.
    pub num_elevators: u16,

    /// Parameters applied to every elevator.
    pub elevator: ElevatorConfig,

    /// Hard stop for `run`: a run that has not terminated after this many
    /// ticks is reported as an error.
    pub max_ticks: u64,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_floors:              6,
            num_elevators:           1,
            elevator:                ElevatorConfig::default(),
            max_ticks:               100_000,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.num_floors
            )));
        }
        if self.num_elevators == 0 {
            return Err(LiftError::Config("a building needs at least 1 elevator".into()));
        }
        self.elevator.validate()
    }
}
