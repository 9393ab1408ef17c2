//! Fluent builder for constructing a [`DispatchEngine`].

use lift_core::{ElevatorId, FloorId, LiftError, SimConfig};
use lift_traffic::{ArrivalLedger, ArrivalRecord, GroupIdAllocator, PassengerGroup};
use lift_building::ElevatorUnit;

use crate::{DispatchEngine, SimError, SimResult};

/// Fluent builder for [`DispatchEngine`].
///
/// # Required inputs
///
/// - [`SimConfig`]: building size, elevator count, elevator parameters
/// - `Vec<ArrivalRecord>`: the passenger input, one-based floors
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                  |
/// |------------------------|--------------------------|
/// | `.initial_floors(v)`   | Every elevator on floor 0 |
///
/// Group ids are allocated in record order, starting at 0, by a fresh
/// [`GroupIdAllocator`] per build.
///
/// # Example
///
/// ```rust,ignore
/// let records = load_arrivals_csv(Path::new("passengers.csv"))?;
/// let mut engine = DispatchBuilder::new(config, records)
///     .initial_floors(vec![FloorId(0), FloorId(5)])
///     .build()?;
/// engine.run(&mut NoopObserver)?;
/// ```
pub struct DispatchBuilder {
    config:  SimConfig,
    records: Vec<ArrivalRecord>,
    floors:  Option<Vec<FloorId>>,
}

impl DispatchBuilder {
    pub fn new(config: SimConfig, records: Vec<ArrivalRecord>) -> Self {
        Self { config, records, floors: None }
    }

    /// Starting floor for each elevator (must be length `num_elevators`).
    pub fn initial_floors(mut self, floors: Vec<FloorId>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Validate inputs, allocate group ids, and return a ready-to-run engine.
    pub fn build(self) -> SimResult<DispatchEngine> {
        self.config.validate()?;
        let num_floors = self.config.num_floors;
        let num_elevators = self.config.num_elevators as usize;

        // ── Validate and resolve optional inputs ──────────────────────────
        let floors = match self.floors {
            Some(f) => {
                if f.len() != num_elevators {
                    return Err(SimError::InitialFloorCount {
                        expected: num_elevators,
                        got:      f.len(),
                    });
                }
                if let Some(&floor) = f.iter().find(|f| f.0 >= num_floors) {
                    return Err(LiftError::FloorOutOfRange { floor, num_floors }.into());
                }
                f
            }
            None => vec![FloorId(0); num_elevators],
        };

        // ── Build the pending-arrival ledger ──────────────────────────────
        let mut ids = GroupIdAllocator::new();
        let mut pending = ArrivalLedger::new();
        for (index, record) in self.records.iter().enumerate() {
            record
                .validate(num_floors)
                .map_err(|reason| SimError::InvalidArrival { index, reason })?;
            pending.push(PassengerGroup::from_record(ids.allocate(), record));
        }
        log::debug!(
            "built engine: {num_floors} floors, {num_elevators} elevators, {} groups",
            pending.len()
        );

        let elevators = floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| ElevatorUnit::new(ElevatorId(i as u16), self.config.elevator, num_floors, floor))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DispatchEngine::new(self.config, pending, elevators))
    }
}
