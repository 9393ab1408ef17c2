//! The `DispatchEngine` struct and its tick loop.

use lift_core::{Direction, FloorId, SimClock, SimConfig, Tick};
use lift_traffic::ArrivalLedger;
use lift_building::{CallIndex, ElevatorUnit, FloorQueues};

use crate::fsm::{self, StepContext};
use crate::snapshot::{ElevatorSnapshot, EngineSnapshot, FloorSnapshot};
use crate::{Outcomes, SimError, SimEvent, SimObserver, SimResult};

/// What a call to [`DispatchEngine::advance_one_tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was processed and the clock advanced.
    Advanced(Tick),
    /// The run is over; the tick it ended on.
    Finished(Tick),
}

/// The dispatch simulator.
///
/// `DispatchEngine` owns the whole building and drives it one tick at a time:
///
/// 0. **Termination check**: nothing pending, nobody waiting, every elevator
///    idle and empty → emit `EndOfSimulation` and stop.
/// 1. **Admit**: drain groups arriving this tick into their floor queues.
/// 2. **Refresh**: rebuild the [`CallIndex`] from the queues.
/// 3. **Step**: run each elevator's state machine once, ascending
///    `ElevatorId`.  Lower ids see queue changes first, so when two
///    elevators could take the same group the lowest id boards it.
/// 4. **Flush**: deliver buffered events, take a snapshot if due, advance
///    the clock.
///
/// Create via [`DispatchBuilder`][crate::DispatchBuilder].
pub struct DispatchEngine {
    /// Configuration the run was built with.
    pub config: SimConfig,

    /// The tick the engine processes next.
    pub clock: SimClock,

    pending:   ArrivalLedger,
    floors:    Vec<FloorQueues>,
    calls:     CallIndex,
    elevators: Vec<ElevatorUnit>,
    outcomes:  Outcomes,

    /// Events produced since the last flush.
    events:   Vec<SimEvent>,
    admitted: usize,
    finished: Option<Tick>,
}

impl DispatchEngine {
    pub(crate) fn new(
        config:    SimConfig,
        pending:   ArrivalLedger,
        elevators: Vec<ElevatorUnit>,
    ) -> Self {
        let num_floors = config.num_floors;
        let events = vec![SimEvent::ConfigApplied { tick: Tick::ZERO, config: config.clone() }];
        Self {
            config,
            clock: SimClock::new(),
            pending,
            floors: (0..num_floors).map(|_| FloorQueues::new()).collect(),
            calls: CallIndex::new(num_floors),
            elevators,
            outcomes: Outcomes::new(),
            events,
            admitted: 0,
            finished: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Process the current tick.
    ///
    /// Once the run has finished further calls do nothing and keep returning
    /// [`TickOutcome::Finished`].
    pub fn advance_one_tick<O: SimObserver>(&mut self, observer: &mut O) -> TickOutcome {
        if let Some(end) = self.finished {
            return TickOutcome::Finished(end);
        }
        let now = self.clock.current_tick;

        if self.is_quiescent() {
            log::debug!("run finished at {now}: {} outcomes", self.outcomes.len());
            self.events.push(SimEvent::EndOfSimulation { tick: now });
            self.finished = Some(now);
            self.flush_events(observer);
            observer.on_tick_end(now);
            observer.on_sim_end(now, &self.outcomes);
            return TickOutcome::Finished(now);
        }

        self.process_tick(now);

        self.flush_events(observer);
        observer.on_tick_end(now);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(&self.snapshot());
        }

        self.clock.advance();
        TickOutcome::Advanced(now)
    }

    /// Run until the building is quiet.  Returns the final tick.
    ///
    /// Fails with [`SimError::TickLimitExceeded`] if `config.max_ticks` ticks
    /// pass first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        loop {
            if let TickOutcome::Finished(end) = self.advance_one_tick(observer) {
                return Ok(end);
            }
            if self.clock.elapsed() >= self.config.max_ticks {
                return Err(SimError::TickLimitExceeded { limit: self.config.max_ticks });
            }
        }
    }

    /// Process up to `n` ticks, stopping early if the run finishes.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> TickOutcome {
        let mut last = TickOutcome::Advanced(self.clock.current_tick);
        for _ in 0..n {
            last = self.advance_one_tick(observer);
            if matches!(last, TickOutcome::Finished(_)) {
                break;
            }
        }
        last
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn outcomes(&self) -> &Outcomes {
        &self.outcomes
    }

    pub fn elevators(&self) -> &[ElevatorUnit] {
        &self.elevators
    }

    pub fn floor_queues(&self) -> &[FloorQueues] {
        &self.floors
    }

    /// The call index as of the last processed tick.
    pub fn calls(&self) -> &CallIndex {
        &self.calls
    }

    /// Groups still waiting for their arrival tick.
    pub fn pending_groups(&self) -> usize {
        self.pending.len()
    }

    /// Groups admitted into floor queues so far.
    pub fn admitted_groups(&self) -> usize {
        self.admitted
    }

    /// Groups standing in floor queues.
    pub fn waiting_groups(&self) -> usize {
        self.floors
            .iter()
            .map(|q| q.len(Direction::Up) + q.len(Direction::Down))
            .sum()
    }

    /// Groups on board any elevator.
    pub fn riding_groups(&self) -> usize {
        self.elevators.iter().map(|e| e.manifest().groups().count()).sum()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            tick:      self.clock.current_tick,
            elevators: self.elevators.iter().map(ElevatorSnapshot::of).collect(),
            floors:    self
                .floors
                .iter()
                .enumerate()
                .map(|(i, q)| FloorSnapshot::of(FloorId(i as u16), q))
                .collect(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn is_quiescent(&self) -> bool {
        self.pending.is_empty()
            && self.floors.iter().all(FloorQueues::is_empty)
            && self.elevators.iter().all(|e| e.is_idle() && e.is_empty())
    }

    fn process_tick(&mut self, now: Tick) {
        // ── Phase 1: admit arrivals ───────────────────────────────────────
        if let Some(groups) = self.pending.drain_tick(now) {
            log::trace!("{now}: admitting {} groups", groups.len());
            for group in groups {
                let (floor, direction) = (group.origin(), group.direction());
                self.events.push(SimEvent::CallRegistered {
                    tick: now,
                    group: group.id(),
                    size: group.size(),
                    floor,
                    direction,
                });
                self.floors[floor.index()].add(direction, group);
                self.admitted += 1;
            }
        }

        // ── Phase 2: refresh the call index ───────────────────────────────
        self.calls.refresh(&self.floors);

        // ── Phase 3: step elevators in id order ───────────────────────────
        let mut ctx = StepContext {
            now,
            calls:    &self.calls,
            floors:   &mut self.floors,
            outcomes: &mut self.outcomes,
            events:   &mut self.events,
        };
        for unit in self.elevators.iter_mut() {
            fsm::step(unit, &mut ctx);
        }
    }

    fn flush_events<O: SimObserver>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            observer.on_event(&event);
        }
    }
}
