//! Simulation observer trait for event delivery and data collection.

use lift_core::Tick;

use crate::{EngineSnapshot, Outcomes, SimEvent};

/// Callbacks invoked by [`DispatchEngine`][crate::DispatchEngine] as it
/// processes ticks.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: give-up counter
///
/// ```rust,ignore
/// struct GiveUps(usize);
///
/// impl SimObserver for GiveUps {
///     fn on_event(&mut self, event: &SimEvent) {
///         if matches!(event, SimEvent::GaveUp { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per event, in emission order, at the end of the tick that
    /// produced it.
    fn on_event(&mut self, _event: &SimEvent) {}

    /// Called at the end of each processed tick, after its events.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    fn on_snapshot(&mut self, _snapshot: &EngineSnapshot) {}

    /// Called once, on the tick the run is found to be finished.
    fn on_sim_end(&mut self, _final_tick: Tick, _outcomes: &Outcomes) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects every event.  Handy in tests and for post-run inspection.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of one kind (see [`SimEvent::kind`]).
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SimEvent> + 'a {
        self.events.iter().filter(move |e| e.kind() == kind)
    }
}

impl SimObserver for EventLog {
    fn on_event(&mut self, event: &SimEvent) {
        self.events.push(event.clone());
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_event(&mut self, event: &SimEvent) {
        (**self).on_event(event);
    }

    fn on_tick_end(&mut self, tick: Tick) {
        (**self).on_tick_end(tick);
    }

    fn on_snapshot(&mut self, snapshot: &EngineSnapshot) {
        (**self).on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick, outcomes: &Outcomes) {
        (**self).on_sim_end(final_tick, outcomes);
    }
}

/// Fan out to two observers, first then second.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_event(&mut self, event: &SimEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn on_tick_end(&mut self, tick: Tick) {
        self.0.on_tick_end(tick);
        self.1.on_tick_end(tick);
    }

    fn on_snapshot(&mut self, snapshot: &EngineSnapshot) {
        self.0.on_snapshot(snapshot);
        self.1.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick, outcomes: &Outcomes) {
        self.0.on_sim_end(final_tick, outcomes);
        self.1.on_sim_end(final_tick, outcomes);
    }
}
