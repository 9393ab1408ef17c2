//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`;
//! `LogObserver` bridges it to the `log` facade.

use lift_core::Tick;
use lift_sim::{Outcomes, SimEvent, SimObserver};

use crate::format::log_line;
use crate::row::{EventRow, PassengerDataRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes events and the passenger data export to
/// any [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Events are buffered for the current tick and written as one batch when
/// the tick ends.  The passenger data is written once, when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `engine.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    buffer:     Vec<EventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer:     Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn flush_events(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &SimEvent) {
        self.buffer.push(EventRow::from_event(event));
    }

    fn on_tick_end(&mut self, _tick: Tick) {
        self.flush_events();
    }

    fn on_sim_end(&mut self, _final_tick: Tick, outcomes: &Outcomes) {
        self.flush_events();
        let rows: Vec<PassengerDataRow> = outcomes
            .successes()
            .iter()
            .map(PassengerDataRow::from_success)
            .chain(outcomes.give_ups().iter().map(PassengerDataRow::from_give_up))
            .collect();
        let result = self.writer.write_passenger_data(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

// ── LogObserver ───────────────────────────────────────────────────────────────

/// Writes every event as an `info!` line under the `lift_sim::events` target.
///
/// Pair it with a writer observer: `engine.run(&mut (&mut out, LogObserver))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_event(&mut self, event: &SimEvent) {
        log::info!(target: "lift_sim::events", "{}", log_line(event));
    }

    fn on_sim_end(&mut self, final_tick: Tick, outcomes: &Outcomes) {
        log::debug!(
            target: "lift_sim::events",
            "run ended at {final_tick}: {} arrived, {} gave up",
            outcomes.successes().len(),
            outcomes.give_ups().len(),
        );
    }
}
