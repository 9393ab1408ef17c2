//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult, PassengerDataRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of events (one tick's worth).
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write the passenger data export: successes first, then give-ups.
    fn write_passenger_data(&mut self, rows: &[PassengerDataRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
