//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `passenger_data.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, OutputResult, PassengerDataRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:     Writer<File>,
    passengers: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EventRow::HEADER)?;

        let mut passengers = Writer::from_path(dir.join("passenger_data.csv"))?;
        passengers.write_record(PassengerDataRow::HEADER)?;

        Ok(Self {
            events,
            passengers,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.kind.to_string(),
                opt(row.elevator),
                opt(row.group),
                opt(row.size),
                opt(row.floor),
                opt(row.direction),
                row.detail.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_passenger_data(&mut self, rows: &[PassengerDataRow]) -> OutputResult<()> {
        for row in rows {
            self.passengers.write_record(&[
                row.id.to_string(),
                row.size.to_string(),
                row.from.to_string(),
                row.to.to_string(),
                row.wait_to_board.to_string(),
                row.total_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.passengers.flush()?;
        Ok(())
    }
}
