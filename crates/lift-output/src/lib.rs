//! `lift-output` — simulation output writers for the lift_sim elevator
//! simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                           |
//! |-----------|---------|-----------------------------------------|
//! | *(none)*  | CSV     | `events.csv`, `passenger_data.csv`      |
//! | `sqlite`  | SQLite  | `output.db`                             |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `lift_sim::SimObserver`.  [`LogObserver`] renders events
//! as human-readable lines through the `log` facade instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, LogObserver, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut out = SimOutputObserver::new(writer);
//! engine.run(&mut (&mut out, LogObserver)).unwrap();
//! out.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::log_line;
pub use observer::{LogObserver, SimOutputObserver};
pub use row::{EventRow, PassengerDataRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
