//! `lift-traffic` — passenger groups, the pending-arrival ledger, input file
//! loading, and synthetic traffic.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`group`]     | `ArrivalRecord`, `PassengerGroup`, `GroupIdAllocator`     |
//! | [`ledger`]    | `ArrivalLedger` (`BTreeMap<Tick, Vec<PassengerGroup>>`)   |
//! | [`loader`]    | `load_arrivals_csv`, `load_config_csv`, reader variants   |
//! | [`generator`] | `TrafficGenerator` — seeded random arrival records        |
//! | [`error`]     | `TrafficError`, `TrafficResult<T>`                        |
//!
//! # Group lifecycle
//!
//! ```text
//! ArrivalRecord ──(id allocated)──► PassengerGroup in ArrivalLedger
//!        ──(arrival tick)──► floor queue ──► elevator manifest ──► success
//!                                   └──(patience expired)──► give-up
//! ```
//!
//! A group is moved, never cloned, between those containers.

pub mod error;
pub mod generator;
pub mod group;
pub mod ledger;
pub mod loader;


pub use error::{TrafficError, TrafficResult};
pub use generator::TrafficGenerator;
pub use group::{ArrivalRecord, GroupIdAllocator, PassengerGroup};
pub use ledger::ArrivalLedger;
pub use loader::{ConfigFile, load_arrivals_csv, load_arrivals_reader, load_config_csv, load_config_reader};
