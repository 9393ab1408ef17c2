//! `lift-building` — the passive parts of the building: floor call queues,
//! the per-tick call index, and elevator units.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`floor`]     | `FloorQueues` — up/down FIFO queues of waiting groups         |
//! | [`calls`]     | `CallIndex`, `CallTarget` — pending-call cache + prioritisation |
//! | [`state`]     | `ElevatorState`, `DoorPosition`                               |
//! | [`manifest`]  | `Manifest` — boarded groups keyed by destination floor        |
//! | [`elevator`]  | `ElevatorUnit` — FSM registers, motion, doors, transfers      |
//!
//! Nothing here decides *what* an elevator does next; that transition table
//! lives in `lift-sim`.  These types only answer queries and apply the
//! primitive actions the transition table asks for.

pub mod calls;
pub mod elevator;
pub mod floor;
pub mod manifest;
pub mod state;

#[cfg(test)]
mod tests;

pub use calls::{CallIndex, CallTarget};
pub use elevator::ElevatorUnit;
pub use floor::FloorQueues;
pub use manifest::Manifest;
pub use state::{DoorPosition, ElevatorState};
