//! `lift-core` — foundational types for the `lift_sim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `GroupId`, `ElevatorId`, `FloorId`                    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`direction`]   | `Direction` (up / down)                               |
//! | [`config`]      | `ElevatorConfig`, `SimConfig`                         |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ElevatorConfig, SimConfig};
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, FloorId, GroupId};
pub use time::{SimClock, Tick};
