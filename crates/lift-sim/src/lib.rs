//! `lift-sim` — the dispatch engine for the lift_sim elevator simulator.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ⓪ Done?    — no pending arrivals, empty queues, every elevator idle
//!                and empty → EndOfSimulation, stop.
//!   ① Admit    — drain groups arriving this tick into floor queues.
//!   ② Refresh  — rebuild the CallIndex from the floor queues.
//!   ③ Step     — each elevator, ascending ElevatorId, runs its state
//!                machine once (see `fsm`).
//!   ④ Flush    — hand buffered SimEvents to the observer, snapshot if due,
//!                advance the clock.
//! ```
//!
//! The engine is single-threaded and deterministic: the same config and
//! records always produce the same event stream.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::{DispatchBuilder, EventLog};
//!
//! let mut engine = DispatchBuilder::new(config, records).build()?;
//! let mut log = EventLog::new();
//! let final_tick = engine.run(&mut log)?;
//! for s in engine.outcomes().successes() {
//!     println!("{} waited {}", s.group().id(), s.wait_to_board());
//! }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod event;
mod fsm;
pub mod ledger;
pub mod observer;
pub mod snapshot;


pub use builder::DispatchBuilder;
pub use engine::{DispatchEngine, TickOutcome};
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use ledger::{GiveUpRecord, Outcomes, SuccessRecord};
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use snapshot::{ElevatorSnapshot, EngineSnapshot, FloorSnapshot};
