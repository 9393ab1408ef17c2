//! `ArrivalLedger` — passenger groups that have not yet called an elevator.
//!
//! Groups are keyed by their arrival tick.  Each tick the dispatch engine
//! drains exactly the groups due at that tick, in insertion order, so groups
//! arriving together join their floor queues in input order.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::PassengerGroup;

/// A tick-ordered map of pending passenger groups.
#[derive(Debug, Default)]
pub struct ArrivalLedger {
    inner: BTreeMap<Tick, Vec<PassengerGroup>>,
    /// Cached total group count for O(1) `len()`.
    total: usize,
}

impl ArrivalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `group` for admission at its arrival tick.
    pub fn push(&mut self, group: PassengerGroup) {
        self.inner.entry(group.arrival()).or_default().push(group);
        self.total += 1;
    }

    /// Remove and return every group arriving at exactly `tick`.
    ///
    /// Returns `None` if no group is due (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<PassengerGroup>> {
        let groups = self.inner.remove(&tick)?;
        self.total -= groups.len();
        Some(groups)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
