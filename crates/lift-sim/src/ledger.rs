//! Append-only outcome ledgers: groups that arrived and groups that gave up.

use lift_core::Tick;
use lift_traffic::PassengerGroup;

/// A group delivered to its destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessRecord {
    group:   PassengerGroup,
    boarded: Tick,
    arrived: Tick,
}

impl SuccessRecord {
    pub fn group(&self) -> &PassengerGroup {
        &self.group
    }

    pub fn boarded(&self) -> Tick {
        self.boarded
    }

    pub fn arrived(&self) -> Tick {
        self.arrived
    }

    /// Ticks between calling the elevator and boarding it.
    pub fn wait_to_board(&self) -> u64 {
        self.boarded.since(self.group.arrival())
    }

    /// Ticks between calling the elevator and getting off at the destination.
    pub fn total_time(&self) -> u64 {
        self.arrived.since(self.group.arrival())
    }
}

/// A group that ran out of patience while waiting on its floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GiveUpRecord {
    group:      PassengerGroup,
    gave_up_at: Tick,
}

impl GiveUpRecord {
    pub fn group(&self) -> &PassengerGroup {
        &self.group
    }

    pub fn gave_up_at(&self) -> Tick {
        self.gave_up_at
    }
}

/// Both ledgers for one run.
#[derive(Debug, Default)]
pub struct Outcomes {
    successes: Vec<SuccessRecord>,
    give_ups:  Vec<GiveUpRecord>,
}

impl Outcomes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `group` as arrived at `now` and file it.
    pub(crate) fn record_success(&mut self, mut group: PassengerGroup, now: Tick) {
        debug_assert!(group.board_tick().is_some(), "group {} arrived without boarding", group.id());
        group.mark_arrived(now);
        let boarded = group.board_tick().unwrap_or(now);
        self.successes.push(SuccessRecord { group, boarded, arrived: now });
    }

    pub(crate) fn record_give_up(&mut self, group: PassengerGroup, now: Tick) {
        self.give_ups.push(GiveUpRecord { group, gave_up_at: now });
    }

    /// Delivered groups, in delivery order.
    pub fn successes(&self) -> &[SuccessRecord] {
        &self.successes
    }

    /// Groups that gave up, in give-up order.
    pub fn give_ups(&self) -> &[GiveUpRecord] {
        &self.give_ups
    }

    /// Groups with a final outcome.
    pub fn len(&self) -> usize {
        self.successes.len() + self.give_ups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successes.is_empty() && self.give_ups.is_empty()
    }
}
