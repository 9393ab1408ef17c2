//! Per-floor waiting queues.

use std::collections::VecDeque;

use lift_core::Direction;
use lift_traffic::PassengerGroup;

/// The two FIFO queues of groups waiting on one floor.
///
/// Only the head of a queue may be inspected or removed; arrival order is the
/// only ordering.
#[derive(Debug, Default)]
pub struct FloorQueues {
    up:   VecDeque<PassengerGroup>,
    down: VecDeque<PassengerGroup>,
}

impl FloorQueues {
    pub fn new() -> Self {
        Self::default()
    }

    fn queue(&self, dir: Direction) -> &VecDeque<PassengerGroup> {
        match dir {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn queue_mut(&mut self, dir: Direction) -> &mut VecDeque<PassengerGroup> {
        match dir {
            Direction::Up   => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// Append `group` to the tail of the `dir` queue.
    pub fn add(&mut self, dir: Direction, group: PassengerGroup) {
        debug_assert_eq!(group.direction(), dir, "group {} queued the wrong way", group.id());
        self.queue_mut(dir).push_back(group);
    }

    /// Remove and return the head of the `dir` queue.
    pub fn poll(&mut self, dir: Direction) -> Option<PassengerGroup> {
        self.queue_mut(dir).pop_front()
    }

    /// The head of the `dir` queue, without removing it.
    pub fn peek(&self, dir: Direction) -> Option<&PassengerGroup> {
        self.queue(dir).front()
    }

    /// `true` if anyone is waiting to travel in `dir`.
    pub fn pending(&self, dir: Direction) -> bool {
        !self.queue(dir).is_empty()
    }

    /// Number of groups waiting to travel in `dir`.
    pub fn len(&self, dir: Direction) -> usize {
        self.queue(dir).len()
    }

    /// Number of people (not groups) waiting to travel in `dir`.
    pub fn people(&self, dir: Direction) -> u32 {
        self.queue(dir).iter().map(PassengerGroup::size).sum()
    }

    /// `true` if both queues are empty.
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// Read-only view of the `dir` queue, head first.
    pub fn iter(&self, dir: Direction) -> impl Iterator<Item = &PassengerGroup> {
        self.queue(dir).iter()
    }
}
