//! Groups on board an elevator, keyed by destination floor.

use lift_core::FloorId;
use lift_traffic::PassengerGroup;

/// One ordered list of boarded groups per destination floor.
///
/// Keeps a running occupant count; `occupants()` always equals the sum of
/// group sizes across every list.
#[derive(Debug)]
pub struct Manifest {
    by_floor:  Vec<Vec<PassengerGroup>>,
    occupants: u32,
}

impl Manifest {
    pub fn new(num_floors: u16) -> Self {
        Self {
            by_floor:  (0..num_floors).map(|_| Vec::new()).collect(),
            occupants: 0,
        }
    }

    /// File `group` under its destination floor.
    pub fn add(&mut self, group: PassengerGroup) {
        self.occupants += group.size();
        self.by_floor[group.destination().index()].push(group);
    }

    /// Remove and return every group leaving at `floor`, in boarding order.
    pub fn take_floor(&mut self, floor: FloorId) -> Vec<PassengerGroup> {
        let groups = std::mem::take(&mut self.by_floor[floor.index()]);
        let leaving: u32 = groups.iter().map(PassengerGroup::size).sum();
        self.occupants -= leaving;
        groups
    }

    /// `true` if anyone is getting off at `floor`.
    #[inline]
    pub fn has_for(&self, floor: FloorId) -> bool {
        !self.by_floor[floor.index()].is_empty()
    }

    #[inline]
    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants == 0
    }

    /// All boarded groups, lowest destination floor first.
    pub fn groups(&self) -> impl Iterator<Item = &PassengerGroup> {
        self.by_floor.iter().flatten()
    }

    /// Recount occupants from the lists.  Used by invariant checks.
    pub fn recount(&self) -> u32 {
        self.groups().map(PassengerGroup::size).sum()
    }
}
