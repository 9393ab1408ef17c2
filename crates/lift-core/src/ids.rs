//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-floor / per-elevator `Vec`s, but callers should
//! prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a passenger group, assigned in ingestion order.
    pub struct GroupId(u32);
}

typed_id! {
    /// Index of an elevator.  Elevators are stepped in ascending id order.
    pub struct ElevatorId(u16);
}

typed_id! {
    /// Zero-based floor index.  Use [`FloorId::number`] for the one-based
    /// floor number shown to people.
    pub struct FloorId(u16);
}

impl FloorId {
    /// Build a floor id from a one-based floor number (`1` is the ground
    /// floor).  Returns `None` for `0`.
    #[inline]
    pub fn from_number(number: u16) -> Option<FloorId> {
        number.checked_sub(1).map(FloorId)
    }

    /// One-based floor number for display and export.
    #[inline]
    pub fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    /// Absolute distance in floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: FloorId) -> u16 {
        self.0.abs_diff(other.0)
    }
}
