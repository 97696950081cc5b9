//! Solver output: an ordered booking set and its relocation count.

use crate::{Booking, count_relocations};

/// An ordering of the input bookings together with its relocation count.
///
/// `bookings` is always a permutation of the solver input. For an empty input the tree solver
/// reports [`Solution::NO_BOOKINGS`] rather than `0`, meaning "no meaningful
/// solution" instead of "zero cost".
///
/// # Examples
/// ```
/// use relay_core::{Booking, Solution};
///
/// let solution = Solution::scored(vec![
///     Booking::new(3, "a", "c"),
///     Booking::new(2, "c", "a"),
/// ]);
/// assert_eq!(solution.relocations, 0);
/// assert_eq!(solution.ids(), vec![3, 2]);
///
/// let none = Solution::no_bookings();
/// assert!(none.bookings.is_empty());
/// assert_eq!(none.relocations, Solution::NO_BOOKINGS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Bookings in execution order.
    pub bookings: Vec<Booking>,
    /// Number of adjacent pairs that do not chain.
    pub relocations: i64,
}

impl Solution {
    /// Relocation count reported for an empty booking set.
    pub const NO_BOOKINGS: i64 = -1;

    /// Construct a solution from an ordering and a precomputed count.
    #[must_use]
    pub const fn new(bookings: Vec<Booking>, relocations: i64) -> Self {
        Self {
            bookings,
            relocations,
        }
    }

    /// Construct a solution, scoring the ordering with [`count_relocations`].
    #[must_use]
    pub fn scored(bookings: Vec<Booking>) -> Self {
        let relocations = count_relocations(&bookings);
        Self::new(bookings, relocations)
    }

    /// The sentinel solution for an empty booking set.
    #[must_use]
    pub const fn no_bookings() -> Self {
        Self::new(Vec::new(), Self::NO_BOOKINGS)
    }

    /// Return `true` when this is the empty-input sentinel.
    #[must_use]
    pub fn is_no_bookings(&self) -> bool {
        self.bookings.is_empty() && self.relocations == Self::NO_BOOKINGS
    }

    /// Booking identifiers in execution order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.bookings.iter().map(Booking::id).collect()
    }
}
