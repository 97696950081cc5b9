//! Bookings: directed moves between two opaque location labels.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// A single move from a start location to an end location.
///
/// Location labels are opaque; the only relation between two labels is
/// equality. Bookings are immutable once constructed.
///
/// # Examples
/// ```
/// use relay_core::Booking;
///
/// let outbound = Booking::new(1, "depot", "airport");
/// let inbound = Booking::new(2, "airport", "depot");
///
/// assert_eq!(outbound.id(), 1);
/// assert!(outbound.chains_to(&inbound));
/// assert!(!inbound.chains_to(&inbound));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booking {
    id: i64,
    start: String,
    end: String,
}

impl Booking {
    /// Construct a booking from its identifier and endpoints.
    #[must_use]
    pub fn new(id: i64, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Caller-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Location the booking departs from.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Location the booking arrives at.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Return `true` when `next` departs from where this booking arrives.
    ///
    /// Scheduling `next` straight after `self` then needs no relocation.
    #[must_use]
    pub fn chains_to(&self, next: &Self) -> bool {
        self.end == next.start
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} -> {}", self.id, self.start, self.end)
    }
}

/// Errors returned by [`check_unique_ids`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingSetError {
    /// Two bookings share an identifier.
    #[error("booking id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: i64,
    },
}

/// Reject booking sets where an identifier is reused.
///
/// Solvers never look at identifiers, but callers that persist the winning
/// order as a list of ids cannot tell duplicates apart. Loaders should run
/// this check before handing bookings to a solver.
///
/// # Examples
/// ```
/// use relay_core::{Booking, BookingSetError, check_unique_ids};
///
/// let bookings = [Booking::new(1, "a", "b"), Booking::new(1, "b", "a")];
/// assert_eq!(
///     check_unique_ids(&bookings),
///     Err(BookingSetError::DuplicateId { id: 1 })
/// );
/// ```
pub fn check_unique_ids(bookings: &[Booking]) -> Result<(), BookingSetError> {
    let mut seen = HashSet::with_capacity(bookings.len());
    for booking in bookings {
        if !seen.insert(booking.id) {
            return Err(BookingSetError::DuplicateId { id: booking.id });
        }
    }
    Ok(())
}
