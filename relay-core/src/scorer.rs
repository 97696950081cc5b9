//! Relocation scoring for booking sequences.
//!
//! A relocation is a break between two consecutive bookings: the first ends
//! somewhere other than where the second starts. Both solvers rank orderings
//! by this count.

use crate::Booking;

/// Count relocations in an ordered booking sequence.
///
/// Sequences of zero or one booking have no adjacent pairs and score `0`.
///
/// # Examples
/// ```
/// use relay_core::{Booking, count_relocations};
///
/// let chained = [Booking::new(1, "a", "b"), Booking::new(2, "b", "c")];
/// assert_eq!(count_relocations(&chained), 0);
///
/// let broken = [Booking::new(1, "a", "b"), Booking::new(2, "c", "a")];
/// assert_eq!(count_relocations(&broken), 1);
///
/// assert_eq!(count_relocations(&[]), 0);
/// ```
#[must_use]
pub fn count_relocations(bookings: &[Booking]) -> i64 {
    relocations_in(bookings)
}

/// Count relocations over any ordered iteration of bookings.
///
/// This lets callers score an ordering expressed as positions into a slice
/// without first materialising the reordered bookings.
///
/// # Examples
/// ```
/// use relay_core::{Booking, relocations_in};
///
/// let bookings = [Booking::new(1, "b", "c"), Booking::new(2, "a", "b")];
/// let order = [1_usize, 0];
/// let relocations = relocations_in(order.iter().filter_map(|&i| bookings.get(i)));
/// assert_eq!(relocations, 0);
/// ```
#[must_use]
pub fn relocations_in<'a, I>(bookings: I) -> i64
where
    I: IntoIterator<Item = &'a Booking>,
{
    let mut relocations = 0_i64;
    let mut previous: Option<&Booking> = None;
    for booking in bookings {
        if let Some(prev) = previous
            && !prev.chains_to(booking)
        {
            relocations = relocations.saturating_add(1);
        }
        previous = Some(booking);
    }
    relocations
}
