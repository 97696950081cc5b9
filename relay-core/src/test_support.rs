//! Test-only helpers shared by the solver crates' unit, behaviour and
//! property tests.

use std::collections::HashMap;

use crate::{Booking, Solution};

/// Build bookings from `(id, start, end)` triples.
#[must_use]
pub fn bookings(legs: &[(i64, &str, &str)]) -> Vec<Booking> {
    legs.iter()
        .map(|&(id, start, end)| Booking::new(id, start, end))
        .collect()
}

/// Return `true` when `solution` holds exactly the bookings in `input`.
///
/// Bookings are compared by value, so duplicates must appear the same number
/// of times on both sides.
#[must_use]
pub fn is_permutation_of(solution: &Solution, input: &[Booking]) -> bool {
    if solution.bookings.len() != input.len() {
        return false;
    }
    let mut counts: HashMap<&Booking, isize> = HashMap::new();
    for booking in input {
        *counts.entry(booking).or_default() += 1;
    }
    for booking in &solution.bookings {
        *counts.entry(booking).or_default() -= 1;
    }
    counts.values().all(|&count| count == 0)
}
