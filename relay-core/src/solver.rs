//! The seam every ordering strategy implements.

use crate::{Booking, Solution};

/// Reorder bookings to minimise relocations.
///
/// Solvers are total: every well-formed booking set yields a [`Solution`]
/// whose `bookings` are a permutation of the input. They hold configuration
/// only, so they must be `Send + Sync` and may be shared across threads; a
/// single `solve` call never spawns work of its own.
///
/// # Examples
/// ```rust
/// use relay_core::{Booking, Solution, Solver};
///
/// struct InputOrder;
///
/// impl Solver for InputOrder {
///     fn solve(&self, bookings: &[Booking]) -> Solution {
///         Solution::scored(bookings.to_vec())
///     }
/// }
///
/// let bookings = [Booking::new(1, "a", "b"), Booking::new(2, "b", "a")];
/// assert_eq!(InputOrder.solve(&bookings).relocations, 0);
/// ```
pub trait Solver: Send + Sync {
    /// Order `bookings`, returning the ordering and its relocation count.
    fn solve(&self, bookings: &[Booking]) -> Solution;
}
