//! `PermutationSolver` implementation.

use relay_core::{Booking, Solution, Solver, relocations_in};

use crate::permutations::next_permutation;

/// Brute-force solver that tries every ordering.
///
/// Orderings are visited in lexicographic order of input positions, starting
/// with the input order, and only a strictly better score replaces the best
/// so far. Unlike the tree solver, an empty input is scored `0`.
///
/// # Examples
/// ```rust
/// use relay_core::{Booking, Solver};
/// use relay_solver_permutation::PermutationSolver;
///
/// let bookings = [Booking::new(1, "a", "b"), Booking::new(2, "c", "a")];
/// let solution = PermutationSolver::new().solve(&bookings);
///
/// assert_eq!(solution.ids(), vec![2, 1]);
/// assert_eq!(solution.relocations, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PermutationSolver;

impl PermutationSolver {
    /// Construct the solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Solver for PermutationSolver {
    fn solve(&self, bookings: &[Booking]) -> Solution {
        let mut order: Vec<usize> = (0..bookings.len()).collect();
        let score = |candidate: &[usize]| {
            relocations_in(candidate.iter().filter_map(|&slot| bookings.get(slot)))
        };

        let mut best = order.clone();
        let mut best_relocations = score(&order);
        let mut evaluated = 1_u64;

        while next_permutation(&mut order) {
            evaluated = evaluated.saturating_add(1);
            let relocations = score(&order);
            if relocations < best_relocations {
                best.clone_from(&order);
                best_relocations = relocations;
            }
        }

        log::debug!(
            "permutation search evaluated {evaluated} orderings; best has {best_relocations} relocations"
        );
        let ordered = best
            .iter()
            .filter_map(|&slot| bookings.get(slot))
            .cloned()
            .collect();
        Solution::new(ordered, best_relocations)
    }
}
