//! `TreeSolver` and its configuration.

use std::time::Duration;

use relay_core::{Booking, Solution, Solver};

use crate::search::Search;
use crate::stats::SearchOutcome;

/// Configuration for [`TreeSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSolverConfig {
    /// Stop expanding nodes once this much time has passed.
    ///
    /// `None` (the default) always explores the whole tree, so the returned
    /// solution is optimal. With a limit the best ordering found so far is
    /// returned and [`SearchStats::exhausted`](crate::SearchStats::exhausted)
    /// is `false` if the limit was hit.
    pub time_limit: Option<Duration>,
    /// Number of nodes between clock samples when `time_limit` is set.
    pub check_interval: u64,
}

impl Default for TreeSolverConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            check_interval: 1024,
        }
    }
}

/// Exact branch-and-bound solver.
///
/// # Examples
/// ```rust
/// use relay_core::{Booking, Solver};
/// use relay_solver_tree::TreeSolver;
///
/// let bookings = [
///     Booking::new(1, "a", "b"),
///     Booking::new(2, "c", "a"),
///     Booking::new(3, "a", "c"),
/// ];
/// let solution = TreeSolver::new().solve(&bookings);
///
/// assert_eq!(solution.relocations, 0);
/// assert_eq!(solution.ids(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeSolver {
    config: TreeSolverConfig,
}

impl TreeSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TreeSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: TreeSolverConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TreeSolverConfig {
        &self.config
    }

    /// Search for the best ordering and report search statistics.
    ///
    /// An empty input yields the [`Solution::no_bookings`] sentinel.
    #[must_use]
    pub fn search(&self, bookings: &[Booking]) -> SearchOutcome {
        Search::new(bookings.len(), &self.config).run(bookings)
    }
}

impl Solver for TreeSolver {
    fn solve(&self, bookings: &[Booking]) -> Solution {
        self.search(bookings).solution
    }
}
