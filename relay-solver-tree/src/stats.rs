//! Counters collected while the tree search runs.

use std::fmt;
use std::time::Duration;

use relay_core::Solution;

/// Statistics for one tree search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Search nodes entered, including the root.
    pub nodes_explored: u64,
    /// Nodes abandoned because they could not beat the incumbent.
    pub prunings_bound: u64,
    /// Times the incumbent was replaced by a strictly better ordering.
    pub solutions_found: u64,
    /// Longest partial sequence reached.
    pub max_depth: usize,
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
    /// `false` when a time limit stopped the search before the tree was
    /// fully explored; the solution is then the best found so far.
    pub exhausted: bool,
}

impl SearchStats {
    pub(crate) fn on_node_explored(&mut self, depth: usize) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) const fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    pub(crate) const fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} pruned={} improvements={} max_depth={} time={:?} exhausted={}",
            self.nodes_explored,
            self.prunings_bound,
            self.solutions_found,
            self.max_depth,
            self.solve_time,
            self.exhausted
        )
    }
}

/// Result of [`TreeSolver::search`](crate::TreeSolver::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best ordering found.
    pub solution: Solution,
    /// Counters describing how the search went.
    pub stats: SearchStats,
}
