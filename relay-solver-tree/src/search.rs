//! Depth-first branch-and-bound over booking orderings.
//!
//! The incumbent (best complete ordering so far) is owned by [`Search`] and
//! borrowed mutably by every frame, so a leaf found in one branch tightens
//! the bound for every branch explored after it.

use std::time::{Duration, Instant};

use relay_core::{Booking, Remaining, Solution, StartIndex};

use crate::solver::TreeSolverConfig;
use crate::stats::{SearchOutcome, SearchStats};

/// Relocation count passed to the root frame.
///
/// Placing the first booking always adds one (there is no previous end to
/// match), so starting at `-1` makes the first placement free.
const ROOT_RELOCATIONS: i64 = -1;

/// Bound used before any complete ordering has been found.
const UNBOUNDED: i64 = i64::MAX;

pub(crate) struct Search {
    path: Vec<usize>,
    best: Vec<usize>,
    best_relocations: i64,
    stats: SearchStats,
    deadline: Deadline,
}

impl Search {
    pub(crate) fn new(capacity: usize, config: &TreeSolverConfig) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            best: Vec::new(),
            best_relocations: UNBOUNDED,
            stats: SearchStats::default(),
            deadline: Deadline::new(config.time_limit, config.check_interval),
        }
    }

    pub(crate) fn run(mut self, bookings: &[Booking]) -> SearchOutcome {
        let index = StartIndex::new(bookings);
        log::debug!(
            "tree search over {} bookings and {} start locations",
            index.len(),
            index.location_count()
        );

        let started_at = Instant::now();
        self.traverse(&index, &index.full(), ROOT_RELOCATIONS);
        self.stats.solve_time = started_at.elapsed();
        self.stats.exhausted = !self.deadline.expired;

        let solution = if self.best_relocations == UNBOUNDED {
            // Only reachable when the deadline fired before the first leaf.
            log::warn!(
                "time limit reached before any complete ordering; returning input order"
            );
            Solution::scored(bookings.to_vec())
        } else {
            let ordered = self
                .best
                .iter()
                .filter_map(|&slot| index.booking(slot))
                .cloned()
                .collect();
            Solution::new(ordered, self.best_relocations)
        };

        log::debug!(
            "tree search found {} relocations ({})",
            solution.relocations,
            self.stats
        );
        SearchOutcome {
            solution,
            stats: self.stats,
        }
    }

    fn traverse(&mut self, index: &StartIndex<'_>, remaining: &Remaining, relocations: i64) {
        self.stats.on_node_explored(self.path.len());

        if relocations >= self.best_relocations {
            self.stats.on_pruning_bound();
            return;
        }

        if remaining.is_empty() {
            // The bound check above guarantees a strict improvement.
            self.best.clone_from(&self.path);
            self.best_relocations = relocations;
            self.stats.on_solution_found();
            log::trace!(
                "incumbent improved to {relocations} relocations after {} nodes",
                self.stats.nodes_explored
            );
            return;
        }

        if self.deadline.check() {
            return;
        }

        let last = self.path.last().and_then(|&slot| index.end_of(slot));
        let front = last.filter(|&location| remaining.has_location(location));
        let rest = index
            .locations()
            .filter(|&location| Some(location) != front && remaining.has_location(location));

        for location in front.into_iter().chain(rest) {
            let cost = if Some(location) == last {
                relocations
            } else {
                relocations.saturating_add(1)
            };
            for slot in index.remaining_at(remaining, location) {
                let next = index.without(remaining, slot);
                self.path.push(slot);
                self.traverse(index, &next, cost);
                self.path.pop();
                if self.deadline.expired {
                    return;
                }
            }
        }
    }
}

/// Optional wall-clock limit, sampled every `interval` nodes.
struct Deadline {
    limit: Option<Duration>,
    started_at: Instant,
    interval: u64,
    countdown: u64,
    expired: bool,
}

impl Deadline {
    fn new(limit: Option<Duration>, check_interval: u64) -> Self {
        let interval = check_interval.max(1);
        Self {
            limit,
            started_at: Instant::now(),
            interval,
            countdown: interval,
            expired: false,
        }
    }

    fn check(&mut self) -> bool {
        let Some(limit) = self.limit else {
            return false;
        };
        if self.expired {
            return true;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.countdown = self.interval;
            self.expired = self.started_at.elapsed() >= limit;
        }
        self.expired
    }
}
