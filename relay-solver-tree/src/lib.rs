//! Branch-and-bound tree solver for Relay.
//!
//! This crate provides [`TreeSolver`], the default implementation of the
//! [`Solver`](relay_core::Solver) trait. It explores orderings of the bookings
//! depth-first, extending a partial sequence one booking at a time, and
//! abandons any branch whose relocation count already matches or exceeds the
//! best complete ordering found so far.
//!
//! Two rules keep the search practical and its output deterministic:
//!
//! - the free continuation (a booking starting where the previous one ended)
//!   is always tried first, which finds tight bounds early;
//! - among equally good orderings the first one discovered is kept.
//!
//! The search is exact unless the caller opts into a time limit through
//! [`TreeSolverConfig`]; [`SearchStats::exhausted`] reports whether the tree
//! was fully explored.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod search;
mod solver;
mod stats;

pub use solver::{TreeSolver, TreeSolverConfig};
pub use stats::{SearchOutcome, SearchStats};
