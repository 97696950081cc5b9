//! Facade crate for the Relay booking relocation minimiser.
//!
//! This crate re-exports the core domain types and exposes the solver
//! implementations behind feature flags.

#![forbid(unsafe_code)]

pub use relay_core::{
    Booking, BookingSetError, LocationId, Remaining, Solution, Solver, StartIndex,
    check_unique_ids, count_relocations, relocations_in,
};

#[cfg(feature = "solver-tree")]
pub use relay_solver_tree::{SearchOutcome, SearchStats, TreeSolver, TreeSolverConfig};

#[cfg(feature = "solver-permutation")]
pub use relay_solver_permutation::PermutationSolver;
