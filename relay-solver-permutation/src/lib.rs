//! Exhaustive permutation solver for Relay.
//!
//! [`PermutationSolver`] scores every ordering of the input and keeps the
//! first one with the fewest relocations. It costs `O(n! * n)` and exists as a
//! reference for checking faster solvers on small inputs.

#![forbid(unsafe_code)]

mod permutations;
mod solver;

pub use solver::PermutationSolver;
