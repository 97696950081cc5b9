//! Core domain types for the Relay booking optimiser.
//!
//! A [`Booking`] is a directed move between two named locations. Solvers
//! reorder a set of bookings so that as many consecutive pairs as possible
//! chain end-to-start, and report the remaining breaks as relocations in a
//! [`Solution`].
//!
//! This crate holds the shared pieces every solver depends on:
//!
//! - the data model ([`Booking`], [`Solution`]),
//! - the relocation scorer ([`count_relocations`]),
//! - the [`StartIndex`] used to find candidate continuations during search,
//! - the [`Solver`] trait implemented by each strategy.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod booking;
pub mod index;
pub mod scorer;
pub mod solution;
pub mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use booking::{Booking, BookingSetError, check_unique_ids};
pub use index::{LocationId, Remaining, StartIndex};
pub use scorer::{count_relocations, relocations_in};
pub use solution::Solution;
pub use solver::Solver;
