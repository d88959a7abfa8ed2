//! Recombining binomial lattice for European options.
//!
//! This module provides:
//! - `LatticeNode` / `Lattice`: the (N × N) grid of projected underlying
//!   prices and backward-induced values
//! - `BinomialTreePricer`: Cox-Ross-Rubinstein pricer with all-or-nothing
//!   market resets and bump-and-reprice delta

pub mod binomial;
pub mod node;

pub use binomial::BinomialTreePricer;
pub use node::{Lattice, LatticeNode, MAX_TIME_POINTS};
