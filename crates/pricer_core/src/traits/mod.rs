//! Core traits shared by the pricing models.
//!
//! This module defines:
//! - The uniform pricing contract (`PricingModel` trait)
//!
//! Every model (closed-form, lattice, Monte Carlo) implements the same
//! contract so callers can cross-validate them against identical inputs.

pub mod pricing_model;

pub use pricing_model::{PricingModel, DEFAULT_PCT_SHIFT};
