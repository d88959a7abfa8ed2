//! Numerical helpers shared across pricing models.
//!
//! - [`finite_difference`]: Bump-and-reprice sensitivities

pub mod finite_difference;

pub use finite_difference::central_spot_delta;
