//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Rejected inputs and configurations across all pricing models

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant describes an input the caller can correct and retry with.
/// Pricers that return one of these leave their previously computed state
/// untouched.
///
/// # Variants
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidDividendRate`: Negative or non-finite dividend rate
/// - `InvalidSpot`: Negative or non-finite spot price
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidStrike`: Negative or non-finite strike
/// - `InvalidExpiry`: Non-positive or non-finite time to expiry
/// - `InvalidTimePoints`: Lattice size outside the supported range
/// - `ZeroShift`: Finite-difference delta requested with a zero bump
/// - `InvalidInput`: Any other invalid parameter
/// - `InvalidConfig`: Model configuration rejected (e.g. Monte Carlo settings)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidVolatility { volatility: -0.2 };
/// assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2 (must be non-negative)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Invalid volatility (negative or non-finite).
    #[error("Invalid volatility: σ = {volatility} (must be non-negative)")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Invalid dividend rate (negative or non-finite).
    #[error("Invalid dividend rate: q = {rate} (must be non-negative)")]
    InvalidDividendRate {
        /// The rejected dividend rate
        rate: f64,
    },

    /// Invalid spot price (negative or non-finite).
    #[error("Invalid spot price: S = {spot} (must be non-negative)")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Invalid risk-free rate (non-finite).
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Invalid strike (negative or non-finite).
    #[error("Invalid strike: K = {strike} (must be non-negative)")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Invalid time to expiry (non-positive or non-finite).
    #[error("Invalid expiry: T = {expiry} (must be positive)")]
    InvalidExpiry {
        /// The rejected expiry in years
        expiry: f64,
    },

    /// Lattice time point count outside [2, 10_000].
    #[error("Invalid number of time points: {points} (must be in range [2, 10_000])")]
    InvalidTimePoints {
        /// The rejected number of time points
        points: usize,
    },

    /// Finite-difference delta with a zero relative shift.
    #[error("Non-zero price change required to compute delta")]
    ZeroShift,

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
