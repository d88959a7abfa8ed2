//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton price with continuous dividend yield
//! - Analytical delta
//! - Standard normal CDF

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::BlackScholesPricer;
pub use distributions::norm_cdf;
