//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation.
//! They are raised before any simulation work begins.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Scenario count outside valid range [1, 10_000_000].
    #[error("Invalid scenario count {0}: must be in range [1, 10_000_000]")]
    InvalidScenarioCount(usize),

    /// Step count outside valid range [1, 100_000].
    #[error("Invalid step count {0}: must be in range [1, 100_000]")]
    InvalidStepCount(usize),

    /// Path length `n_steps + 1` is not representable.
    #[error("Too many steps in one simulation: {0}")]
    StepCountOverflow(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The worker thread pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidConfig(err.to_string())
    }
}
