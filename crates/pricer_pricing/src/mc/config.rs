//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for Monte Carlo
//! pricing runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Maximum number of simulated scenarios allowed.
pub const MAX_SCENARIOS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_scenarios(10_000)
///     .n_steps(252)
///     .seed(42)
///     .parallel(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_scenarios(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonteCarloConfig {
    /// Number of simulated scenarios (one path per seed).
    n_scenarios: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// First seed of the scenario seed set.
    seed: u64,
    /// Evaluate scenarios on the worker pool.
    parallel: bool,
    /// Position size multiplier applied to the price.
    quantity: f64,
    /// Worker count override; defaults to the number of logical CPUs.
    n_workers: Option<usize>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulated scenarios.
    #[inline]
    pub fn n_scenarios(&self) -> usize {
        self.n_scenarios
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the first seed of the scenario seed set.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns `true` if scenarios run on the worker pool.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the position size multiplier.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the worker count override, if any.
    #[inline]
    pub fn n_workers(&self) -> Option<usize> {
        self.n_workers
    }

    /// Returns a copy with execution mode switched.
    ///
    /// Switching mode never changes which path a scenario draws.
    #[inline]
    pub fn with_parallel(&self, parallel: bool) -> Self {
        Self {
            parallel,
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_scenarios` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 100,000
    /// - `quantity` is not finite
    /// - `n_workers` is `Some(0)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_scenarios == 0 || self.n_scenarios > MAX_SCENARIOS {
            return Err(ConfigError::InvalidScenarioCount(self.n_scenarios));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if !self.quantity.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "quantity",
                value: format!("must be finite, got {}", self.quantity),
            });
        }
        if self.n_workers == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "n_workers",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// `n_scenarios` and `n_steps` are required. The seed defaults to 0, the
/// quantity to 1 and execution to sequential.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_scenarios: Option<usize>,
    n_steps: Option<usize>,
    seed: u64,
    parallel: bool,
    quantity: Option<f64>,
    n_workers: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of scenarios.
    ///
    /// # Arguments
    ///
    /// * `n_scenarios` - Number of scenarios in [1, 10_000_000]
    #[inline]
    pub fn n_scenarios(mut self, n_scenarios: usize) -> Self {
        self.n_scenarios = Some(n_scenarios);
        self
    }

    /// Sets the number of time steps per path.
    ///
    /// # Arguments
    ///
    /// * `n_steps` - Number of steps in [1, 100_000]
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the first seed of the scenario seed set.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Selects parallel or sequential execution.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the position size multiplier.
    #[inline]
    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Overrides the worker pool size.
    #[inline]
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_scenarios` not set or invalid
    /// - `n_steps` not set or invalid
    /// - `quantity` or `n_workers` invalid
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_scenarios = self.n_scenarios.ok_or(ConfigError::InvalidParameter {
            name: "n_scenarios",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_scenarios,
            n_steps,
            seed: self.seed,
            parallel: self.parallel,
            quantity: self.quantity.unwrap_or(1.0),
            n_workers: self.n_workers,
        };

        config.validate()?;
        Ok(config)
    }
}
