//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! using the exact log-space discretisation:
//!
//! ```text
//! S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! Each path is a pure function of the parameters and a seed: the generator
//! holds no mutable state, so concurrent calls with distinct seeds never
//! interfere.

use super::config::MAX_STEPS;
use super::error::ConfigError;
use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// Under the risk-neutral measure with continuous dividend yield q the
/// drift is μ = r - q.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     drift: 0.05,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
/// assert!(params.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift (μ) - annualised.
    pub drift: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            maturity,
        }
    }

    /// Returns `true` if all parameters are finite and non-negative where
    /// required.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot >= 0.0
            && self.spot.is_finite()
            && self.drift.is_finite()
            && self.volatility >= 0.0
            && self.volatility.is_finite()
            && self.maturity > 0.0
            && self.maturity.is_finite()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Seeded GBM path generator.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{GbmParams, PathGenerator};
///
/// let generator = PathGenerator::new(GbmParams::default(), 12).unwrap();
/// let path = generator.generate(42);
///
/// assert_eq!(path.len(), 13);
/// assert_eq!(path[0], 100.0);
/// assert_eq!(generator.generate(42), path);
/// assert_eq!(generator.terminal_price(42), path[12]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathGenerator {
    params: GbmParams,
    n_steps: usize,
    /// (μ - 0.5σ²)dt
    drift_dt: f64,
    /// σ√dt
    vol_sqrt_dt: f64,
}

impl PathGenerator {
    /// Creates a generator for paths of `n_steps` increments.
    ///
    /// # Errors
    ///
    /// - `ConfigError::StepCountOverflow` if `n_steps + 1` path points cannot
    ///   be represented
    /// - `ConfigError::InvalidStepCount` if `n_steps` is 0 or greater than
    ///   100,000
    /// - `ConfigError::InvalidParameter` if `params` fails
    ///   [`GbmParams::is_valid`]
    pub fn new(params: GbmParams, n_steps: usize) -> Result<Self, ConfigError> {
        if n_steps.checked_add(1).is_none() {
            return Err(ConfigError::StepCountOverflow(n_steps));
        }
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(n_steps));
        }
        if !params.is_valid() {
            return Err(ConfigError::InvalidParameter {
                name: "gbm_params",
                value: format!("{:?}", params),
            });
        }

        let dt = params.maturity / n_steps as f64;
        let drift_dt = (params.drift - 0.5 * params.volatility * params.volatility) * dt;
        let vol_sqrt_dt = params.volatility * dt.sqrt();

        Ok(Self {
            params,
            n_steps,
            drift_dt,
            vol_sqrt_dt,
        })
    }

    /// Returns the GBM parameters.
    #[inline]
    pub fn params(&self) -> &GbmParams {
        &self.params
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Generates the full path for `seed`: the spot followed by `n_steps`
    /// simulated prices.
    pub fn generate(&self, seed: u64) -> Vec<f64> {
        let mut rng = PricerRng::from_seed(seed);
        let mut path = Vec::with_capacity(self.n_steps + 1);
        let mut price = self.params.spot;
        path.push(price);
        for _ in 0..self.n_steps {
            price = self.step(price, rng.gen_normal());
            path.push(price);
        }
        path
    }

    /// Terminal price of the path for `seed`, without storing the path.
    ///
    /// Bit-identical to the last element of [`PathGenerator::generate`].
    pub fn terminal_price(&self, seed: u64) -> f64 {
        let mut rng = PricerRng::from_seed(seed);
        let mut price = self.params.spot;
        for _ in 0..self.n_steps {
            price = self.step(price, rng.gen_normal());
        }
        price
    }

    #[inline]
    fn step(&self, price: f64, z: f64) -> f64 {
        price * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_gbm_params_default() {
        let params = GbmParams::default();
        assert_eq!(params.spot, 100.0);
        assert_eq!(params.drift, 0.05);
        assert_eq!(params.volatility, 0.2);
        assert_eq!(params.maturity, 1.0);
        assert!(params.is_valid());
    }

    #[test]
    fn test_gbm_params_validation() {
        assert!(!GbmParams::new(-100.0, 0.05, 0.2, 1.0).is_valid());
        assert!(!GbmParams::new(100.0, 0.05, -0.2, 1.0).is_valid());
        assert!(!GbmParams::new(100.0, 0.05, 0.2, 0.0).is_valid());
        assert!(!GbmParams::new(100.0, f64::NAN, 0.2, 1.0).is_valid());
    }

    #[test]
    fn test_step_count_overflow() {
        let result = PathGenerator::new(GbmParams::default(), usize::MAX);
        assert_eq!(result, Err(ConfigError::StepCountOverflow(usize::MAX)));
    }

    #[test]
    fn test_step_count_out_of_range_rejected() {
        for n_steps in [0, MAX_STEPS + 1, usize::MAX / 2] {
            assert_eq!(
                PathGenerator::new(GbmParams::default(), n_steps),
                Err(ConfigError::InvalidStepCount(n_steps))
            );
        }
        assert!(PathGenerator::new(GbmParams::default(), MAX_STEPS).is_ok());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = GbmParams::new(100.0, 0.05, -0.2, 1.0);
        assert!(matches!(
            PathGenerator::new(params, 10),
            Err(ConfigError::InvalidParameter { name: "gbm_params", .. })
        ));
    }

    #[test]
    fn test_path_shape() {
        let generator = PathGenerator::new(GbmParams::default(), 50).unwrap();
        let path = generator.generate(1);
        assert_eq!(path.len(), 51);
        assert_eq!(path[0], 100.0);
        assert!(path.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_determinism() {
        let generator = PathGenerator::new(GbmParams::default(), 100).unwrap();
        assert_eq!(generator.generate(2024), generator.generate(2024));
    }

    #[test]
    fn test_seed_sensitivity() {
        let generator = PathGenerator::new(GbmParams::default(), 100).unwrap();
        assert_ne!(generator.generate(1), generator.generate(2));
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let params = GbmParams::new(100.0, 0.05, 0.0, 2.0);
        let generator = PathGenerator::new(params, 8).unwrap();
        assert_relative_eq!(
            generator.terminal_price(5),
            100.0 * (0.1_f64).exp(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_terminal_mean_matches_forward() {
        let generator = PathGenerator::new(GbmParams::default(), 1).unwrap();
        let n = 50_000;
        let mean = (0..n).map(|s| generator.terminal_price(s)).sum::<f64>() / n as f64;
        // E[S_T] = S0 * exp(μT); std error of the mean is about 0.1
        assert_relative_eq!(mean, 100.0 * 0.05_f64.exp(), max_relative = 0.005);
    }

    proptest! {
        #[test]
        fn prop_terminal_matches_generate(seed in any::<u64>(), n_steps in 1usize..64) {
            let generator = PathGenerator::new(GbmParams::default(), n_steps).unwrap();
            let path = generator.generate(seed);
            prop_assert_eq!(path.len(), n_steps + 1);
            prop_assert_eq!(generator.terminal_price(seed).to_bits(), path[n_steps].to_bits());
        }

        #[test]
        fn prop_paths_stay_positive(
            seed in any::<u64>(),
            vol in 0.0..1.5_f64,
            drift in -0.1..0.2_f64,
        ) {
            let generator = PathGenerator::new(GbmParams::new(50.0, drift, vol, 1.0), 20).unwrap();
            prop_assert!(generator.generate(seed).iter().all(|&s| s > 0.0 && s.is_finite()));
        }
    }
}
