//! Monte Carlo pricing engine for European options.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Seed assignment (via [`ScenarioSeedSet`])
//! 2. Terminal price simulation (via [`PathGenerator`])
//! 3. Payoff evaluation and discounting
//! 4. Aggregation on a [`ScenarioExecutor`]
//! 5. Delta via bump-and-revalue
//!
//! The price is computed eagerly in [`MonteCarloPricer::new`]; construction
//! blocks for the whole simulation.

use std::time::Duration;

use pricer_core::math::central_spot_delta;
use pricer_core::traits::PricingModel;
use pricer_core::types::option::check_spot;
use pricer_core::types::{ContractSpec, MarketInputs, PricingError, PricingResult};
use tracing::debug;

use super::config::MonteCarloConfig;
use super::paths::{GbmParams, PathGenerator};
use super::seeds::ScenarioSeedSet;
use crate::parallel::{ScenarioAccumulator, ScenarioExecutor};

/// Monte Carlo European option pricer.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::{ContractSpec, MarketInputs};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_scenarios(20_000)
///     .n_steps(1)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0);
/// let pricer = MonteCarloPricer::new(market, ContractSpec::call(100.0, 1.0), config).unwrap();
///
/// // Within four standard errors of the closed-form 10.4506
/// assert!((pricer.price() - 10.4506).abs() < 4.0 * pricer.std_error());
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    market: MarketInputs,
    contract: ContractSpec,
    config: MonteCarloConfig,
    executor: ScenarioExecutor,
    result: PricingResult,
    std_error: f64,
}

impl MonteCarloPricer {
    /// Validates the inputs, runs the simulation and caches the price.
    ///
    /// Parallel configurations build a worker pool here; bumped copies made
    /// by [`PricingModel::reprice_with_spot`] reuse it.
    ///
    /// # Errors
    ///
    /// - Any `PricingError` raised by input validation
    /// - `PricingError::InvalidConfig` if the worker pool cannot be built
    pub fn new(
        market: MarketInputs,
        contract: ContractSpec,
        config: MonteCarloConfig,
    ) -> Result<Self, PricingError> {
        market.validate()?;
        contract.validate()?;
        config.validate()?;
        let executor = ScenarioExecutor::new(config.parallel(), config.n_workers())?;
        Self::simulate(market, contract, config, executor)
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Market inputs used for pricing.
    #[inline]
    pub fn market(&self) -> &MarketInputs {
        &self.market
    }

    /// Contract terms.
    #[inline]
    pub fn contract(&self) -> &ContractSpec {
        &self.contract
    }

    /// Standard error of the price estimate (quantity-scaled).
    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std_error
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    fn simulate(
        market: MarketInputs,
        contract: ContractSpec,
        config: MonteCarloConfig,
        executor: ScenarioExecutor,
    ) -> Result<Self, PricingError> {
        // Risk-neutral drift with continuous dividend yield
        let gbm = GbmParams::new(
            market.spot,
            market.rate - market.dividend_rate,
            market.volatility,
            contract.expiry,
        );
        let generator = PathGenerator::new(gbm, config.n_steps())?;
        let seeds = ScenarioSeedSet::new(config.seed(), config.n_scenarios());
        let discount_factor = (-market.rate * contract.expiry).exp();
        let quantity = config.quantity();

        let mut stats = ScenarioAccumulator::default();
        let result = PricingResult::timed(|| {
            stats = executor.run(&seeds, |seed| {
                discount_factor * contract.payoff(generator.terminal_price(seed))
            });
            quantity * stats.mean()
        });
        let std_error = quantity.abs() * stats.std_error();

        debug!(
            model = "monte_carlo",
            n_scenarios = config.n_scenarios(),
            n_steps = config.n_steps(),
            parallel = executor.is_parallel(),
            price = result.price,
            std_error,
            elapsed_ms = result.elapsed_ms(),
            "priced option"
        );

        Ok(Self {
            market,
            contract,
            config,
            executor,
            result,
            std_error,
        })
    }
}

impl PricingModel for MonteCarloPricer {
    #[inline]
    fn price(&self) -> f64 {
        self.result.price
    }

    /// Centred finite-difference delta from two full re-simulations.
    ///
    /// Both bumped runs replay the configured seed set.
    fn delta(&self, pct_shift: f64) -> Result<f64, PricingError> {
        central_spot_delta(self.market.spot, pct_shift, |spot| {
            Ok(self.reprice_with_spot(spot)?.price())
        })
    }

    fn reprice_with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        check_spot(spot)?;
        Self::simulate(
            self.market.with_spot(spot),
            self.contract,
            self.config.clone(),
            self.executor.clone(),
        )
    }

    #[inline]
    fn compute_time(&self) -> Duration {
        self.result.elapsed
    }
}
