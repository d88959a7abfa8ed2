//! Cox-Ross-Rubinstein binomial tree pricer for European options.
//!
//! ## Parameters
//!
//! For N time points (N - 1 steps) over expiry T:
//! - Δt = T / (N - 1)
//! - u = exp(σ√Δt), d = 1/u
//! - p = (exp((r - q)Δt) - d) / (u - d)
//! - discount = exp(-rΔt)
//!
//! The forward pass projects the underlying from the root, the backward pass
//! discounts terminal payoffs back to node (0, 0), whose value is the price.

use std::time::Duration;

use pricer_core::math::central_spot_delta;
use pricer_core::traits::PricingModel;
use pricer_core::types::option::{check_dividend_rate, check_rate, check_spot, check_volatility};
use pricer_core::types::{ContractSpec, MarketInputs, PricingError, PricingResult};
use tracing::debug;

use super::node::{Lattice, MAX_TIME_POINTS};

/// Per-step tree parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
struct StepParams {
    up: f64,
    down: f64,
    prob_up: f64,
    discount: f64,
}

impl StepParams {
    fn new(market: &MarketInputs, expiry: f64, n_time_points: usize) -> Self {
        let dt = expiry / (n_time_points as f64 - 1.0);
        let up = (market.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        // Zero volatility gives up == down and a NaN probability
        let prob_up = (((market.rate - market.dividend_rate) * dt).exp() - down) / (up - down);
        let discount = (-market.rate * dt).exp();
        Self {
            up,
            down,
            prob_up,
            discount,
        }
    }
}

/// Binomial lattice pricer.
///
/// Owns its (N × N) [`Lattice`] exclusively. The tree is built and
/// backward-induced in [`BinomialTreePricer::new`] (blocking) and rebuilt in
/// full by the `reset_*` mutators. A rejected reset leaves the previous grid
/// and price in place.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::{ContractSpec, MarketInputs};
/// use pricer_models::lattice::BinomialTreePricer;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0);
/// let mut tree = BinomialTreePricer::new(market, ContractSpec::call(100.0, 1.0), 500).unwrap();
/// assert!((tree.price() - 10.45).abs() < 0.1);
///
/// // A rejected reset keeps the old price
/// let before = tree.price();
/// assert!(tree.reset_volatility(-0.1).is_err());
/// assert_eq!(tree.price(), before);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTreePricer {
    market: MarketInputs,
    contract: ContractSpec,
    n_time_points: usize,
    lattice: Lattice,
    result: PricingResult,
}

impl BinomialTreePricer {
    /// Builds and prices the tree.
    ///
    /// # Arguments
    /// * `market` - Spot, rate, volatility and dividend rate
    /// * `contract` - Strike, expiry and option type
    /// * `n_time_points` - Number of time points N, including today, in
    ///   [2, `MAX_TIME_POINTS`]
    ///
    /// # Errors
    /// - Any `PricingError` raised by input validation
    /// - `PricingError::InvalidTimePoints` if `n_time_points` is below 2,
    ///   above [`MAX_TIME_POINTS`], or the N × N grid is not addressable
    pub fn new(
        market: MarketInputs,
        contract: ContractSpec,
        n_time_points: usize,
    ) -> Result<Self, PricingError> {
        market.validate()?;
        contract.validate()?;
        if !(2..=MAX_TIME_POINTS).contains(&n_time_points)
            || n_time_points.checked_mul(n_time_points).is_none()
        {
            return Err(PricingError::InvalidTimePoints {
                points: n_time_points,
            });
        }

        let (lattice, result) = build(&market, &contract, n_time_points);
        Ok(Self {
            market,
            contract,
            n_time_points,
            lattice,
            result,
        })
    }

    /// Number of time points N.
    #[inline]
    pub fn n_time_points(&self) -> usize {
        self.n_time_points
    }

    /// Current market inputs.
    #[inline]
    pub fn market(&self) -> &MarketInputs {
        &self.market
    }

    /// Contract terms.
    #[inline]
    pub fn contract(&self) -> &ContractSpec {
        &self.contract
    }

    /// Node `(i, j)`: `i` up-moves after `j` steps. `None` for `i > j` or
    /// `j >= N`.
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> Option<&super::LatticeNode> {
        self.lattice.node(i, j)
    }

    /// Read-only view of the whole grid.
    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Resets the spot and returns the recomputed price.
    ///
    /// # Errors
    /// `PricingError::InvalidSpot` if `spot` is negative or non-finite.
    pub fn reset_spot(&mut self, spot: f64) -> Result<f64, PricingError> {
        check_spot(spot)?;
        self.apply(MarketInputs {
            spot,
            ..self.market
        })
    }

    /// Resets the risk-free rate and returns the recomputed price.
    ///
    /// # Errors
    /// `PricingError::InvalidRate` if `rate` is non-finite.
    pub fn reset_rate(&mut self, rate: f64) -> Result<f64, PricingError> {
        check_rate(rate)?;
        self.apply(MarketInputs {
            rate,
            ..self.market
        })
    }

    /// Resets the dividend rate and returns the recomputed price.
    ///
    /// # Errors
    /// `PricingError::InvalidDividendRate` if `dividend_rate` is negative or
    /// non-finite.
    pub fn reset_dividend_rate(&mut self, dividend_rate: f64) -> Result<f64, PricingError> {
        check_dividend_rate(dividend_rate)?;
        self.apply(MarketInputs {
            dividend_rate,
            ..self.market
        })
    }

    /// Resets the volatility and returns the recomputed price.
    ///
    /// # Errors
    /// `PricingError::InvalidVolatility` if `volatility` is negative or
    /// non-finite.
    pub fn reset_volatility(&mut self, volatility: f64) -> Result<f64, PricingError> {
        check_volatility(volatility)?;
        self.apply(MarketInputs {
            volatility,
            ..self.market
        })
    }

    /// Swaps in a tree built for `market`, unless nothing changed.
    fn apply(&mut self, market: MarketInputs) -> Result<f64, PricingError> {
        if market == self.market {
            return Ok(self.result.price);
        }
        let (lattice, result) = build(&market, &self.contract, self.n_time_points);
        self.market = market;
        self.lattice = lattice;
        self.result = result;
        Ok(self.result.price)
    }
}

impl PricingModel for BinomialTreePricer {
    #[inline]
    fn price(&self) -> f64 {
        self.result.price
    }

    /// Centred finite-difference delta from two transient trees.
    fn delta(&self, pct_shift: f64) -> Result<f64, PricingError> {
        central_spot_delta(self.market.spot, pct_shift, |spot| {
            Ok(self.reprice_with_spot(spot)?.price())
        })
    }

    fn reprice_with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        check_spot(spot)?;
        let market = self.market.with_spot(spot);
        let (lattice, result) = build(&market, &self.contract, self.n_time_points);
        Ok(Self {
            market,
            contract: self.contract,
            n_time_points: self.n_time_points,
            lattice,
            result,
        })
    }

    #[inline]
    fn compute_time(&self) -> Duration {
        self.result.elapsed
    }
}

/// Builds a fresh lattice for validated inputs.
fn build(market: &MarketInputs, contract: &ContractSpec, n: usize) -> (Lattice, PricingResult) {
    let mut lattice = Lattice::new(n);
    let result = PricingResult::timed(|| {
        let params = StepParams::new(market, contract.expiry, n);
        project_prices(&mut lattice, market.spot, &params);
        backward_induction(&mut lattice, contract, &params);
        lattice.at(0, 0).payoff
    });
    debug!(
        model = "lattice",
        n_time_points = n,
        option_type = %contract.option_type,
        price = result.price,
        elapsed_ms = result.elapsed_ms(),
        "priced option"
    );
    (lattice, result)
}

fn project_prices(lattice: &mut Lattice, spot: f64, params: &StepParams) {
    lattice.at_mut(0, 0).underlying = spot;
    for j in 1..lattice.size() {
        for i in 0..=j {
            let projected = if i < j {
                params.down * lattice.at(i, j - 1).underlying
            } else {
                params.up * lattice.at(i - 1, j - 1).underlying
            };
            lattice.at_mut(i, j).underlying = projected;
        }
    }
}

fn backward_induction(lattice: &mut Lattice, contract: &ContractSpec, params: &StepParams) {
    let last = lattice.size() - 1;
    for i in 0..=last {
        let node = lattice.at_mut(i, last);
        node.payoff = contract.payoff(node.underlying);
    }
    for j in (0..last).rev() {
        for i in 0..=j {
            let value = params.discount
                * (params.prob_up * lattice.at(i + 1, j + 1).payoff
                    + (1.0 - params.prob_up) * lattice.at(i, j + 1).payoff);
            lattice.at_mut(i, j).payoff = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholesPricer;
    use approx::assert_relative_eq;
    use pricer_core::traits::DEFAULT_PCT_SHIFT;

    fn create_test_tree(n: usize) -> BinomialTreePricer {
        let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0);
        BinomialTreePricer::new(market, ContractSpec::call(100.0, 1.0), n).unwrap()
    }

    #[test]
    fn test_four_step_tree_matches_hand_derivation() {
        let market = MarketInputs::new(100.0, 0.0, 0.2, 0.0);
        let tree = BinomialTreePricer::new(market, ContractSpec::call(100.0, 0.5), 5).unwrap();

        // r = 0: no discounting, u = exp(0.2 * sqrt(0.125)), p = (1 - d) / (u - d)
        let u = (0.2 * 0.125_f64.sqrt()).exp();
        let d = 1.0 / u;
        let p = (1.0 - d) / (u - d);
        // Only the four-up and three-up terminal nodes finish in the money
        let hand = p.powi(4) * (100.0 * u.powi(4) - 100.0)
            + 4.0 * p.powi(3) * (1.0 - p) * (100.0 * u * u - 100.0);

        assert_relative_eq!(tree.price(), hand, epsilon = 1e-12);
        assert_relative_eq!(tree.price(), 5.298885305418227, epsilon = 1e-10);
    }

    #[test]
    fn test_forward_pass_recombines() {
        let tree = create_test_tree(4);
        let root = tree.node(0, 0).unwrap().underlying;
        let up_down = tree.node(1, 2).unwrap().underlying;
        assert_relative_eq!(root, 100.0);
        assert_relative_eq!(up_down, root, epsilon = 1e-12);
        assert!(tree.node(3, 2).is_none());
        assert_eq!(tree.lattice().layer(3).count(), 4);
    }

    #[test]
    fn test_terminal_layer_holds_payoffs() {
        let tree = create_test_tree(6);
        for node in tree.lattice().layer(5) {
            assert_eq!(node.payoff, (node.underlying - 100.0).max(0.0));
        }
    }

    #[test]
    fn test_converges_to_closed_form() {
        let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0);
        for contract in [ContractSpec::call(100.0, 1.0), ContractSpec::put(100.0, 1.0)] {
            let tree = BinomialTreePricer::new(market, contract, 1000).unwrap();
            let bs = BlackScholesPricer::new(market, contract, 1.0).unwrap();
            assert_relative_eq!(tree.price(), bs.price(), max_relative = 0.01);
        }
    }

    #[test]
    fn test_delta_close_to_analytical() {
        let tree = create_test_tree(1000);
        let delta = tree.delta(DEFAULT_PCT_SHIFT).unwrap();
        assert_relative_eq!(delta, 0.6368306511756191, max_relative = 0.02);
    }

    #[test]
    fn test_zero_shift_delta_rejected() {
        let tree = create_test_tree(50);
        assert_eq!(tree.delta(0.0), Err(PricingError::ZeroShift));
        assert!(tree.delta(0.01).is_ok());
    }

    #[test]
    fn test_negative_volatility_reset_leaves_state() {
        let mut tree = create_test_tree(100);
        let before = tree.price();
        let grid_before = tree.lattice().clone();

        assert!(matches!(
            tree.reset_volatility(-0.2),
            Err(PricingError::InvalidVolatility { .. })
        ));
        assert_eq!(tree.price(), before);
        assert_eq!(tree.lattice(), &grid_before);
        assert_eq!(tree.market().volatility, 0.2);
    }

    #[test]
    fn test_negative_dividend_and_spot_resets_rejected() {
        let mut tree = create_test_tree(20);
        let before = tree.price();
        assert!(tree.reset_dividend_rate(-0.01).is_err());
        assert!(tree.reset_spot(-1.0).is_err());
        assert!(tree.reset_rate(f64::NAN).is_err());
        assert_eq!(tree.price(), before);
    }

    #[test]
    fn test_reset_matches_fresh_tree() {
        let mut tree = create_test_tree(200);
        let reset_price = tree.reset_volatility(0.3).unwrap();

        let market = MarketInputs::new(100.0, 0.05, 0.3, 0.0);
        let fresh = BinomialTreePricer::new(market, ContractSpec::call(100.0, 1.0), 200).unwrap();
        assert_eq!(reset_price, fresh.price());
        assert_eq!(tree.price(), fresh.price());
    }

    #[test]
    fn test_reset_same_value_is_noop() {
        let mut tree = create_test_tree(50);
        let elapsed = tree.compute_time();
        let price = tree.reset_rate(0.05).unwrap();
        assert_eq!(price, tree.price());
        assert_eq!(tree.compute_time(), elapsed);
    }

    #[test]
    fn test_resets_move_price_in_expected_direction() {
        let mut tree = create_test_tree(200);
        let base = tree.price();
        assert!(tree.reset_spot(110.0).unwrap() > base);
        tree.reset_spot(100.0).unwrap();
        assert!(tree.reset_dividend_rate(0.03).unwrap() < base);
        tree.reset_dividend_rate(0.0).unwrap();
        assert!(tree.reset_rate(0.08).unwrap() > base);
    }

    #[test]
    fn test_too_few_time_points() {
        let market = MarketInputs::default();
        assert_eq!(
            BinomialTreePricer::new(market, ContractSpec::call(100.0, 1.0), 1).unwrap_err(),
            PricingError::InvalidTimePoints { points: 1 }
        );
        assert!(BinomialTreePricer::new(market, ContractSpec::call(100.0, 1.0), 2).is_ok());
    }

    #[test]
    fn test_too_many_time_points() {
        let market = MarketInputs::default();
        let contract = ContractSpec::call(100.0, 1.0);
        for points in [MAX_TIME_POINTS + 1, (1usize << 32) + 1, usize::MAX] {
            assert_eq!(
                BinomialTreePricer::new(market, contract, points).unwrap_err(),
                PricingError::InvalidTimePoints { points }
            );
        }
    }

    #[test]
    fn test_zero_volatility_propagates_nan() {
        let market = MarketInputs::new(100.0, 0.05, 0.0, 0.0);
        let tree = BinomialTreePricer::new(market, ContractSpec::call(100.0, 1.0), 10).unwrap();
        assert!(tree.price().is_nan());
    }
}
