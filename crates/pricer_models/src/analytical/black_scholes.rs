//! Black-Scholes-Merton pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With q = 0 these reduce to the textbook Black-Scholes formulas.

use std::time::Duration;

use pricer_core::traits::PricingModel;
use pricer_core::types::{ContractSpec, MarketInputs, OptionType, PricingError, PricingResult};
use tracing::debug;

use super::distributions::norm_cdf;

/// Closed-form European option pricer.
///
/// The price is computed once in [`BlackScholesPricer::new`] and cached.
/// Delta is analytical.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::{ContractSpec, MarketInputs};
/// use pricer_models::analytical::BlackScholesPricer;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0);
/// let call = BlackScholesPricer::new(market, ContractSpec::call(100.0, 1.0), 1.0).unwrap();
/// let put = BlackScholesPricer::new(market, ContractSpec::put(100.0, 1.0), 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call.price() - put.price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholesPricer {
    market: MarketInputs,
    contract: ContractSpec,
    quantity: f64,
    result: PricingResult,
}

impl BlackScholesPricer {
    /// Validates the inputs and prices the option.
    ///
    /// # Arguments
    /// * `market` - Spot, rate, volatility and dividend rate
    /// * `contract` - Strike, expiry and option type
    /// * `quantity` - Position size multiplier applied to the price
    ///
    /// # Errors
    /// - Any `PricingError` raised by `MarketInputs::validate` or
    ///   `ContractSpec::validate`
    /// - `PricingError::InvalidInput` if quantity is not finite
    pub fn new(
        market: MarketInputs,
        contract: ContractSpec,
        quantity: f64,
    ) -> Result<Self, PricingError> {
        market.validate()?;
        contract.validate()?;
        if !quantity.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "quantity must be finite, got {}",
                quantity
            )));
        }

        let result = PricingResult::timed(|| quantity * bsm_price(&market, &contract));
        debug!(
            model = "closed_form",
            option_type = %contract.option_type,
            price = result.price,
            elapsed_ms = result.elapsed_ms(),
            "priced option"
        );

        Ok(Self {
            market,
            contract,
            quantity,
            result,
        })
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

    /// Position size multiplier.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// The d₁ term.
    #[inline]
    pub fn d1(&self) -> f64 {
        d1(&self.market, &self.contract)
    }

    /// The d₂ term: d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.market.volatility * self.contract.expiry.sqrt()
    }

    /// Analytical delta per unit of the underlying.
    ///
    /// - Call: e^(-qT)·N(d₁)
    /// - Put: -e^(-qT)·N(-d₁)
    ///
    /// The quantity multiplier is not applied.
    pub fn analytical_delta(&self) -> f64 {
        let carry = (-self.market.dividend_rate * self.contract.expiry).exp();
        let d1 = self.d1();
        match self.contract.option_type {
            OptionType::Call => carry * norm_cdf(d1),
            OptionType::Put => -carry * norm_cdf(-d1),
        }
    }
}

impl PricingModel for BlackScholesPricer {
    #[inline]
    fn price(&self) -> f64 {
        self.result.price
    }

    /// Analytical delta; `pct_shift` is ignored.
    fn delta(&self, _pct_shift: f64) -> Result<f64, PricingError> {
        Ok(self.analytical_delta())
    }

    fn reprice_with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(self.market.with_spot(spot), self.contract, self.quantity)
    }

    #[inline]
    fn compute_time(&self) -> Duration {
        self.result.elapsed
    }
}

fn d1(market: &MarketInputs, contract: &ContractSpec) -> f64 {
    let vol_sqrt_t = market.volatility * contract.expiry.sqrt();
    ((market.spot / contract.strike).ln()
        + (market.rate - market.dividend_rate + 0.5 * market.volatility * market.volatility)
            * contract.expiry)
        / vol_sqrt_t
}

/// Unit price (quantity 1).
fn bsm_price(market: &MarketInputs, contract: &ContractSpec) -> f64 {
    let t = contract.expiry;
    let d1 = d1(market, contract);
    let d2 = d1 - market.volatility * t.sqrt();
    let forward_spot = market.spot * (-market.dividend_rate * t).exp();
    let pv_strike = contract.strike * (-market.rate * t).exp();

    match contract.option_type {
        OptionType::Call => forward_spot * norm_cdf(d1) - pv_strike * norm_cdf(d2),
        OptionType::Put => pv_strike * norm_cdf(-d2) - forward_spot * norm_cdf(-d1),
    }
}
