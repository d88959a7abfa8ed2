//! Market and contract inputs shared by all pricing models.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Put or call.
///
/// A closed two-variant tag: every payoff match is exhaustive, so there is no
/// "unknown option type" state to fall back from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Undiscounted exercise value at the given underlying price.
    ///
    /// - Call: `max(S − K, 0)`
    /// - Put: `max(K − S, 0)`
    ///
    /// NaN inputs produce a NaN payoff.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(105.0, 100.0), 5.0);
    /// assert_eq!(OptionType::Put.payoff(105.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, underlying: f64, strike: f64) -> f64 {
        let intrinsic = match self {
            OptionType::Call => underlying - strike,
            OptionType::Put => strike - underlying,
        };
        // f64::max would swallow a NaN intrinsic value
        if intrinsic.is_nan() {
            f64::NAN
        } else {
            intrinsic.max(0.0)
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl std::str::FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidInput(format!(
                "Unknown option type: {}. Supported: call, put",
                other
            ))),
        }
    }
}

/// Market observables for a single underlying.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketInputs;
///
/// let market = MarketInputs {
///     spot: 100.0,
///     rate: 0.05,
///     volatility: 0.2,
///     dividend_rate: 0.0,
/// };
/// assert!(market.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketInputs {
    /// Spot price of the underlying (S).
    pub spot: f64,
    /// Continuously compounded risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Continuous dividend / carry rate (q), annualised.
    pub dividend_rate: f64,
}

impl MarketInputs {
    /// Creates new market inputs without validation.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, dividend_rate: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            dividend_rate,
        }
    }

    /// Returns a copy with the spot replaced.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Validates the inputs.
    ///
    /// # Errors
    /// - `InvalidSpot` if spot is negative or non-finite
    /// - `InvalidRate` if rate is non-finite
    /// - `InvalidVolatility` if volatility is negative or non-finite
    /// - `InvalidDividendRate` if dividend rate is negative or non-finite
    pub fn validate(&self) -> Result<(), PricingError> {
        check_spot(self.spot)?;
        check_rate(self.rate)?;
        check_volatility(self.volatility)?;
        check_dividend_rate(self.dividend_rate)?;
        Ok(())
    }
}

impl Default for MarketInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            dividend_rate: 0.0,
        }
    }
}

/// Contract terms of a European option.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContractSpec {
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiry as a year fraction (T > 0).
    pub expiry: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl ContractSpec {
    /// Creates a new contract without validation.
    #[inline]
    pub fn new(strike: f64, expiry: f64, option_type: OptionType) -> Self {
        Self {
            strike,
            expiry,
            option_type,
        }
    }

    /// Call with the given strike and expiry.
    #[inline]
    pub fn call(strike: f64, expiry: f64) -> Self {
        Self::new(strike, expiry, OptionType::Call)
    }

    /// Put with the given strike and expiry.
    #[inline]
    pub fn put(strike: f64, expiry: f64) -> Self {
        Self::new(strike, expiry, OptionType::Put)
    }

    /// Exercise value at the given underlying price.
    #[inline]
    pub fn payoff(&self, underlying: f64) -> f64 {
        self.option_type.payoff(underlying, self.strike)
    }

    /// Validates the contract.
    ///
    /// # Errors
    /// - `InvalidStrike` if strike is negative or non-finite
    /// - `InvalidExpiry` if expiry is not strictly positive and finite
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.strike >= 0.0 && self.strike.is_finite()) {
            return Err(PricingError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !(self.expiry > 0.0 && self.expiry.is_finite()) {
            return Err(PricingError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        Ok(())
    }
}

/// Rejects a negative or non-finite spot.
#[inline]
pub fn check_spot(spot: f64) -> Result<(), PricingError> {
    if spot >= 0.0 && spot.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidSpot { spot })
    }
}

/// Rejects a non-finite rate.
#[inline]
pub fn check_rate(rate: f64) -> Result<(), PricingError> {
    if rate.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidRate { rate })
    }
}

/// Rejects a negative or non-finite volatility.
#[inline]
pub fn check_volatility(volatility: f64) -> Result<(), PricingError> {
    if volatility >= 0.0 && volatility.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidVolatility { volatility })
    }
}

/// Rejects a negative or non-finite dividend rate.
#[inline]
pub fn check_dividend_rate(rate: f64) -> Result<(), PricingError> {
    if rate >= 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidDividendRate { rate })
    }
}
