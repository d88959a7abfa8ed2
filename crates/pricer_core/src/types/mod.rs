//! Core types for European option pricing.
//!
//! This module provides:
//! - `OptionType`: Call or put tag with its payoff
//! - `MarketInputs`: Spot, rate, volatility and dividend rate
//! - `ContractSpec`: Strike, expiry and option type
//! - `PricingResult`: Cached price with diagnostic compute time
//! - `PricingError`: Structured error handling

pub mod error;
pub mod option;
pub mod result;

pub use error::PricingError;
pub use option::{ContractSpec, MarketInputs, OptionType};
pub use result::PricingResult;
