//! # pricer_core: Foundation Layer for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer shared by every pricing model:
//! - Market and contract inputs: `MarketInputs`, `ContractSpec`, `OptionType` (`types`)
//! - Error taxonomy: `PricingError` (`types::error`)
//! - The uniform `PricingModel` contract (`traits`)
//! - Bump-and-reprice finite differences (`math::finite_difference`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates and only minimal
//! external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ContractSpec, MarketInputs, OptionType};
//!
//! let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0);
//! market.validate().unwrap();
//!
//! let contract = ContractSpec::new(100.0, 1.0, OptionType::Call);
//! assert_eq!(contract.payoff(110.0), 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`, `MarketInputs` and `ContractSpec`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
