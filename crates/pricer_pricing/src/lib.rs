//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the stochastic pricing engine in the layered
//! architecture:
//! - Seeded Geometric Brownian Motion path generation
//! - Monte Carlo European option pricing with standard errors
//! - Sequential or rayon-parallel scenario aggregation
//!
//! It depends only on Layer 1 (`pricer_core`) for market/contract types and
//! the [`PricingModel`](pricer_core::traits::PricingModel) contract, so its
//! results can be cross-checked against the deterministic models in
//! `pricer_models`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::traits::PricingModel;
//! use pricer_core::types::{ContractSpec, MarketInputs};
//! use pricer_pricing::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_scenarios(10_000)
//!     .n_steps(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(
//!     MarketInputs::new(100.0, 0.05, 0.2, 0.0),
//!     ContractSpec::call(100.0, 1.0),
//!     config,
//! )
//! .unwrap();
//!
//! assert!(pricer.price() > 9.5 && pricer.price() < 11.5);
//! ```
//!
//! ## Known Constraints
//!
//! - Constructors block until the simulation has finished
//! - No cancellation: a started run always completes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation
pub mod rng;

// Monte Carlo pricer, configuration and path generation
pub mod mc;

// Sequential and pooled scenario execution
pub mod parallel;

// Re-export commonly used items for convenience
pub use mc::{ConfigError, GbmParams, MonteCarloConfig, MonteCarloPricer, PathGenerator};
pub use parallel::ScenarioExecutor;
