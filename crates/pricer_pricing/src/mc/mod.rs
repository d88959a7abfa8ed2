//! Monte Carlo pricing for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (scenario count, steps, seed, mode, quantity)
//! ├── ScenarioSeedSet   (init_seed + i for scenario i)
//! ├── PathGenerator     (seeded GBM paths)
//! └── ScenarioExecutor  (sequential fold or rayon fold/reduce)
//! ```
//!
//! # Reproducibility
//!
//! Scenario `i` always draws the path of seed `init_seed + i`, whichever
//! thread evaluates it, so sequential and parallel runs agree up to
//! floating-point summation order.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::traits::PricingModel;
//! use pricer_core::types::{ContractSpec, MarketInputs};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_scenarios(5_000)
//!     .n_steps(12)
//!     .seed(7)
//!     .parallel(true)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(
//!     MarketInputs::default(),
//!     ContractSpec::put(100.0, 1.0),
//!     config,
//! )
//! .unwrap();
//!
//! println!("Price: {} +/- {}", pricer.price(), pricer.confidence_95());
//! ```

mod config;
mod error;
mod paths;
mod pricer;
mod seeds;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_SCENARIOS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{GbmParams, PathGenerator};
pub use pricer::MonteCarloPricer;
pub use seeds::ScenarioSeedSet;
