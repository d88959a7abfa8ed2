//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for Monte Carlo path simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is created from an explicit seed
//! - **Independence**: one generator per scenario, never shared between threads
//!
//! All documentation in this module uses British English spelling conventions.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```

pub mod prng;

pub use prng::PricerRng;
