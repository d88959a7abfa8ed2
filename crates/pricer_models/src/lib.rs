//! # Pricer Models (L2: Pricing Models)
//!
//! Deterministic pricing models for European options.
//!
//! This crate provides:
//! - Closed-form Black-Scholes-Merton pricing and analytical delta (`analytical`)
//! - Recombining binomial lattice with backward induction (`lattice`)
//!
//! Both models implement [`pricer_core::traits::PricingModel`], so they can be
//! cross-validated against each other and against the Monte Carlo engine in
//! `pricer_pricing`.
//!
//! ## Design Principles
//!
//! - **Eager pricing**: constructors compute and cache the price (blocking)
//! - **All-or-nothing resets**: a rejected input leaves the cached state untouched
//! - **Single-threaded**: neither model spawns work

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;

pub use analytical::BlackScholesPricer;
pub use lattice::BinomialTreePricer;
