//! Cached pricing output.

use std::time::{Duration, Instant};

/// Price together with the wall-clock time it took to compute.
///
/// `elapsed` is diagnostic only and never feeds into a pricing decision.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingResult;
///
/// let result = PricingResult::timed(|| 10.45);
/// assert_eq!(result.price, 10.45);
/// assert!(result.elapsed_ms() >= 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// Wall-clock time of the computation.
    pub elapsed: Duration,
}

impl PricingResult {
    /// Runs `compute` and records how long it took.
    pub fn timed<F>(compute: F) -> Self
    where
        F: FnOnce() -> f64,
    {
        let start = Instant::now();
        let price = compute();
        Self {
            price,
            elapsed: start.elapsed(),
        }
    }

    /// Elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}
