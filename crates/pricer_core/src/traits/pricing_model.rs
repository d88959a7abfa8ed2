//! The uniform pricing contract.
//!
//! Every pricer computes its price eagerly (at construction or on an explicit
//! reset) and caches it. Sensitivities are obtained either analytically or by
//! building transient repriced copies via [`PricingModel::reprice_with_spot`];
//! the original pricer is never mutated while bumping.

use std::time::Duration;

use crate::types::PricingError;

/// Default relative spot shift for finite-difference delta (1 basis point).
pub const DEFAULT_PCT_SHIFT: f64 = 0.0001;

/// Capability set shared by all pricing models.
///
/// # Contract
///
/// - `price` is cached: it returns the value computed at construction or at
///   the last input-changing mutation, without recomputation.
/// - `delta` may recompute (finite-difference models build bumped copies),
///   so it can be as expensive as two full pricings.
/// - `compute_time` is diagnostic only.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::PricingError;
/// use pricer_core::math::central_spot_delta;
///
/// #[derive(Clone)]
/// struct Forward { spot: f64, strike: f64 }
///
/// impl PricingModel for Forward {
///     fn price(&self) -> f64 { self.spot - self.strike }
///     fn delta(&self, pct_shift: f64) -> Result<f64, PricingError> {
///         central_spot_delta(self.spot, pct_shift, |s| {
///             Ok(self.reprice_with_spot(s)?.price())
///         })
///     }
///     fn reprice_with_spot(&self, spot: f64) -> Result<Self, PricingError> {
///         Ok(Forward { spot, ..self.clone() })
///     }
///     fn compute_time(&self) -> Duration { Duration::ZERO }
/// }
///
/// let fwd = Forward { spot: 100.0, strike: 90.0 };
/// assert!((fwd.delta(0.01).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub trait PricingModel {
    /// Cached present value.
    fn price(&self) -> f64;

    /// Sensitivity of the price to the spot.
    ///
    /// `pct_shift` is the relative spot bump used by finite-difference
    /// models; analytical models may ignore it.
    ///
    /// # Errors
    ///
    /// Finite-difference models return `PricingError::ZeroShift` for a zero
    /// shift.
    fn delta(&self, pct_shift: f64) -> Result<f64, PricingError>;

    /// Builds a fresh, fully priced copy with the spot replaced.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the new spot is rejected.
    fn reprice_with_spot(&self, spot: f64) -> Result<Self, PricingError>
    where
        Self: Sized;

    /// Wall-clock time of the last price computation.
    fn compute_time(&self) -> Duration;

    /// Wall-clock time of the last price computation in milliseconds.
    #[inline]
    fn compute_time_ms(&self) -> f64 {
        self.compute_time().as_secs_f64() * 1e3
    }
}
