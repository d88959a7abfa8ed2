//! Bump-and-reprice finite differences.
//!
//! Models without an analytical delta price two transient copies with the
//! spot shifted by `±pct_shift` and take the centred difference:
//!
//! ```text
//! Δ ≈ (V(S·(1+h)) − V(S·(1−h))) / (2·h·S)
//! ```

use crate::types::PricingError;

/// Centred relative-bump delta.
///
/// # Arguments
///
/// * `spot` - Unbumped spot price
/// * `pct_shift` - Relative shift `h` (must be non-zero)
/// * `reprice` - Prices a fresh model at the given spot
///
/// # Errors
///
/// - `PricingError::ZeroShift` if `pct_shift` is zero
/// - `PricingError::InvalidInput` if `pct_shift` is not finite
/// - Any error returned by `reprice`
///
/// # Examples
///
/// ```
/// use pricer_core::math::central_spot_delta;
///
/// let delta = central_spot_delta(100.0, 0.01, |s| Ok(0.5 * s)).unwrap();
/// assert!((delta - 0.5).abs() < 1e-12);
/// ```
pub fn central_spot_delta<F>(spot: f64, pct_shift: f64, mut reprice: F) -> Result<f64, PricingError>
where
    F: FnMut(f64) -> Result<f64, PricingError>,
{
    if pct_shift == 0.0 {
        return Err(PricingError::ZeroShift);
    }
    if !pct_shift.is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "delta shift must be finite, got {}",
            pct_shift
        )));
    }

    let price_up = reprice(spot * (1.0 + pct_shift))?;
    let price_down = reprice(spot * (1.0 - pct_shift))?;

    Ok((price_up - price_down) / (2.0 * pct_shift * spot))
}
