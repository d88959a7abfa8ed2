//! Standard normal cumulative distribution function, via `statrs` erfc.

use statrs::function::erf::erfc;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1):
///
/// ```text
/// Φ(x) = ½ · erfc(−x / √2)
/// ```
///
/// Infinite arguments map to exactly 0 or 1 and NaN propagates.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-3.0), 0.0013498980316300946, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.5, -0.25, 0.0, 0.25, 1.5, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_limits() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert!(norm_cdf(f64::NAN).is_nan());
        assert!(norm_cdf(-40.0) >= 0.0);
        assert!(norm_cdf(40.0) <= 1.0);
    }
}
