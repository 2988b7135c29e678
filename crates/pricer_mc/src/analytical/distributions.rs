//! Standard normal distribution helpers.

use num_traits::Float;

/// Standard normal CDF approximation.
///
/// Uses the Abramowitz and Stegun 7.1.26 approximation of the complementary
/// error function (absolute error below 1.5e-7).
///
/// ```rust
/// use pricer_mc::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.96_f64) - 0.975).abs() < 1e-4);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    if x.abs() > T::from(8.0).unwrap() {
        return if x > zero { one } else { zero };
    }

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // Φ(x) = ½ erfc(-x/√2)
    let arg = -x / sqrt_2;
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();
    let erfc_val = if arg < zero { two - erfc_abs } else { erfc_abs };

    half * erfc_val
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841344746, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158655254, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.5_f64), 0.993790335, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.1_f64, 0.7, 1.3, 2.9, 5.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert_eq!(norm_cdf(9.0_f64), 1.0);
        assert_eq!(norm_cdf(-9.0_f64), 0.0);
    }

    #[test]
    fn test_norm_cdf_f32() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
    }
}
