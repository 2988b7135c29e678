//! Path statistics for European and Asian option styles.
//!
//! # Key Components
//!
//! - [`OptionStyle`]: closed set of styles, each mapping a simulated path to
//!   the scalar its payoff is evaluated on
//!
//! Static dispatch over the enum keeps the valuation loop free of trait
//! objects.

mod style;

pub use style::OptionStyle;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_terminal_statistic() {
        let path = [100.0, 105.0, 110.0, 95.0];
        assert_eq!(OptionStyle::VanillaEuropean.statistic(&path).unwrap(), 95.0);
    }

    #[test]
    fn test_arithmetic_includes_initial_spot() {
        // (100 + 105 + 110 + 95 + 100) / 5 = 102
        let path = [100.0, 105.0, 110.0, 95.0, 100.0];
        assert_relative_eq!(
            OptionStyle::ArithmeticAsian.statistic(&path).unwrap(),
            102.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_geometric_of_constant_path() {
        let path = [100.0; 10];
        assert_relative_eq!(
            OptionStyle::GeometricAsian.statistic(&path).unwrap(),
            100.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_geometric_avoids_product_overflow() {
        // The raw product of 400 values of 1e200 overflows; the log form does not.
        let path = vec![1e200; 400];
        let value = OptionStyle::GeometricAsian.statistic(&path).unwrap();
        assert_relative_eq!(value, 1e200, max_relative = 1e-10);
    }

    #[test]
    fn test_geometric_rejects_non_positive_entry() {
        let path = [100.0, 0.0, 110.0];
        let err = OptionStyle::GeometricAsian.statistic(&path).unwrap_err();
        assert!(err.is_computation_fault());
    }

    #[test]
    fn test_geometric_rejects_nan_entry() {
        let path = [100.0, f64::NAN, 110.0];
        let err = OptionStyle::GeometricAsian.statistic(&path).unwrap_err();
        assert!(err.is_computation_fault());

        let negative = [100.0, -5.0, 110.0];
        assert!(OptionStyle::GeometricAsian.statistic(&negative).is_err());
    }

    #[test]
    fn test_empty_path_is_fault() {
        for style in OptionStyle::ALL {
            assert!(style.statistic(&[]).unwrap_err().is_computation_fault());
        }
    }

    #[test]
    fn test_arithmetic_overflow_is_fault() {
        let path = [f64::MAX, f64::MAX];
        let err = OptionStyle::ArithmeticAsian.statistic(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::mc::PricingError::NonFiniteStatistic {
                statistic: "arithmetic mean",
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn prop_geometric_never_exceeds_arithmetic(
            path in proptest::collection::vec(0.01..1e4_f64, 1..64)
        ) {
            let arithmetic = OptionStyle::ArithmeticAsian.statistic(&path).unwrap();
            let geometric = OptionStyle::GeometricAsian.statistic(&path).unwrap();
            prop_assert!(geometric <= arithmetic * (1.0 + 1e-12));
        }
    }
}
