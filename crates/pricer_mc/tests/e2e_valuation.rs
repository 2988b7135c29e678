//! End-to-end tests for European and Asian option valuation.
//!
//! # Test Coverage
//!
//! - Reference scenario for all three option styles
//! - Path generator invariants across parameter changes
//! - Reproducibility and stream sharing between valuators
//! - Statistical convergence of the estimator

use std::cell::RefCell;

use pricer_mc::{
    OptionStyle, OptionValuator, PathGenerator, Payoff, PricingError, SimulationParameters,
};

/// S0=50, sigma=0.3, r=0.05, dt=1/50, 50 steps.
fn reference_params() -> SimulationParameters {
    SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50)
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn e2e_reference_scenario_ordering() {
    let generator = RefCell::new(PathGenerator::new(reference_params(), 42).unwrap());

    let price = |style| {
        OptionValuator::new(style, 50.0, Payoff::Call, &generator, 100_000)
            .unwrap()
            .price()
            .unwrap()
    };

    let european = price(OptionStyle::VanillaEuropean);
    let arithmetic = price(OptionStyle::ArithmeticAsian);
    let geometric = price(OptionStyle::GeometricAsian);

    for p in [european, arithmetic, geometric] {
        assert!(p > 0.0 && p.is_finite(), "price must be positive and finite: {}", p);
    }
    assert!(
        geometric <= arithmetic,
        "geometric {} must not exceed arithmetic {}",
        geometric,
        arithmetic
    );
    assert!(arithmetic <= 1.5 * geometric);
    // Averaging dampens volatility
    assert!(arithmetic < european);
}

#[test]
fn e2e_geometric_below_arithmetic_on_identical_paths() {
    let a = RefCell::new(PathGenerator::new(reference_params(), 7).unwrap());
    let b = RefCell::new(PathGenerator::new(reference_params(), 7).unwrap());

    let arithmetic = OptionValuator::new(
        OptionStyle::ArithmeticAsian,
        50.0,
        Payoff::Call,
        &a,
        20_000,
    )
    .unwrap()
        .price()
        .unwrap();
    let geometric = OptionValuator::new(OptionStyle::GeometricAsian, 50.0, Payoff::Call, &b, 20_000)
        .unwrap()
        .price()
        .unwrap();

    // Pathwise G <= A and the call payoff is monotone
    assert!(geometric <= arithmetic);
}

#[test]
fn e2e_degenerate_atm_call_is_exactly_zero() {
    let params = SimulationParameters::new(50.0, 0.0, 0.0, 1.0 / 50.0, 50);
    let generator = RefCell::new(PathGenerator::new(params, 42).unwrap());

    for style in OptionStyle::ALL {
        let valuator = OptionValuator::new(style, 50.0, Payoff::Call, &generator, 500).unwrap();
        assert_eq!(valuator.price().unwrap(), 0.0, "{}", style);
    }
}

// ============================================================================
// Path Generator Invariants
// ============================================================================

#[test]
fn e2e_path_shape_for_any_seed() {
    for seed in [0_u64, 1, 42, u64::MAX] {
        let mut generator = PathGenerator::new(reference_params(), seed).unwrap();
        generator.generate().unwrap();

        let path = generator.prices();
        assert_eq!(path.len(), 51);
        assert_eq!(path[0], 50.0);
        assert!(path.iter().all(|&p| p > 0.0 && p.is_finite()));
    }
}

#[test]
fn e2e_zero_volatility_independent_of_seed() {
    let params = reference_params().with_volatility(0.0);

    for seed in [1_u64, 2, 3] {
        let mut generator = PathGenerator::new(params, seed).unwrap();
        generator.generate().unwrap();

        for (i, &price) in generator.prices().iter().enumerate() {
            let expected = 50.0 * (0.05 * params.dt * i as f64).exp();
            approx::assert_relative_eq!(price, expected, max_relative = 1e-12);
        }
    }
}

#[test]
fn e2e_configure_new_step_count() {
    let generator = RefCell::new(PathGenerator::new(reference_params(), 42).unwrap());
    let valuator =
        OptionValuator::new(OptionStyle::ArithmeticAsian, 50.0, Payoff::Call, &generator, 100)
            .unwrap();
    valuator.price().unwrap();

    generator
        .borrow_mut()
        .configure(SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 12.0, 12))
        .unwrap();
    valuator.price().unwrap();

    let mut generator = generator.into_inner();
    generator.generate().unwrap();
    assert_eq!(generator.prices().len(), 13);
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn e2e_identical_seed_bit_identical_prices() {
    let run = || {
        let generator = RefCell::new(PathGenerator::new(reference_params(), 2024).unwrap());
        OptionValuator::new(OptionStyle::GeometricAsian, 48.0, Payoff::Put, &generator, 10_000)
            .unwrap()
            .price()
            .unwrap()
    };

    assert_eq!(run().to_bits(), run().to_bits());
}

#[test]
fn e2e_valuators_share_one_stream() {
    let shared = RefCell::new(PathGenerator::new(reference_params(), 11).unwrap());
    let euro = OptionValuator::new(OptionStyle::VanillaEuropean, 50.0, Payoff::Call, &shared, 1_000)
        .unwrap();
    let asian = OptionValuator::new(
        OptionStyle::ArithmeticAsian,
        50.0,
        Payoff::Call,
        &shared,
        1_000,
    )
    .unwrap();

    euro.price().unwrap();
    let asian_after_euro = asian.price().unwrap();

    // A fresh generator's first batch differs from the second batch of the shared stream
    let fresh = RefCell::new(PathGenerator::new(reference_params(), 11).unwrap());
    let asian_fresh = OptionValuator::new(
        OptionStyle::ArithmeticAsian,
        50.0,
        Payoff::Call,
        &fresh,
        1_000,
    )
    .unwrap()
        .price()
        .unwrap();

    assert_ne!(asian_after_euro, asian_fresh);
}

#[test]
fn e2e_zero_paths_is_invalid_argument() {
    let generator = RefCell::new(PathGenerator::new(reference_params(), 42).unwrap());
    let err = OptionValuator::new(OptionStyle::VanillaEuropean, 50.0, Payoff::Call, &generator, 0)
        .unwrap_err();
    assert!(matches!(err, PricingError::InvalidArgument { .. }));
}

// ============================================================================
// Convergence
// ============================================================================

fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
}

#[test]
fn e2e_estimator_spread_shrinks_with_root_n() {
    let params = SimulationParameters::new(50.0, 0.3, 0.05, 0.1, 10);
    let estimates = |n_paths: usize| -> Vec<f64> {
        (0..16_u64)
            .map(|seed| {
                let generator = RefCell::new(PathGenerator::new(params, 1_000 + seed).unwrap());
                OptionValuator::new(
                    OptionStyle::VanillaEuropean,
                    50.0,
                    Payoff::Call,
                    &generator,
                    n_paths,
                )
                .unwrap()
                .price()
                .unwrap()
            })
            .collect()
    };

    let spread_small = sample_std_dev(&estimates(1_000));
    let spread_large = sample_std_dev(&estimates(100_000));
    let ratio = spread_small / spread_large;

    // sqrt(100_000 / 1_000) = 10; 16 replications leave wide sampling error
    assert!(
        (4.0..25.0).contains(&ratio),
        "spread ratio {} (small {}, large {})",
        ratio,
        spread_small,
        spread_large
    );
}

#[test]
fn e2e_reported_std_error_scales_with_root_n() {
    let generator = RefCell::new(PathGenerator::new(reference_params(), 5).unwrap());
    let small = OptionValuator::new(
        OptionStyle::VanillaEuropean,
        50.0,
        Payoff::Call,
        &generator,
        2_000,
    )
    .unwrap()
        .price_with_stats()
        .unwrap();
    let large = OptionValuator::new(
        OptionStyle::VanillaEuropean,
        50.0,
        Payoff::Call,
        &generator,
        200_000,
    )
    .unwrap()
        .price_with_stats()
        .unwrap();

    let ratio = small.std_error / large.std_error;
    assert!((8.0..12.5).contains(&ratio), "std error ratio {}", ratio);
}
