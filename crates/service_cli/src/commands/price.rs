//! Price command implementation
//!
//! Prices the configured scenario as a European, arithmetic Asian and
//! geometric Asian option from one shared path generator, and reports the
//! closed-form references next to the Monte Carlo estimates.

use std::cell::RefCell;

use pricer_mc::analytical::{black_scholes_price, geometric_asian_price};
use pricer_mc::{OptionStyle, OptionValuator, PathGenerator, Payoff, PricingError, PricingResult};
use tracing::{info, warn};

use crate::config::ScenarioConfig;
use crate::{CliError, Result};

/// Monte Carlo estimates and analytical references for one scenario.
#[derive(Debug, Clone)]
pub struct PriceReport {
    /// Payoff priced
    pub payoff: Payoff,
    /// Estimate per option style, in [`OptionStyle::ALL`] order
    pub estimates: Vec<(OptionStyle, PricingResult)>,
    /// Black-Scholes price of the European option, if the closed form
    /// accepts the scenario
    pub black_scholes: Option<f64>,
    /// Closed-form price of the discrete geometric Asian option, if the
    /// closed form accepts the scenario
    pub geometric_closed_form: Option<f64>,
}

impl PriceReport {
    /// Closed-form reference for `style`, if one exists and was computed.
    pub fn reference(&self, style: OptionStyle) -> Option<f64> {
        match style {
            OptionStyle::VanillaEuropean => self.black_scholes,
            OptionStyle::GeometricAsian => self.geometric_closed_form,
            OptionStyle::ArithmeticAsian => None,
        }
    }
}

/// Prices all option styles against one generator seeded with `seed`.
///
/// The valuators share the generator, so each style consumes the next
/// `n_paths` paths of the same stream.
pub fn evaluate(scenario: &ScenarioConfig, seed: u64) -> Result<PriceReport> {
    if scenario.n_paths == 0 {
        return Err(CliError::invalid_argument("--paths must be at least 1"));
    }

    let params = scenario.parameters();
    let generator = RefCell::new(PathGenerator::new(params, seed)?);

    let estimates = OptionStyle::ALL
        .into_iter()
        .map(|style| -> Result<(OptionStyle, PricingResult)> {
            let valuator = OptionValuator::new(
                style,
                scenario.strike,
                scenario.payoff,
                &generator,
                scenario.n_paths,
            )?;
            Ok((style, valuator.price_with_stats()?))
        })
        .collect::<Result<Vec<_>>>()?;

    // The closed forms need a positive spot and strike; the estimates do not
    let black_scholes = closed_form(
        "Black-Scholes",
        black_scholes_price(
            scenario.payoff,
            params.spot,
            scenario.strike,
            params.rate,
            params.volatility,
            params.maturity(),
        ),
    );
    let geometric_closed_form = closed_form(
        "geometric Asian",
        geometric_asian_price(scenario.payoff, &params, scenario.strike),
    );

    Ok(PriceReport {
        payoff: scenario.payoff,
        estimates,
        black_scholes,
        geometric_closed_form,
    })
}

fn closed_form(name: &str, price: std::result::Result<f64, PricingError>) -> Option<f64> {
    match price {
        Ok(price) => Some(price),
        Err(e) => {
            warn!("{} reference unavailable: {}", name, e);
            None
        }
    }
}

/// Run the price command
pub fn run(scenario: &ScenarioConfig, seed: u64) -> Result<()> {
    info!("Starting pricing...");
    info!(
        "  Scenario: S0={}, K={}, sigma={}, r={}, dt={}, steps={}",
        scenario.spot,
        scenario.strike,
        scenario.volatility,
        scenario.rate,
        scenario.dt,
        scenario.n_steps
    );
    info!("  Monte Carlo paths: {}", scenario.n_paths);
    info!("  Seed: {}", seed);

    let report = evaluate(scenario, seed)?;
    print_table(&report);

    info!("Pricing complete");
    Ok(())
}

fn print_table(report: &PriceReport) {
    println!("\n┌──────────────────────────┬────────────┬────────────┬────────────┐");
    println!(
        "│ {:<24} │ {:>10} │ {:>10} │ {:>10} │",
        format!("Option ({})", report.payoff),
        "MC price",
        "Std error",
        "Analytical"
    );
    println!("├──────────────────────────┼────────────┼────────────┼────────────┤");
    for (style, result) in &report.estimates {
        let reference = report
            .reference(*style)
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "│ {:<24} │ {:>10.4} │ {:>10.4} │ {:>10} │",
            style.to_string(),
            result.price,
            result.std_error,
            reference
        );
    }
    println!("└──────────────────────────┴────────────┴────────────┴────────────┘");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_scenario() -> ScenarioConfig {
        ScenarioConfig {
            n_paths: 20_000,
            ..ScenarioConfig::default()
        }
    }

    #[test]
    fn test_evaluate_all_styles() {
        let report = evaluate(&small_scenario(), 42).unwrap();

        assert_eq!(report.estimates.len(), 3);
        for ((style, result), expected) in report.estimates.iter().zip(OptionStyle::ALL) {
            assert_eq!(*style, expected);
            assert!(result.price > 0.0);
            assert!(result.std_error > 0.0);
            assert_eq!(result.n_paths, 20_000);
        }
    }

    #[test]
    fn test_estimates_near_references() {
        let report = evaluate(&small_scenario(), 7).unwrap();

        for (style, result) in &report.estimates {
            if let Some(reference) = report.reference(*style) {
                let tolerance = (5.0 * result.std_error).max(0.02);
                assert!(
                    (result.price - reference).abs() < tolerance,
                    "{}: {} vs {}",
                    style,
                    result.price,
                    reference
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = evaluate(&small_scenario(), 99).unwrap();
        let b = evaluate(&small_scenario(), 99).unwrap();
        for ((_, x), (_, y)) in a.estimates.iter().zip(&b.estimates) {
            assert_eq!(x.price.to_bits(), y.price.to_bits());
        }
    }

    #[test]
    fn test_put_scenario() {
        let scenario = ScenarioConfig {
            payoff: Payoff::Put,
            ..small_scenario()
        };
        let report = evaluate(&scenario, 1).unwrap();
        assert_eq!(report.payoff, Payoff::Put);
        assert!(report.black_scholes.unwrap() > 0.0);
    }

    #[test]
    fn test_zero_strike_keeps_estimates_without_references() {
        let scenario = ScenarioConfig {
            strike: 0.0,
            n_paths: 1_000,
            ..ScenarioConfig::default()
        };
        let mut config = crate::config::CliConfig::default();
        config.scenario = scenario;
        assert!(config.validate().is_ok());

        let report = evaluate(&scenario, 3).unwrap();
        assert_eq!(report.estimates.len(), 3);
        assert!(report.black_scholes.is_none());
        assert!(report.geometric_closed_form.is_none());
        for (style, result) in &report.estimates {
            assert!(report.reference(*style).is_none());
            // Zero-strike call pays the statistic itself
            assert!(result.price > 0.0);
        }
    }

    #[test]
    fn test_zero_paths_rejected() {
        let scenario = ScenarioConfig {
            n_paths: 0,
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            evaluate(&scenario, 1),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_scenario_is_pricing_error() {
        let scenario = ScenarioConfig {
            dt: 0.0,
            ..small_scenario()
        };
        assert!(matches!(evaluate(&scenario, 1), Err(CliError::Pricing(_))));
    }
}
