//! Black-Scholes closed form for European options.
//!
//! ```text
//! d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d2 = d1 - σ√T
//! Call = S·N(d1) - K·e^{-rT}·N(d2)
//! Put  = K·e^{-rT}·N(-d2) - S·N(-d1)
//! ```

use super::distributions::norm_cdf;
use crate::mc::{Payoff, PricingError};

/// Prices a European option under Black-Scholes.
///
/// With `volatility == 0` or `maturity == 0` the terminal price is
/// deterministic and the discounted intrinsic value of the forward is
/// returned.
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`] if spot or strike is not
/// strictly positive and finite, volatility or maturity is negative or not
/// finite, or the rate is not finite.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::analytical::black_scholes_price;
/// use pricer_mc::mc::Payoff;
///
/// let call = black_scholes_price(Payoff::Call, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_price(
    payoff: Payoff,
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> Result<f64, PricingError> {
    validate_positive("spot", spot)?;
    validate_positive("strike", strike)?;
    validate_non_negative("volatility", volatility)?;
    validate_non_negative("maturity", maturity)?;
    if !rate.is_finite() {
        return Err(PricingError::invalid("rate", format!("must be finite, got {}", rate)));
    }

    let discount = (-rate * maturity).exp();
    let vol_sqrt_t = volatility * maturity.sqrt();

    if vol_sqrt_t == 0.0 {
        let forward = spot * (rate * maturity).exp();
        return Ok(discount * payoff.evaluate(forward, strike));
    }

    let drift = (rate + 0.5 * volatility * volatility) * maturity;
    let d1 = ((spot / strike).ln() + drift) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let price = match payoff {
        Payoff::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        Payoff::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };
    Ok(price.max(0.0))
}

pub(super) fn validate_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be positive and finite, got {}", value),
        ))
    }
}

pub(super) fn validate_non_negative(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be non-negative and finite, got {}", value),
        ))
    }
}
