//! Discretely sampled geometric average Asian option.
//!
//! The geometric mean of log-normal observations is itself log-normal, so
//! the option has a closed form. The average here runs over the exact grid
//! simulated by [`PathGenerator`](crate::mc::PathGenerator): the `N + 1`
//! points `t_i = i·dt`, `i = 0..=N`, including the initial spot.
//!
//! ```text
//! ln G ~ Normal(μ, v)
//! μ = ln S₀ + (r - σ²/2)·dt·N/2
//! v = σ²·dt·N(2N + 1) / (6(N + 1))
//!
//! d1 = (μ - ln K + v) / √v
//! d2 = d1 - √v
//! Call = e^{-rT}·[e^{μ + v/2}·N(d1) - K·N(d2)]
//! Put  = e^{-rT}·[K·N(-d2) - e^{μ + v/2}·N(-d1)]
//! ```
//!
//! with `T = N·dt`. As `N → ∞` this tends to the continuously sampled
//! Kemna-Vorst price.

use super::black_scholes::{validate_non_negative, validate_positive};
use super::distributions::norm_cdf;
use crate::mc::{Payoff, PricingError, SimulationParameters};

/// Log-moments of the discrete geometric average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricAverageMoments {
    /// Mean of ln G.
    pub log_mean: f64,
    /// Variance of ln G.
    pub log_variance: f64,
}

impl GeometricAverageMoments {
    /// Computes the moments for the sampling grid of `params`.
    pub fn for_grid(params: &SimulationParameters) -> Self {
        let n = params.n_steps as f64;
        let sigma2 = params.volatility * params.volatility;

        Self {
            log_mean: params.spot.ln() + (params.rate - 0.5 * sigma2) * params.dt * n / 2.0,
            log_variance: sigma2 * params.dt * n * (2.0 * n + 1.0) / (6.0 * (n + 1.0)),
        }
    }

    /// E[G] = exp(μ + v/2).
    #[inline]
    pub fn expected_average(&self) -> f64 {
        (self.log_mean + 0.5 * self.log_variance).exp()
    }
}

/// Prices a geometric average Asian option on the generator's sampling grid.
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`] if the parameters fail
/// validation, spot or strike is not strictly positive, or the rate is not
/// finite.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::analytical::geometric_asian_price;
/// use pricer_mc::mc::{Payoff, SimulationParameters};
///
/// let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
/// let price = geometric_asian_price(Payoff::Call, &params, 50.0).unwrap();
/// assert!(price > 0.0 && price < 7.0);
/// ```
pub fn geometric_asian_price(
    payoff: Payoff,
    params: &SimulationParameters,
    strike: f64,
) -> Result<f64, PricingError> {
    params.validate()?;
    validate_positive("spot", params.spot)?;
    validate_positive("strike", strike)?;
    validate_non_negative("volatility", params.volatility)?;
    if !params.rate.is_finite() {
        return Err(PricingError::invalid(
            "rate",
            format!("must be finite, got {}", params.rate),
        ));
    }

    let moments = GeometricAverageMoments::for_grid(params);
    let discount = params.discount_factor();

    if moments.log_variance == 0.0 {
        return Ok(discount * payoff.evaluate(moments.log_mean.exp(), strike));
    }

    let std_dev = moments.log_variance.sqrt();
    let d1 = (moments.log_mean - strike.ln() + moments.log_variance) / std_dev;
    let d2 = d1 - std_dev;
    let forward = moments.expected_average();

    let undiscounted = match payoff {
        Payoff::Call => forward * norm_cdf(d1) - strike * norm_cdf(d2),
        Payoff::Put => strike * norm_cdf(-d2) - forward * norm_cdf(-d1),
    };
    Ok((discount * undiscounted).max(0.0))
}
