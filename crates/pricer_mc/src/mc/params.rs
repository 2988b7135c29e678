//! Simulation parameters for GBM path generation.

use super::error::PricingError;

/// Parameters of a discretised Geometric Brownian Motion.
///
/// # Model
///
/// Under the risk-neutral measure the asset follows
/// ```text
/// dS = r S dt + σ S dW
/// ```
/// sampled on the grid `t_i = i · dt` for `i = 0..=n_steps`.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::SimulationParameters;
///
/// let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
/// assert!(params.validate().is_ok());
/// assert!((params.maturity() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Risk-free rate (r), annualised.
    pub rate: f64,
    /// Time-step size in years.
    pub dt: f64,
    /// Number of time steps per path.
    pub n_steps: usize,
}

impl SimulationParameters {
    /// Creates new simulation parameters. No validation is performed here;
    /// see [`validate`](Self::validate).
    #[inline]
    pub fn new(spot: f64, volatility: f64, rate: f64, dt: f64, n_steps: usize) -> Self {
        Self {
            spot,
            volatility,
            rate,
            dt,
            n_steps,
        }
    }

    /// Returns a copy with a different initial spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Horizon `T = n_steps · dt`.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.n_steps as f64 * self.dt
    }

    /// Discount factor `exp(-r · T)` over the simulated horizon.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity()).exp()
    }

    /// Checks the structural invariants of the discretisation.
    ///
    /// Spot and rate are not range-checked: a spot or rate that drives the
    /// recurrence out of `(0, ∞)` is reported by
    /// [`PathGenerator::generate`](super::PathGenerator::generate) as a
    /// computation fault.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if:
    /// - `n_steps` is 0
    /// - `dt` is not strictly positive and finite
    /// - `volatility` is negative or not finite
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_steps == 0 {
            return Err(PricingError::invalid(
                "n_steps",
                "must be at least 1, got 0",
            ));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(PricingError::invalid(
                "dt",
                format!("must be positive and finite, got {}", self.dt),
            ));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(PricingError::invalid(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            spot: 50.0,
            volatility: 0.3,
            rate: 0.05,
            dt: 1.0 / 50.0,
            n_steps: 50,
        }
    }
}
