//! GBM sample path generator.
//!
//! [`PathGenerator`] owns the simulation parameters, the random stream and a
//! single path buffer of length `n_steps + 1`. Every call to
//! [`generate`](PathGenerator::generate) overwrites the buffer in place with a
//! fresh realisation:
//!
//! ```text
//! S[0]   = S₀
//! S[i]   = S[i-1] · exp((r - ½σ²)·dt) · exp(σ·√dt)^Z_i
//! ```
//!
//! The two multiplicative factors depend only on the parameters and are
//! cached by [`configure`](PathGenerator::configure).

use tracing::debug;

use super::error::PricingError;
use super::params::SimulationParameters;
use crate::rng::PricerRng;

/// Stochastic path generator for Geometric Brownian Motion.
///
/// # Buffer Reuse
///
/// The path buffer and the normal-variate scratch buffer are allocated on
/// [`configure`](Self::configure) and reused by every subsequent
/// [`generate`](Self::generate) call.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{PathGenerator, SimulationParameters};
///
/// let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
/// let mut generator = PathGenerator::new(params, 42).unwrap();
///
/// generator.generate().unwrap();
/// let path = generator.prices();
/// assert_eq!(path.len(), 51);
/// assert_eq!(path[0], 50.0);
/// ```
#[derive(Clone, Debug)]
pub struct PathGenerator {
    params: SimulationParameters,
    rng: PricerRng,
    /// Path buffer, `n_steps + 1` entries.
    prices: Vec<f64>,
    /// Scratch buffer for one path's normal draws, `n_steps` entries.
    normals: Vec<f64>,
    /// exp((r - ½σ²)·dt)
    drift_factor: f64,
    /// exp(σ·√dt)
    vol_factor: f64,
    has_path: bool,
}

impl PathGenerator {
    /// Creates a generator for `params` with its stream seeded by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `params` fails
    /// [`SimulationParameters::validate`].
    pub fn new(params: SimulationParameters, seed: u64) -> Result<Self, PricingError> {
        params.validate()?;

        let (drift_factor, vol_factor) = step_factors(&params);
        Ok(Self {
            params,
            rng: PricerRng::from_seed(seed),
            prices: vec![0.0; params.n_steps + 1],
            normals: vec![0.0; params.n_steps],
            drift_factor,
            vol_factor,
            has_path: false,
        })
    }

    /// Replaces the simulation parameters.
    ///
    /// Resizes the path buffer to `n_steps + 1`, recomputes the cached step
    /// factors and invalidates the current path. The random stream is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `params` is invalid; the
    /// generator keeps its previous state in that case.
    pub fn configure(&mut self, params: SimulationParameters) -> Result<(), PricingError> {
        params.validate()?;

        let (drift_factor, vol_factor) = step_factors(&params);
        self.params = params;
        self.drift_factor = drift_factor;
        self.vol_factor = vol_factor;

        self.prices.clear();
        self.prices.resize(params.n_steps + 1, 0.0);
        self.normals.clear();
        self.normals.resize(params.n_steps, 0.0);
        self.has_path = false;

        debug!(
            spot = params.spot,
            volatility = params.volatility,
            rate = params.rate,
            dt = params.dt,
            n_steps = params.n_steps,
            "path generator configured"
        );
        Ok(())
    }

    /// Restarts the random stream from `seed`.
    pub fn seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Returns the seed the stream was last (re)started from.
    #[inline]
    pub fn current_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns the current simulation parameters.
    #[inline]
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Simulates one path into the internal buffer.
    ///
    /// Consumes exactly `n_steps` draws from the random stream, even when the
    /// path faults part-way.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ComputationFault`] if the spot or any simulated
    /// value is not strictly positive and finite. The buffer is left
    /// invalidated.
    pub fn generate(&mut self) -> Result<(), PricingError> {
        self.has_path = false;
        self.rng.fill_normal(&mut self.normals);

        let spot = self.params.spot;
        if !is_valid_price(spot) {
            return Err(PricingError::ComputationFault {
                step: 0,
                value: spot,
            });
        }
        self.prices[0] = spot;

        for (step, &z) in self.normals.iter().enumerate() {
            let next = self.prices[step] * self.drift_factor * self.vol_factor.powf(z);
            if !is_valid_price(next) {
                return Err(PricingError::ComputationFault {
                    step: step + 1,
                    value: next,
                });
            }
            self.prices[step + 1] = next;
        }

        self.has_path = true;
        Ok(())
    }

    /// Read-only view of the path buffer.
    ///
    /// The contents are only meaningful after a successful
    /// [`generate`](Self::generate) (see [`has_path`](Self::has_path)); the
    /// next `generate` overwrites them.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Returns `true` if the buffer holds a path produced under the current
    /// parameters.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.has_path
    }
}

#[inline]
fn step_factors(params: &SimulationParameters) -> (f64, f64) {
    let sigma = params.volatility;
    let drift_factor = ((params.rate - 0.5 * sigma * sigma) * params.dt).exp();
    let vol_factor = (sigma * params.dt.sqrt()).exp();
    (drift_factor, vol_factor)
}

#[inline]
fn is_valid_price(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}
