//! Deterministic multi-worker valuation.
//!
//! Paths are statistically independent, so a valuation can be split across
//! workers provided each worker draws from its own stream. Worker `w` of
//! `n_workers` runs a private [`PathGenerator`] seeded with
//! `derive_seed(master_seed, w)` and simulates
//! `n_paths / n_workers` paths, plus one if `w < n_paths % n_workers`.
//! Worker batches are merged in worker order, so the estimate depends only on
//! `(parameters, master_seed, n_workers)` and never on thread scheduling.
//!
//! The estimate differs numerically from the sequential
//! [`OptionValuator::price`], and the shared generator's stream is left
//! untouched.

use rayon::prelude::*;
use tracing::debug;

use super::error::PricingError;
use super::generator::PathGenerator;
use super::result::{PayoffAccumulator, PricingResult};
use super::valuator::{simulate_payoffs, OptionValuator};
use crate::rng::derive_seed;

impl OptionValuator<'_> {
    /// Prices across `n_workers` rayon tasks with derived sub-streams.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidArgument`] if `n_workers` is 0
    /// - [`PricingError::GeneratorBusy`] if the shared generator is mutably
    ///   borrowed (its parameters cannot be read)
    /// - the first computation fault in worker order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use pricer_mc::mc::{OptionValuator, PathGenerator, Payoff, SimulationParameters};
    /// use pricer_mc::path_dependent::OptionStyle;
    ///
    /// let params = SimulationParameters::default();
    /// let generator = RefCell::new(PathGenerator::new(params, 0).unwrap());
    /// let valuator = OptionValuator::new(
    ///     OptionStyle::VanillaEuropean, 50.0, Payoff::Call, &generator, 20_000,
    /// ).unwrap();
    ///
    /// let a = valuator.price_parallel(42, 4).unwrap();
    /// let b = valuator.price_parallel(42, 4).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn price_parallel(
        &self,
        master_seed: u64,
        n_workers: usize,
    ) -> Result<PricingResult, PricingError> {
        if n_workers == 0 {
            return Err(PricingError::invalid("n_workers", "must be at least 1, got 0"));
        }

        let params = *self
            .generator()
            .try_borrow()
            .map_err(|_| PricingError::GeneratorBusy)?
            .parameters();

        let (style, payoff, strike) = (self.style(), self.payoff(), self.strike());
        let n_paths = self.n_paths();
        let base = n_paths / n_workers;
        let remainder = n_paths % n_workers;

        debug!(
            style = %style,
            n_paths,
            n_workers,
            master_seed,
            "parallel pricing started"
        );

        let batches = (0..n_workers)
            .into_par_iter()
            .map(|worker| -> Result<PayoffAccumulator, PricingError> {
                let count = base + usize::from(worker < remainder);
                if count == 0 {
                    return Ok(PayoffAccumulator::default());
                }
                let seed = derive_seed(master_seed, worker as u64);
                let mut generator = PathGenerator::new(params, seed)?;
                simulate_payoffs(&mut generator, style, payoff, strike, count)
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        let mut total = PayoffAccumulator::default();
        for batch in &batches {
            total.merge(batch);
        }
        debug_assert_eq!(total.count(), n_paths);

        let result = total.finish(params.discount_factor())?;
        debug!(price = result.price, std_error = result.std_error, "parallel pricing finished");
        Ok(result)
    }
}
