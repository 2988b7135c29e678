//! Monte Carlo option valuation.
//!
//! An [`OptionValuator`] binds a strike, a [`Payoff`], an [`OptionStyle`] and
//! a path count to a shared [`PathGenerator`]. Pricing draws `n_paths` paths
//! from the generator, reduces each to the style's statistic, averages the
//! payoffs and discounts by the generator's horizon.
//!
//! # Shared Generator
//!
//! The generator is owned by the caller and lent to valuators as
//! `&RefCell<PathGenerator>`, so several valuators can compare styles on the
//! same parameters. They then share one random stream: each pricing call
//! advances it, and two calls see the same paths only after an explicit
//! reseed.
//!
//! ```rust
//! use std::cell::RefCell;
//! use pricer_mc::mc::{OptionValuator, PathGenerator, Payoff, SimulationParameters};
//! use pricer_mc::path_dependent::OptionStyle;
//!
//! let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
//! let generator = RefCell::new(PathGenerator::new(params, 42).unwrap());
//!
//! let euro = OptionValuator::new(
//!     OptionStyle::VanillaEuropean,
//!     50.0,
//!     Payoff::Call,
//!     &generator,
//!     10_000,
//! )
//! .unwrap();
//! let asian = OptionValuator::new(
//!     OptionStyle::ArithmeticAsian,
//!     50.0,
//!     Payoff::Call,
//!     &generator,
//!     10_000,
//! )
//! .unwrap();
//!
//! let euro_price = euro.price().unwrap();
//! let asian_price = asian.price().unwrap();
//! assert!(asian_price < euro_price);
//! ```

use std::cell::RefCell;

use tracing::debug;

use super::error::PricingError;
use super::generator::PathGenerator;
use super::payoff::Payoff;
use super::result::{PayoffAccumulator, PricingResult};
use crate::path_dependent::OptionStyle;

/// Monte Carlo valuator for one option contract.
#[derive(Clone, Copy, Debug)]
pub struct OptionValuator<'a> {
    style: OptionStyle,
    strike: f64,
    payoff: Payoff,
    generator: &'a RefCell<PathGenerator>,
    n_paths: usize,
}

impl<'a> OptionValuator<'a> {
    /// Creates a valuator bound to `generator`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `n_paths` is 0 or
    /// `strike` is not finite. No simulation is performed.
    pub fn new(
        style: OptionStyle,
        strike: f64,
        payoff: Payoff,
        generator: &'a RefCell<PathGenerator>,
        n_paths: usize,
    ) -> Result<Self, PricingError> {
        if n_paths == 0 {
            return Err(PricingError::invalid("n_paths", "must be at least 1, got 0"));
        }
        if !strike.is_finite() {
            return Err(PricingError::invalid(
                "strike",
                format!("must be finite, got {}", strike),
            ));
        }

        Ok(Self {
            style,
            strike,
            payoff,
            generator,
            n_paths,
        })
    }

    /// Returns the option style.
    #[inline]
    pub fn style(&self) -> OptionStyle {
        self.style
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the payoff.
    #[inline]
    pub fn payoff(&self) -> Payoff {
        self.payoff
    }

    /// Returns the number of paths drawn per pricing call.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the generator this valuator draws from.
    #[inline]
    pub fn generator(&self) -> &'a RefCell<PathGenerator> {
        self.generator
    }

    /// Estimates the discounted expected payoff.
    ///
    /// Discounts by `exp(-r · n_steps · dt)` using the generator's parameters
    /// at call time, so a valuator follows `configure` calls made between
    /// pricings.
    ///
    /// # Errors
    ///
    /// - [`PricingError::GeneratorBusy`] if the generator is already borrowed
    /// - any computation fault raised by path generation or statistic
    ///   extraction; the call is aborted without a partial result
    pub fn price(&self) -> Result<f64, PricingError> {
        self.price_with_stats().map(|result| result.price)
    }

    /// Same as [`price`](Self::price), also reporting the standard error.
    ///
    /// Consumes the same draws and returns the same price as `price`.
    pub fn price_with_stats(&self) -> Result<PricingResult, PricingError> {
        let mut generator = self
            .generator
            .try_borrow_mut()
            .map_err(|_| PricingError::GeneratorBusy)?;

        debug!(
            style = %self.style,
            payoff = %self.payoff,
            strike = self.strike,
            n_paths = self.n_paths,
            "pricing started"
        );

        let acc = simulate_payoffs(
            &mut generator,
            self.style,
            self.payoff,
            self.strike,
            self.n_paths,
        )?;
        let result = acc.finish(generator.parameters().discount_factor())?;

        debug!(
            style = %self.style,
            price = result.price,
            std_error = result.std_error,
            "pricing finished"
        );
        Ok(result)
    }
}

/// Draws `n_paths` paths from `generator` and accumulates their payoffs.
pub(crate) fn simulate_payoffs(
    generator: &mut PathGenerator,
    style: OptionStyle,
    payoff: Payoff,
    strike: f64,
    n_paths: usize,
) -> Result<PayoffAccumulator, PricingError> {
    let mut acc = PayoffAccumulator::default();
    for _ in 0..n_paths {
        generator.generate()?;
        let statistic = style.statistic(generator.prices())?;
        acc.push(payoff.evaluate(statistic, strike));
    }
    Ok(acc)
}
