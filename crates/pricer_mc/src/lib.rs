//! # Monte Carlo Option Pricer
//!
//! Prices European and Asian options by simulating Geometric Brownian Motion.
//!
//! ## Components
//!
//! - [`rng`]: seeded standard-normal streams and worker sub-streams
//! - [`mc`]: [`PathGenerator`], [`Payoff`], [`OptionValuator`] and errors
//! - [`path_dependent`]: [`OptionStyle`] statistic extraction (terminal,
//!   arithmetic mean, geometric mean)
//! - [`analytical`]: Black-Scholes and discrete geometric Asian closed forms
//!
//! ## Usage Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use pricer_mc::{OptionStyle, OptionValuator, PathGenerator, Payoff, SimulationParameters};
//!
//! let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
//! let generator = RefCell::new(PathGenerator::new(params, 42).unwrap());
//!
//! for style in OptionStyle::ALL {
//!     let valuator = OptionValuator::new(style, 50.0, Payoff::Call, &generator, 10_000).unwrap();
//!     let price = valuator.price().unwrap();
//!     assert!(price > 0.0);
//! }
//! ```
//!
//! ## Determinism
//!
//! The kernel never reads the clock. Every result is a function of the seed
//! passed to [`PathGenerator::new`] / [`PathGenerator::seed`] and the
//! sequence of calls made against the generator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod mc;
pub mod path_dependent;
pub mod rng;

pub use mc::{
    OptionValuator, PathGenerator, Payoff, PricingError, PricingResult, SimulationParameters,
};
pub use path_dependent::OptionStyle;
