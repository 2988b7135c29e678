//! Monte Carlo path generation and option valuation.
//!
//! # Architecture
//!
//! ```text
//! driver
//! ├── RefCell<PathGenerator>   (owned; parameters, PricerRng, path buffer)
//! ├── Payoff                   (Call | Put)
//! └── OptionValuator<'_> ×N    (style, strike, n_paths, &generator)
//!     └── price()
//!         ├── generate()       × n_paths
//!         ├── OptionStyle::statistic()
//!         ├── Payoff::evaluate()
//!         └── mean · exp(-r · n_steps · dt)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use pricer_mc::mc::{OptionValuator, PathGenerator, Payoff, SimulationParameters};
//! use pricer_mc::path_dependent::OptionStyle;
//!
//! let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
//! let generator = RefCell::new(PathGenerator::new(params, 42).unwrap());
//!
//! let valuator = OptionValuator::new(
//!     OptionStyle::GeometricAsian,
//!     50.0,
//!     Payoff::Call,
//!     &generator,
//!     10_000,
//! )
//! .unwrap();
//!
//! let result = valuator.price_with_stats().unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95());
//!
//! // Sweep the same valuator over a new spot
//! generator.borrow_mut().configure(params.with_spot(60.0)).unwrap();
//! let higher = valuator.price().unwrap();
//! assert!(higher > result.price);
//! ```

pub mod error;
pub mod generator;
pub mod parallel;
pub mod params;
pub mod payoff;
pub mod result;
pub mod valuator;

pub use error::PricingError;
pub use generator::PathGenerator;
pub use params::SimulationParameters;
pub use payoff::Payoff;
pub use result::PricingResult;
pub use valuator::OptionValuator;
