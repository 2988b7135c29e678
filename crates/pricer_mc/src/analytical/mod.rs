//! Analytical (closed-form) reference prices.
//!
//! Used to verify Monte Carlo estimates where a closed form exists.
//!
//! # Available Solutions
//!
//! - **European options**: Black-Scholes
//! - **Geometric Average Asian options**: discrete-sampling closed form on the
//!   path generator's grid (including `S₀`)
//!
//! There is no closed form for the arithmetic Asian option.
//!
//! ```rust
//! use pricer_mc::analytical::{black_scholes_price, geometric_asian_price};
//! use pricer_mc::mc::{Payoff, SimulationParameters};
//!
//! let params = SimulationParameters::new(50.0, 0.3, 0.05, 1.0 / 50.0, 50);
//!
//! let maturity = params.maturity();
//! let european = black_scholes_price(Payoff::Call, 50.0, 50.0, 0.05, 0.3, maturity).unwrap();
//! let geometric = geometric_asian_price(Payoff::Call, &params, 50.0).unwrap();
//! assert!(geometric < european);
//! ```

pub mod asian;
pub mod black_scholes;
pub mod distributions;

pub use asian::{geometric_asian_price, GeometricAverageMoments};
pub use black_scholes::black_scholes_price;
pub use distributions::norm_cdf;
