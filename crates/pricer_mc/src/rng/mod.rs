//! # Random Number Generation
//!
//! Seeded standard-normal streams for path generation.
//!
//! - **Reproducibility**: every stream is created from an explicit seed; there
//!   is no hidden wall-clock entropy in the kernel
//! - **Batch draws**: `fill_normal` writes into caller-owned `&mut [f64]`
//!   buffers, consuming draws in buffer order
//! - **Sub-streams**: parallel valuation seeds each worker from a SplitMix64
//!   mix of `(master seed, worker index)`
//!
//! ```rust
//! use pricer_mc::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
pub(crate) use prng::derive_seed;
