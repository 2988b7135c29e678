//! Error types for the Monte Carlo pricing kernel.
//!
//! Two failure families exist:
//!
//! - [`PricingError::InvalidArgument`]: a precondition on parameters, path
//!   counts or worker counts was violated. Detected at construction or at the
//!   start of an operation and never coerced.
//! - [`PricingError::ComputationFault`] / [`PricingError::NonFiniteStatistic`]:
//!   the simulation produced a value outside the domain of the recurrence
//!   (non-positive or non-finite). Surfaced from the failing operation and
//!   propagated unchanged.
//!
//! No variant carries a partial result.

use thiserror::Error;

/// Monte Carlo pricing error.
///
/// # Examples
///
/// ```
/// use pricer_mc::mc::PricingError;
///
/// let err = PricingError::invalid("n_paths", "must be at least 1, got 0");
/// assert!(err.to_string().contains("n_paths"));
/// assert!(err.is_invalid_argument());
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A precondition on an input was violated.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// A path value left the domain of the GBM recurrence.
    #[error("Computation fault at step {step}: path value {value} is not positive and finite")]
    ComputationFault {
        /// Index into the path buffer of the offending value.
        step: usize,
        /// The offending value.
        value: f64,
    },

    /// A per-path statistic or the final estimate is not finite.
    #[error("Computation fault: {statistic} evaluated to {value}")]
    NonFiniteStatistic {
        /// Name of the statistic that failed.
        statistic: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The shared path generator is already borrowed by another valuation.
    #[error("Path generator is busy: valuation is not reentrant on a shared generator")]
    GeneratorBusy,
}

impl PricingError {
    /// Creates an [`PricingError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for argument validation failures.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for numerical faults raised during simulation.
    #[inline]
    pub fn is_computation_fault(&self) -> bool {
        matches!(
            self,
            Self::ComputationFault { .. } | Self::NonFiniteStatistic { .. }
        )
    }
}
