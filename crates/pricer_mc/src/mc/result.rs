//! Pricing results and payoff accumulation.

use super::error::PricingError;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 5.6,
///     std_error: 0.02,
///     n_paths: 100_000,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Discounted standard error of the mean payoff.
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running payoff statistics for one batch of paths.
///
/// The plain `sum` drives the price so that the estimate is exactly
/// `Σ payoff / n`; the Welford pair `(mean, m2)` drives the standard error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PayoffAccumulator {
    count: usize,
    sum: f64,
    mean: f64,
    m2: f64,
}

impl PayoffAccumulator {
    #[inline]
    pub(crate) fn push(&mut self, payoff: f64) {
        self.count += 1;
        self.sum += payoff;
        let delta = payoff - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (payoff - self.mean);
    }

    /// Chan et al. pairwise combination; `other` is appended after `self`.
    pub(crate) fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / n;
        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.sum += other.sum;
        self.count += other.count;
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Discounts the accumulated payoffs into a [`PricingResult`].
    pub(crate) fn finish(&self, discount_factor: f64) -> Result<PricingResult, PricingError> {
        if self.count == 0 {
            return Err(PricingError::invalid("n_paths", "must be at least 1, got 0"));
        }

        let n = self.count as f64;
        let price = self.sum / n * discount_factor;
        if !price.is_finite() {
            return Err(PricingError::NonFiniteStatistic {
                statistic: "discounted price",
                value: price,
            });
        }

        let std_error = if self.count > 1 {
            (self.m2 / (n - 1.0)).sqrt() / n.sqrt() * discount_factor
        } else {
            0.0
        };

        Ok(PricingResult {
            price,
            std_error,
            n_paths: self.count,
        })
    }
}
