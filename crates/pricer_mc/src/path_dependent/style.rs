//! Option styles and their per-path statistics.

use crate::mc::PricingError;

/// Exercise/averaging style of an option.
///
/// Each style reduces a simulated path to the scalar the payoff is applied
/// to:
///
/// | Style | Statistic |
/// |-------|-----------|
/// | `VanillaEuropean` | `S[n]` |
/// | `ArithmeticAsian` | `(1/(n+1)) Σ S[i]` |
/// | `GeometricAsian` | `exp((1/(n+1)) Σ ln S[i])` |
///
/// Averages run over every entry of the path, including `S[0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OptionStyle {
    /// Payoff on the terminal price only.
    VanillaEuropean,
    /// Payoff on the arithmetic mean of the path.
    ArithmeticAsian,
    /// Payoff on the geometric mean of the path.
    GeometricAsian,
}

impl OptionStyle {
    /// All styles, in reporting order.
    pub const ALL: [OptionStyle; 3] = [
        OptionStyle::VanillaEuropean,
        OptionStyle::ArithmeticAsian,
        OptionStyle::GeometricAsian,
    ];

    /// Reduces `path` to the statistic this style pays on.
    ///
    /// The geometric mean is computed as the exponential of the mean log so
    /// long paths never form the raw product.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NonFiniteStatistic`] if the path is empty, the
    /// statistic is not finite, or (geometric mean only) any entry is not
    /// strictly positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_mc::path_dependent::OptionStyle;
    ///
    /// let path = [2.0, 8.0];
    /// assert_eq!(OptionStyle::VanillaEuropean.statistic(&path).unwrap(), 8.0);
    /// assert_eq!(OptionStyle::ArithmeticAsian.statistic(&path).unwrap(), 5.0);
    /// assert!((OptionStyle::GeometricAsian.statistic(&path).unwrap() - 4.0).abs() < 1e-12);
    /// ```
    pub fn statistic(self, path: &[f64]) -> Result<f64, PricingError> {
        let value = match (self, path.last()) {
            (_, None) => f64::NAN,
            (Self::VanillaEuropean, Some(&terminal)) => terminal,
            (Self::ArithmeticAsian, Some(_)) => path.iter().sum::<f64>() / path.len() as f64,
            (Self::GeometricAsian, Some(_)) => {
                // ln(0) = -inf would collapse the mean to exp(-inf) = 0
                if path.iter().any(|&price| price <= 0.0 || price.is_nan()) {
                    f64::NAN
                } else {
                    let log_sum: f64 = path.iter().map(|price| price.ln()).sum();
                    (log_sum / path.len() as f64).exp()
                }
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(PricingError::NonFiniteStatistic {
                statistic: self.statistic_name(),
                value,
            })
        }
    }

    /// Human-readable name of the statistic.
    pub fn statistic_name(self) -> &'static str {
        match self {
            Self::VanillaEuropean => "terminal price",
            Self::ArithmeticAsian => "arithmetic mean",
            Self::GeometricAsian => "geometric mean",
        }
    }
}

impl std::fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VanillaEuropean => write!(f, "European"),
            Self::ArithmeticAsian => write!(f, "Arithmetic Asian"),
            Self::GeometricAsian => write!(f, "Geometric Asian"),
        }
    }
}
