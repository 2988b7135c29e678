//! Terminal payoff functions.

/// Vanilla payoff applied to a path statistic.
///
/// Stateless; the strike is supplied at evaluation time so one payoff can be
/// shared by valuators with different strikes.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::Payoff;
///
/// assert_eq!(Payoff::Call.evaluate(55.0, 50.0), 5.0);
/// assert_eq!(Payoff::Put.evaluate(55.0, 50.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Payoff {
    /// max(S - K, 0)
    Call,
    /// max(K - S, 0)
    Put,
}

impl Payoff {
    /// Evaluates the payoff for a realised `price` and `strike`.
    #[inline]
    pub fn evaluate(self, price: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (price - strike).max(0.0),
            Self::Put => (strike - price).max(0.0),
        }
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}
