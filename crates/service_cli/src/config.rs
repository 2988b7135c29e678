//! CLI configuration management.
//!
//! Loads the pricing scenario, sweep grids and report settings from a TOML
//! file. Every section and field is optional and falls back to the reference
//! scenario:
//!
//! ```toml
//! [scenario]
//! spot = 50.0
//! volatility = 0.3
//! rate = 0.05
//! dt = 0.02
//! n_steps = 50
//! strike = 50.0
//! n_paths = 100000
//! payoff = "call"
//!
//! [sweep.spot]
//! start = 10.0
//! end = 100.0
//! step = 5.0
//!
//! [sweep.volatility]
//! start = 0.0
//! end = 0.5
//! step = 0.025
//!
//! [output]
//! precision = 3
//! directory = "."
//! ```

use std::path::{Path, PathBuf};

use pricer_mc::{Payoff, SimulationParameters};
use serde::Deserialize;
use thiserror::Error;

/// Tolerance absorbing floating-point error when counting grid points.
const GRID_EPSILON: f64 = 1e-9;

/// Largest number of points a sweep grid may expand to.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Pricing scenario shared by all commands.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Initial spot price
    pub spot: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Time-step size in years
    pub dt: f64,
    /// Number of time steps per path
    pub n_steps: usize,
    /// Option strike
    pub strike: f64,
    /// Number of Monte Carlo paths per price
    pub n_paths: usize,
    /// Payoff applied to the path statistic
    pub payoff: Payoff,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: 50.0,
            volatility: 0.3,
            rate: 0.05,
            dt: 1.0 / 50.0,
            n_steps: 50,
            strike: 50.0,
            n_paths: 100_000,
            payoff: Payoff::Call,
        }
    }
}

impl ScenarioConfig {
    /// Simulation parameters for the path generator.
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.spot, self.volatility, self.rate, self.dt, self.n_steps)
    }
}

/// Inclusive sweep grid `start, start + step, ..., end`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct SweepRange {
    /// First grid value
    pub start: f64,
    /// Last grid value (inclusive)
    pub end: f64,
    /// Grid spacing
    pub step: f64,
}

impl SweepRange {
    /// Creates a sweep range.
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Expands the range into grid points.
    ///
    /// Points are computed as `start + i * step` rather than by repeated
    /// addition, so `end` is reached exactly when it lies on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any bound is not finite, the
    /// step is not strictly positive, `end < start`, or the grid would have
    /// more than [`MAX_SWEEP_POINTS`] points.
    pub fn points(&self) -> Result<Vec<f64>, ConfigError> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(ConfigError::Validation(vec![format!(
                "sweep bounds must be finite, got {:?}",
                self
            )]));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::Validation(vec![format!(
                "sweep step must be positive, got {}",
                self.step
            )]));
        }
        if self.end < self.start {
            return Err(ConfigError::Validation(vec![format!(
                "sweep end {} is below start {}",
                self.end, self.start
            )]));
        }

        let intervals = ((self.end - self.start) / self.step + GRID_EPSILON).floor();
        if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
            return Err(ConfigError::Validation(vec![format!(
                "sweep from {} to {} with step {} exceeds {} points",
                self.start, self.end, self.step, MAX_SWEEP_POINTS
            )]));
        }

        let n = intervals as usize + 1;
        Ok((0..n).map(|i| self.start + i as f64 * self.step).collect())
    }
}

fn default_spot_sweep() -> SweepRange {
    SweepRange::new(10.0, 100.0, 5.0)
}

fn default_volatility_sweep() -> SweepRange {
    SweepRange::new(0.0, 0.5, 0.025)
}

/// Sweep grids per swept parameter.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct SweepConfig {
    /// Spot grid
    #[serde(default = "default_spot_sweep")]
    pub spot: SweepRange,
    /// Volatility grid
    #[serde(default = "default_volatility_sweep")]
    pub volatility: SweepRange,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            spot: default_spot_sweep(),
            volatility: default_volatility_sweep(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Fixed decimal places in CSV reports
    pub precision: usize,
    /// Directory for reports written under their default names
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            directory: PathBuf::from("."),
        }
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Pricing scenario
    pub scenario: ScenarioConfig,
    /// Sweep grids
    pub sweep: SweepConfig,
    /// Report settings
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` when given, otherwise the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.scenario.parameters().validate() {
            errors.push(e.to_string());
        }

        if !self.scenario.strike.is_finite() {
            errors.push(format!("strike must be finite, got {}", self.scenario.strike));
        }

        if self.scenario.n_paths == 0 {
            errors.push("n_paths must be greater than 0".to_string());
        }

        for range in [&self.sweep.spot, &self.sweep.volatility] {
            if let Err(ConfigError::Validation(mut e)) = range.points() {
                errors.append(&mut e);
            }
        }

        if self.output.precision > 17 {
            errors.push(format!(
                "precision {} exceeds f64 significance (17)",
                self.output.precision
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration and validate
    pub fn load_and_validate(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
