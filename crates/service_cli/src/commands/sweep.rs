//! Sweep command implementation
//!
//! Reprices the European option over a grid of spot or volatility values
//! and writes a `value,price` CSV report. One valuator is reused for the
//! whole grid; each point reconfigures the shared generator before pricing.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use pricer_mc::{OptionStyle, OptionValuator, PathGenerator, SimulationParameters};
use tracing::{debug, info};

use crate::config::{CliConfig, ScenarioConfig, SweepConfig, SweepRange};
use crate::Result;

/// Scenario parameter varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SweepParameter {
    /// Initial spot price
    Spot,
    /// Volatility
    Volatility,
}

impl SweepParameter {
    /// Report file name used when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Spot => "prvsstockpr.csv",
            Self::Volatility => "prvsvolat.csv",
        }
    }

    /// Configured grid for this parameter.
    pub fn range(self, sweep: &SweepConfig) -> SweepRange {
        match self {
            Self::Spot => sweep.spot,
            Self::Volatility => sweep.volatility,
        }
    }

    /// `params` with this parameter set to `value`.
    pub fn apply(self, params: SimulationParameters, value: f64) -> SimulationParameters {
        match self {
            Self::Spot => params.with_spot(value),
            Self::Volatility => params.with_volatility(value),
        }
    }
}

impl std::fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spot => write!(f, "spot"),
            Self::Volatility => write!(f, "volatility"),
        }
    }
}

/// One grid point of a sweep report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    /// Swept parameter value
    pub value: f64,
    /// European option price at that value
    pub price: f64,
}

/// Prices the European option at every grid point.
///
/// All points draw from one generator stream seeded once with `seed`.
pub fn sweep(
    scenario: &ScenarioConfig,
    parameter: SweepParameter,
    points: &[f64],
    seed: u64,
) -> Result<Vec<SweepRow>> {
    let base = scenario.parameters();
    let generator = RefCell::new(PathGenerator::new(base, seed)?);
    let valuator = OptionValuator::new(
        OptionStyle::VanillaEuropean,
        scenario.strike,
        scenario.payoff,
        &generator,
        scenario.n_paths,
    )?;

    points
        .iter()
        .map(|&value| -> Result<SweepRow> {
            generator
                .borrow_mut()
                .configure(parameter.apply(base, value))?;
            let price = valuator.price()?;
            debug!(%parameter, value, price, "sweep point priced");
            Ok(SweepRow { value, price })
        })
        .collect()
}

/// Writes `value,price` rows with `precision` fixed decimals and no header.
pub fn write_report<W: io::Write>(writer: W, rows: &[SweepRow], precision: usize) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for row in rows {
        wtr.write_record([
            format!("{:.*}", precision, row.value),
            format!("{:.*}", precision, row.price),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Run the sweep command, returning the path of the written report
pub fn run(
    config: &CliConfig,
    parameter: SweepParameter,
    output: Option<&Path>,
    seed: u64,
) -> Result<PathBuf> {
    let range = parameter.range(&config.sweep);
    let points = range.points()?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            std::fs::create_dir_all(&config.output.directory)?;
            config.output.directory.join(parameter.default_file_name())
        }
    };

    info!("Starting {} sweep...", parameter);
    info!(
        "  Grid: {} to {} step {} ({} points)",
        range.start,
        range.end,
        range.step,
        points.len()
    );
    info!("  Monte Carlo paths: {}", config.scenario.n_paths);
    info!("  Seed: {}", seed);

    let rows = sweep(&config.scenario, parameter, &points, seed)?;
    let file = std::fs::File::create(&path)?;
    write_report(io::BufWriter::new(file), &rows, config.output.precision)?;

    info!("Sweep report written to {}", path.display());
    Ok(path)
}
