//! mcprice - Command Line Monte Carlo Option Pricing
//!
//! Operational entry point for the `pricer_mc` kernel.
//!
//! # Commands
//!
//! - `mcprice price [--put] [--paths N]` - Price the scenario as European,
//!   arithmetic Asian and geometric Asian options
//! - `mcprice sweep --parameter <spot|volatility>` - Write a price-vs-parameter
//!   CSV report
//!
//! Without `--seed` the generator is seeded from the wall clock; the seed in
//! use is always logged so any run can be replayed.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use pricer_mc::Payoff;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sweep::SweepParameter;
use config::CliConfig;

/// Monte Carlo Option Pricing CLI
#[derive(Parser)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML); built-in defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Generator seed; the wall clock when omitted
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price European, arithmetic Asian and geometric Asian options
    Price {
        /// Price puts instead of the configured payoff
        #[arg(long)]
        put: bool,

        /// Number of Monte Carlo paths per option
        #[arg(short, long)]
        paths: Option<usize>,
    },

    /// Sweep the European price over spot or volatility
    Sweep {
        /// Parameter to vary
        #[arg(short = 'P', long, value_enum)]
        parameter: SweepParameter,

        /// Output CSV file (defaults to the parameter's report name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Wall-clock nanoseconds since the epoch, truncated to 64 bits.
fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = CliConfig::load_and_validate(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("failed to load configuration from {}", path.display()),
            None => "invalid default configuration".to_string(),
        }
    })?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, explicit = cli.seed.is_some(), "Generator seed");

    match cli.command {
        Commands::Price { put, paths } => {
            if put {
                config.scenario.payoff = Payoff::Put;
            }
            if let Some(paths) = paths {
                config.scenario.n_paths = paths;
            }
            commands::price::run(&config.scenario, seed).context("price command failed")
        }
        Commands::Sweep { parameter, output } => {
            commands::sweep::run(&config, parameter, output.as_deref(), seed)
                .map(|_| ())
                .with_context(|| format!("{} sweep failed", parameter))
        }
    }
}
