//! Vanilla CLI - Command Line Operations for European Option Pricing
//!
//! This is the operational entry point for the pricing workspace.
//!
//! # Commands
//!
//! - `vanilla price --model <closed-form|lattice|monte-carlo|all>` - Price the
//!   configured option and report delta and compute time
//! - `vanilla tree --points N` - Print the terminal layer of a small lattice
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration
//! (TOML file, `VANILLA_*` environment variables, flags) into the pricer
//! crates and owns the tracing subscriber.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_core::types::OptionType;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::ModelChoice;
use commands::OutputFormat;
use config::{build_config, CliArgs};

/// European option pricing CLI
#[derive(Parser)]
#[command(name = "vanilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the configured option
    Price {
        /// Pricing model
        #[arg(short, long, value_enum, default_value = "all")]
        model: ModelChoice,

        /// Option type override (call or put)
        #[arg(short = 't', long)]
        option_type: Option<OptionType>,

        /// Spot price override
        #[arg(long)]
        spot: Option<f64>,

        /// Strike override
        #[arg(long)]
        strike: Option<f64>,

        /// Number of Monte Carlo scenarios
        #[arg(short = 'n', long)]
        num_scenarios: Option<usize>,

        /// Run Monte Carlo scenarios on the worker pool
        #[arg(short, long)]
        parallel: bool,
    },

    /// Print the terminal layer of a small binomial lattice
    Tree {
        /// Number of time points, including today
        #[arg(short, long, default_value = "5")]
        points: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
    }

    let mut args = CliArgs {
        config_file: cli.config.clone(),
        verbose: cli.verbose,
        ..CliArgs::default()
    };
    if let Commands::Price {
        option_type,
        spot,
        strike,
        num_scenarios,
        parallel,
        ..
    } = &cli.command
    {
        args.option_type = *option_type;
        args.spot = *spot;
        args.strike = *strike;
        args.n_scenarios = *num_scenarios;
        args.parallel = *parallel;
    }

    let config = build_config(&args)?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Price { model, .. } => commands::price::run(&config, model, cli.format),
        Commands::Tree { points } => commands::tree::run(&config, points, cli.format),
    }
}
