//! mcbs - Monte Carlo Black-Scholes option pricer
//!
//! Simulates geometric Brownian motion paths, prices a European call and put
//! from the same paths, and charts a sample of the paths in the terminal.
//!
//! # Commands
//!
//! - `mcbs` / `mcbs run` - Print the price estimates, then show the chart
//! - `mcbs price [--format plain|table|json]` - Print the estimates only
//! - `mcbs plot` - Show the chart only
//! - `mcbs check` - Validate and print the effective configuration
//!
//! # Configuration
//!
//! Built-in defaults are overridden by the TOML file given with `--config`,
//! then by `MCBS_*` environment variables, then by command-line flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::price::OutputFormat;
use config::{CliConfig, ParamOverrides};
pub use error::{CliError, Result};

/// Monte Carlo Black-Scholes option pricer
#[derive(Parser)]
#[command(name = "mcbs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "mcbs.toml")]
    config: PathBuf,

    #[command(flatten)]
    overrides: ParamOverrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the price estimates, then show the path chart
    Run,

    /// Price the call and put without charting
    Price {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// Show the path chart without printing the estimates
    Plot,

    /// Check the configuration
    Check,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let default_directive = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = CliConfig::load_or_default(&cli.config)?;
    let log_level =
        std::env::var("MCBS_LOG_LEVEL").unwrap_or_else(|_| file_config.log_level.clone());
    init_tracing(cli.verbose, &log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if cli.config.exists() {
        info!("Loaded configuration from {}", cli.config.display());
    } else {
        debug!("{} not found, using defaults", cli.config.display());
    }

    let config = file_config
        .with_env_override()
        .with_cli_overrides(&cli.overrides);
    config.validate()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(&config),
        Commands::Price { format } => commands::price::run(&config, format),
        Commands::Plot => commands::plot::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
