//! Error types for the mcbs CLI.

use thiserror::Error;

/// Result type alias using CliError
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read, parsed, or validated
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Simulation parameters rejected by the pricer
    #[error("Pricing error: {0}")]
    Pricing(#[from] pricer_montecarlo::mc::ConfigError),

    /// Chart could not be displayed
    #[error("Plot error: {0}")]
    Plot(#[from] service_plot::PlotError),

    /// Result serialisation failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
