//! CLI configuration management.
//!
//! Handles loading of run parameters from a TOML file, environment
//! variable overrides, and command-line overrides, in that order.

use clap::Args;
use pricer_montecarlo::mc::{
    path_buffer_len, GbmParams, MonteCarloConfig, SimulationParams, MAX_PATHS, MAX_PATH_VALUES,
    MAX_SEED, MAX_STEPS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Option contract and market parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionSection {
    /// Initial asset price (S0)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub maturity: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
}

impl Default for OptionSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 105.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

/// Monte Carlo settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    /// Number of simulated paths
    pub n_paths: usize,
    /// Time steps per path
    pub n_steps: usize,
    /// Generator seed, at most `i64::MAX`; drawn from entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            n_paths: 1000,
            n_steps: 100,
            seed: None,
        }
    }
}

/// Chart settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    /// Maximum number of paths drawn
    pub max_paths: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            max_paths: service_plot::DEFAULT_MAX_PATHS,
        }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Option parameters
    pub option: OptionSection,
    /// Simulation settings
    pub simulation: SimulationSection,
    /// Chart settings
    pub display: DisplaySection,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            option: OptionSection::default(),
            simulation: SimulationSection::default(),
            display: DisplaySection::default(),
        }
    }
}

/// Parameter overrides accepted on the command line
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ParamOverrides {
    /// Initial asset price (S0)
    #[arg(long, global = true)]
    pub spot: Option<f64>,

    /// Strike price (K)
    #[arg(long, global = true)]
    pub strike: Option<f64>,

    /// Time to expiration in years (T)
    #[arg(long, global = true)]
    pub maturity: Option<f64>,

    /// Risk-free rate (r)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Volatility (σ)
    #[arg(long, global = true)]
    pub volatility: Option<f64>,

    /// Number of simulated paths
    #[arg(long, global = true)]
    pub paths: Option<usize>,

    /// Time steps per path
    #[arg(long, global = true)]
    pub steps: Option<usize>,

    /// Generator seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Maximum number of paths drawn on the chart
    #[arg(long, global = true)]
    pub display_paths: Option<usize>,
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `MCBS_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let option = &mut self.option;
        override_parsed(&lookup, "MCBS_SPOT", &mut option.spot);
        override_parsed(&lookup, "MCBS_STRIKE", &mut option.strike);
        override_parsed(&lookup, "MCBS_MATURITY", &mut option.maturity);
        override_parsed(&lookup, "MCBS_RATE", &mut option.rate);
        override_parsed(&lookup, "MCBS_VOLATILITY", &mut option.volatility);

        let simulation = &mut self.simulation;
        override_parsed(&lookup, "MCBS_PATHS", &mut simulation.n_paths);
        override_parsed(&lookup, "MCBS_STEPS", &mut simulation.n_steps);
        if let Some(seed) = parse_override(&lookup, "MCBS_SEED") {
            simulation.seed = Some(seed);
        }

        if let Some(log_level) = lookup("MCBS_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Apply command-line overrides
    pub fn with_cli_overrides(mut self, overrides: &ParamOverrides) -> Self {
        let option = &mut self.option;
        option.spot = overrides.spot.unwrap_or(option.spot);
        option.strike = overrides.strike.unwrap_or(option.strike);
        option.maturity = overrides.maturity.unwrap_or(option.maturity);
        option.rate = overrides.rate.unwrap_or(option.rate);
        option.volatility = overrides.volatility.unwrap_or(option.volatility);

        let simulation = &mut self.simulation;
        simulation.n_paths = overrides.paths.unwrap_or(simulation.n_paths);
        simulation.n_steps = overrides.steps.unwrap_or(simulation.n_steps);
        simulation.seed = overrides.seed.or(simulation.seed);

        self.display.max_paths = overrides.display_paths.unwrap_or(self.display.max_paths);

        self
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        let option = &self.option;
        if !(option.spot > 0.0 && option.spot.is_finite()) {
            errors.push(format!("spot must be positive and finite, got {}", option.spot));
        }
        if !(option.strike >= 0.0 && option.strike.is_finite()) {
            errors.push(format!(
                "strike must be non-negative and finite, got {}",
                option.strike
            ));
        }
        if !(option.maturity > 0.0 && option.maturity.is_finite()) {
            errors.push(format!(
                "maturity must be positive and finite, got {}",
                option.maturity
            ));
        }
        if !option.rate.is_finite() {
            errors.push(format!("rate must be finite, got {}", option.rate));
        }
        if !(option.volatility >= 0.0 && option.volatility.is_finite()) {
            errors.push(format!(
                "volatility must be non-negative and finite, got {}",
                option.volatility
            ));
        }

        let simulation = &self.simulation;
        let paths_in_range = (1..=MAX_PATHS).contains(&simulation.n_paths);
        let steps_in_range = (1..=MAX_STEPS).contains(&simulation.n_steps);
        if !paths_in_range {
            errors.push(format!(
                "n_paths {} out of range [1, {}]",
                simulation.n_paths, MAX_PATHS
            ));
        }
        if !steps_in_range {
            errors.push(format!(
                "n_steps {} out of range [1, {}]",
                simulation.n_steps, MAX_STEPS
            ));
        }
        if paths_in_range && steps_in_range {
            let fits = path_buffer_len(simulation.n_paths, simulation.n_steps)
                .is_some_and(|len| len <= MAX_PATH_VALUES);
            if !fits {
                errors.push(format!(
                    "n_paths x (n_steps + 1) = {} x {} exceeds the path buffer limit of {} prices",
                    simulation.n_paths,
                    simulation.n_steps + 1,
                    MAX_PATH_VALUES
                ));
            }
        }
        if let Some(seed) = simulation.seed {
            if seed > MAX_SEED {
                errors.push(format!("seed {} out of range [0, {}]", seed, MAX_SEED));
            }
        }

        if self.display.max_paths == 0 {
            errors.push("max_paths must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Model and strike for the pricer
    pub fn simulation_params(&self) -> SimulationParams {
        let option = &self.option;
        SimulationParams::new(
            GbmParams::new(option.spot, option.rate, option.volatility, option.maturity),
            option.strike,
        )
    }

    /// Path count, step count, and seed for the pricer
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, pricer_montecarlo::mc::ConfigError> {
        MonteCarloConfig::builder()
            .n_paths(self.simulation.n_paths)
            .n_steps(self.simulation.n_steps)
            .maybe_seed(self.simulation.seed)
            .build()
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialise(e.to_string()))
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = parse_override(lookup, key) {
        *target = value;
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration could not be written as TOML
    #[error("Serialisation error: {0}")]
    Serialise(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
