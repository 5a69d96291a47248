//! Error types for the Monte Carlo kernel.

use thiserror::Error;

use super::config::{MAX_PATHS, MAX_PATH_VALUES, MAX_SEED, MAX_STEPS};

/// Configuration error for the Monte Carlo pricer.
///
/// Raised before any path is simulated, when counts or model parameters
/// are outside their valid ranges.
///
/// # Examples
///
/// ```
/// use pricer_montecarlo::mc::ConfigError;
///
/// let err = ConfigError::InvalidParameter {
///     name: "volatility",
///     value: "-0.2 (must be non-negative and finite)".to_string(),
/// };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Path buffer of `n_paths * (n_steps + 1)` prices above [`MAX_PATH_VALUES`].
    #[error(
        "Path buffer too large: {n_paths} paths x {n_steps} steps exceeds {max} prices",
        max = MAX_PATH_VALUES
    )]
    PathBufferTooLarge {
        /// Requested path count.
        n_paths: usize,
        /// Requested step count.
        n_steps: usize,
    },

    /// Seed above [`MAX_SEED`].
    #[error("Invalid seed {0}: must be at most {max}", max = MAX_SEED)]
    InvalidSeed(u64),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn parameter(name: &'static str, value: f64, requirement: &str) -> Self {
        Self::InvalidParameter {
            name,
            value: format!("{} ({})", value, requirement),
        }
    }
}
