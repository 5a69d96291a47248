//! Path generation for Monte Carlo simulation.
//!
//! Geometric Brownian Motion paths are produced with the log-space (exact)
//! scheme:
//!
//! ```text
//! S(t+Δt) = S(t) × exp((r − σ²/2)Δt + σ√Δt × Z)
//! ```
//!
//! # Memory Layout
//!
//! A [`PathSet`] stores paths in row-major order:
//! `values[path_idx * (n_steps + 1) + step_idx]`, where `step_idx = 0`
//! holds the initial spot price.

use super::error::ConfigError;
use super::workspace::PathWorkspace;
use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// Under the risk-neutral measure the asset follows
/// `dS = r S dt + σ S dW`.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert!(params.validate().is_ok());
/// assert!(GbmParams::new(100.0, 0.05, -0.2, 1.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Time to maturity (T) in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first offending
    /// field when spot is not positive, volatility is negative, maturity is
    /// not positive, or any value is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(ConfigError::parameter(
                "spot",
                self.spot,
                "must be positive and finite",
            ));
        }
        if !self.rate.is_finite() {
            return Err(ConfigError::parameter("rate", self.rate, "must be finite"));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(ConfigError::parameter(
                "volatility",
                self.volatility,
                "must be non-negative and finite",
            ));
        }
        if !(self.maturity > 0.0 && self.maturity.is_finite()) {
            return Err(ConfigError::parameter(
                "maturity",
                self.maturity,
                "must be positive and finite",
            ));
        }
        Ok(())
    }

    /// Returns the risk-neutral discount factor `exp(−rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Per-step constants of the discretised GBM.
///
/// Computed once per simulation so the inner loop is one fused
/// multiply-add and one `exp`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    /// `(r − σ²/2)·Δt`
    pub drift_dt: f64,
    /// `σ·√Δt`
    pub vol_sqrt_dt: f64,
}

impl GbmStep {
    /// Precomputes the step constants for `n_steps` steps over the maturity.
    #[inline]
    pub fn new(params: GbmParams, n_steps: usize) -> Self {
        let dt = params.maturity / n_steps as f64;
        let drift = params.rate - 0.5 * params.volatility * params.volatility;

        Self {
            drift_dt: drift * dt,
            vol_sqrt_dt: params.volatility * dt.sqrt(),
        }
    }

    /// Advances a price by one step given a standard normal shock.
    #[inline]
    pub fn advance(&self, price: f64, z: f64) -> f64 {
        price * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}

/// Writes one path into `out` from pre-drawn shocks.
///
/// `out` must have length `shocks.len() + 1`; `out[0]` is set to `spot`.
#[inline]
pub fn fill_path(step: &GbmStep, spot: f64, shocks: &[f64], out: &mut [f64]) {
    debug_assert_eq!(out.len(), shocks.len() + 1);

    out[0] = spot;
    for (i, &z) in shocks.iter().enumerate() {
        out[i + 1] = step.advance(out[i], z);
    }
}

/// Generates a single GBM path of length `n_steps + 1`.
///
/// Draws exactly `n_steps` normals from `rng`.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::{generate_path, GbmParams};
/// use pricer_montecarlo::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let path = generate_path(&mut rng, GbmParams::default(), 100);
///
/// assert_eq!(path.len(), 101);
/// assert_eq!(path[0], 100.0);
/// ```
pub fn generate_path(rng: &mut PricerRng, params: GbmParams, n_steps: usize) -> Vec<f64> {
    let step = GbmStep::new(params, n_steps);
    let mut shocks = vec![0.0; n_steps];
    let mut path = vec![0.0; n_steps + 1];

    rng.fill_normal(&mut shocks);
    fill_path(&step, params.spot, &shocks, &mut path);
    path
}

/// Generates `n_paths` GBM paths into the workspace.
///
/// Shocks are drawn path by path, step by step, through one reusable
/// buffer, so the result equals `n_paths` consecutive calls to
/// [`generate_path`] on the same generator.
pub fn generate_gbm_paths(
    workspace: &mut PathWorkspace,
    rng: &mut PricerRng,
    params: GbmParams,
    n_paths: usize,
    n_steps: usize,
) {
    workspace.prepare(n_paths, n_steps);

    let step = GbmStep::new(params, n_steps);
    let (paths, shocks) = workspace.paths_mut_and_shocks();

    for path_idx in 0..n_paths {
        rng.fill_normal(shocks);
        fill_path(&step, params.spot, shocks, paths.path_mut(path_idx));
    }
}

/// Collection of simulated paths, each of length `n_steps + 1`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSet {
    values: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathSet {
    /// Creates a zero-filled collection.
    pub fn zeros(n_paths: usize, n_steps: usize) -> Self {
        Self {
            values: vec![0.0; n_paths * (n_steps + 1)],
            n_paths,
            n_steps,
        }
    }

    /// Wraps row-major path values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` when `values.len()` is not
    /// `n_paths * (n_steps + 1)`.
    pub fn from_values(
        values: Vec<f64>,
        n_paths: usize,
        n_steps: usize,
    ) -> Result<Self, ConfigError> {
        let expected = n_paths * (n_steps + 1);
        if values.len() != expected {
            return Err(ConfigError::InvalidParameter {
                name: "values",
                value: format!("length {} (expected {})", values.len(), expected),
            });
        }
        Ok(Self {
            values,
            n_paths,
            n_steps,
        })
    }

    /// Number of paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_paths
    }

    /// Returns `true` when the collection holds no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_paths == 0
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns path `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn path(&self, idx: usize) -> &[f64] {
        let width = self.n_steps + 1;
        &self.values[idx * width..(idx + 1) * width]
    }

    /// Returns path `idx`, or `None` when out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&[f64]> {
        (idx < self.n_paths).then(|| self.path(idx))
    }

    #[inline]
    pub(crate) fn path_mut(&mut self, idx: usize) -> &mut [f64] {
        let width = self.n_steps + 1;
        &mut self.values[idx * width..(idx + 1) * width]
    }

    /// Terminal price S_T of path `idx`.
    #[inline]
    pub fn terminal(&self, idx: usize) -> f64 {
        self.values[idx * (self.n_steps + 1) + self.n_steps]
    }

    /// Iterates over the paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.n_steps + 1)
    }

    /// Raw row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Extracts terminal prices, one per path.
#[inline]
pub fn terminal_prices(paths: &PathSet) -> Vec<f64> {
    (0..paths.len()).map(|idx| paths.terminal(idx)).collect()
}
