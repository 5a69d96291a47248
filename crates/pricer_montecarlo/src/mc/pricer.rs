//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`])
//! 2. Path generation (via [`generate_gbm_paths`])
//! 3. Payoff computation (via [`compute_payoffs`])
//! 4. Discounting and aggregation (via [`discounted_mean`])

use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::paths::{generate_gbm_paths, GbmParams};
use super::payoff::{compute_payoffs, PayoffParams, PayoffType};
use super::simulation::{Simulation, SimulationParams};
use super::workspace::PathWorkspace;
use crate::rng::PricerRng;

/// Discounted Monte Carlo estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::PricingResult;
///
/// let result = PricingResult { price: 8.0, std_error: 0.05 };
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Discounted sample mean of `payoffs` with its standard error.
///
/// `price = discount_factor · mean(payoffs)`. The standard error uses the
/// unbiased (n − 1) variance and is zero for fewer than two samples.
/// An empty slice yields the default (zero) result.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::discounted_mean;
///
/// let result = discounted_mean(&[0.0, 10.0], 0.5);
/// assert_eq!(result.price, 2.5);
/// ```
pub fn discounted_mean(payoffs: &[f64], discount_factor: f64) -> PricingResult {
    let n = payoffs.len();
    if n == 0 {
        return PricingResult::default();
    }

    let mean = payoffs.iter().sum::<f64>() / n as f64;

    let std_error = if n > 1 {
        let variance =
            payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt() / (n as f64).sqrt()
    } else {
        0.0
    };

    PricingResult {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
    }
}

/// Monte Carlo pricing engine.
///
/// Owns its configuration, a reusable [`PathWorkspace`] and the random
/// generator, so consecutive calls continue the same random stream.
/// Use [`reset`](Self::reset) to replay from the seed.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(5_000)
///     .n_steps(20)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
/// let result = pricer
///     .price_european(GbmParams::default(), PayoffParams::call(100.0))
///     .unwrap();
///
/// println!("Price: {:.4} +/- {:.4}", result.price, result.confidence_95());
/// ```
#[derive(Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    workspace: PathWorkspace,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a pricer; the generator is seeded from the configuration, or
    /// from entropy when the configuration carries no seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        let rng = PricerRng::from_optional_seed(config.seed());
        Self::with_rng(config, rng)
    }

    /// Creates a pricer that draws from the given generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_rng(config: MonteCarloConfig, rng: PricerRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let workspace = PathWorkspace::new(config.n_paths(), config.n_steps());

        Ok(Self {
            config,
            workspace,
            rng,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the seed of the generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Rewinds the generator to its seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.rng.seed());
    }

    /// Prices a single European payoff.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the GBM parameters or the strike are invalid.
    pub fn price_european(
        &mut self,
        gbm: GbmParams,
        payoff: PayoffParams,
    ) -> Result<PricingResult, ConfigError> {
        gbm.validate()?;
        payoff.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();

        generate_gbm_paths(&mut self.workspace, &mut self.rng, gbm, n_paths, n_steps);

        let (paths, calls, puts) = self.workspace.paths_and_payoffs_mut();
        let out = match payoff.payoff_type {
            PayoffType::Call => calls,
            PayoffType::Put => puts,
        };
        compute_payoffs(paths, payoff, out);

        Ok(discounted_mean(out, gbm.discount_factor()))
    }

    /// Simulates one set of paths and prices both the call and the put on it.
    ///
    /// The returned [`Simulation`] owns the generated paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the GBM parameters or strike are invalid.
    pub fn simulate(&mut self, params: SimulationParams) -> Result<Simulation, ConfigError> {
        params.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let seed = self.rng.seed();
        let gbm = params.gbm;

        debug!(n_paths, n_steps, seed, "Simulating GBM paths");

        generate_gbm_paths(&mut self.workspace, &mut self.rng, gbm, n_paths, n_steps);

        let (paths, calls, puts) = self.workspace.paths_and_payoffs_mut();
        compute_payoffs(paths, params.call_payoff(), calls);
        compute_payoffs(paths, params.put_payoff(), puts);

        let discount_factor = gbm.discount_factor();
        let call = discounted_mean(calls, discount_factor);
        let put = discounted_mean(puts, discount_factor);

        debug!(
            call = call.price,
            call_se = call.std_error,
            put = put.price,
            put_se = put.std_error,
            "Discounted payoff means"
        );

        Ok(Simulation::new(
            params,
            self.workspace.take_paths(),
            call,
            put,
            discount_factor,
            seed,
        ))
    }
}
