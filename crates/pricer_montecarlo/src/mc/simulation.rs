//! Simulate-and-price: one run from parameters to prices and paths.

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::paths::{GbmParams, PathSet};
use super::payoff::PayoffParams;
use super::pricer::{MonteCarloPricer, PricingResult};

/// Run parameters: the GBM model plus the option strike.
///
/// Path and step counts live in [`MonteCarloConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParams {
    /// Asset model parameters (S0, r, σ, T).
    pub gbm: GbmParams,
    /// Strike price (K), shared by the call and the put.
    pub strike: f64,
}

impl SimulationParams {
    /// Creates run parameters.
    #[inline]
    pub fn new(gbm: GbmParams, strike: f64) -> Self {
        Self { gbm, strike }
    }

    /// Validates the model parameters and the strike.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gbm.validate()?;
        self.call_payoff().validate()
    }

    /// Call payoff at this strike.
    #[inline]
    pub fn call_payoff(&self) -> PayoffParams {
        PayoffParams::call(self.strike)
    }

    /// Put payoff at this strike.
    #[inline]
    pub fn put_payoff(&self) -> PayoffParams {
        PayoffParams::put(self.strike)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gbm: GbmParams::default(),
            strike: 105.0,
        }
    }
}

/// Result of one simulate-and-price run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Simulation {
    params: SimulationParams,
    paths: PathSet,
    call: PricingResult,
    put: PricingResult,
    discount_factor: f64,
    seed: u64,
}

impl Simulation {
    pub(crate) fn new(
        params: SimulationParams,
        paths: PathSet,
        call: PricingResult,
        put: PricingResult,
        discount_factor: f64,
        seed: u64,
    ) -> Self {
        Self {
            params,
            paths,
            call,
            put,
            discount_factor,
            seed,
        }
    }

    /// Parameters the run used.
    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// All simulated paths.
    #[inline]
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Call price estimate.
    #[inline]
    pub fn call(&self) -> &PricingResult {
        &self.call
    }

    /// Put price estimate.
    #[inline]
    pub fn put(&self) -> &PricingResult {
        &self.put
    }

    /// Discount factor `exp(−rT)` applied to both payoffs.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Seed of the generator that produced the paths.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Put-call parity residual `(C − P) − (S0 − K·e^{−rT})`.
    ///
    /// Non-zero only through sampling error of the mean terminal price.
    pub fn parity_gap(&self) -> f64 {
        let forward_value =
            self.params.gbm.spot - self.params.strike * self.discount_factor;
        (self.call.price - self.put.price) - forward_value
    }
}

/// Simulates paths and prices the call and put in one call.
///
/// A fresh [`MonteCarloPricer`] is built from `config`, so a seeded config
/// always yields the same [`Simulation`].
///
/// # Errors
///
/// Returns `ConfigError` if the configuration or the parameters are invalid.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::{simulate_and_price, MonteCarloConfig, SimulationParams};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(500)
///     .n_steps(10)
///     .seed(1)
///     .build()
///     .unwrap();
///
/// let a = simulate_and_price(&SimulationParams::default(), &config).unwrap();
/// let b = simulate_and_price(&SimulationParams::default(), &config).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn simulate_and_price(
    params: &SimulationParams,
    config: &MonteCarloConfig,
) -> Result<Simulation, ConfigError> {
    let mut pricer = MonteCarloPricer::new(config.clone())?;
    pricer.simulate(*params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(n_paths: usize, n_steps: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_params_match_reference_run() {
        let params = SimulationParams::default();
        assert_eq!(params.gbm, GbmParams::new(100.0, 0.05, 0.2, 1.0));
        assert_eq!(params.strike, 105.0);
    }

    #[test]
    fn test_strike_validation() {
        let mut params = SimulationParams::default();
        params.strike = -1.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "strike", .. })
        ));

        params.strike = f64::NAN;
        assert!(params.validate().is_err());

        params.strike = 0.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_simulation_shape() {
        let simulation = simulate_and_price(&SimulationParams::default(), &config(200, 30)).unwrap();

        assert_eq!(simulation.paths().len(), 200);
        assert_eq!(simulation.paths().n_steps(), 30);
        assert_eq!(simulation.seed(), 42);
        assert_relative_eq!(simulation.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);

        for path in simulation.paths().iter() {
            assert_eq!(path[0], 100.0);
        }
    }

    #[test]
    fn test_prices_non_negative() {
        let simulation = simulate_and_price(&SimulationParams::default(), &config(100, 10)).unwrap();

        assert!(simulation.call().price >= 0.0);
        assert!(simulation.put().price >= 0.0);
        assert!(simulation.call().std_error >= 0.0);
        assert!(simulation.put().std_error >= 0.0);
    }

    #[test]
    fn test_parity_gap_equals_discounted_forward_error() {
        let simulation = simulate_and_price(&SimulationParams::default(), &config(1_000, 10)).unwrap();

        // C − P = e^{−rT}·mean(S_T − K) exactly, path by path
        let n = simulation.paths().len() as f64;
        let mean_terminal = (0..simulation.paths().len())
            .map(|idx| simulation.paths().terminal(idx))
            .sum::<f64>()
            / n;
        let df = simulation.discount_factor();
        let expected_gap = df * mean_terminal - 100.0;

        assert_relative_eq!(simulation.parity_gap(), expected_gap, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = SimulationParams::new(GbmParams::new(100.0, 0.05, 0.2, 0.0), 105.0);
        assert!(matches!(
            simulate_and_price(&params, &config(10, 10)),
            Err(ConfigError::InvalidParameter { name: "maturity", .. })
        ));
    }

    #[test]
    fn test_single_path_run() {
        let simulation = simulate_and_price(&SimulationParams::default(), &config(1, 1)).unwrap();

        assert_eq!(simulation.paths().len(), 1);
        assert_eq!(simulation.call().std_error, 0.0);
        // Exactly one of call/put can be in the money
        assert!(simulation.call().price == 0.0 || simulation.put().price == 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_simulation_serde_round_trip() {
        let simulation = simulate_and_price(&SimulationParams::default(), &config(20, 5)).unwrap();

        let json = serde_json::to_string(&simulation).unwrap();
        let restored: Simulation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, simulation);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["params"]["strike"], 105.0);
        assert_eq!(value["call"]["price"], simulation.call().price);

        let payoff: PayoffParams =
            serde_json::from_str(r#"{"strike":100.0,"payoff_type":"put"}"#).unwrap();
        assert_eq!(payoff, PayoffParams::put(100.0));
    }
}
