//! Monte Carlo pricing kernel for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path/step counts, seed)
//! ├── PathWorkspace     (reusable buffers)
//! ├── PricerRng         (explicitly owned generator)
//! └── Orchestration
//!     ├── generate_gbm_paths()
//!     ├── compute_payoffs()
//!     └── discounted_mean()
//! ```
//!
//! # Examples
//!
//! ## Pricing a call and a put on the same paths
//!
//! ```rust
//! use pricer_montecarlo::mc::{
//!     GbmParams, MonteCarloConfig, MonteCarloPricer, SimulationParams,
//! };
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//! let params = SimulationParams::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 105.0);
//!
//! let simulation = pricer.simulate(params).unwrap();
//! println!("Call: {:.4} +/- {:.4}", simulation.call().price, simulation.call().std_error);
//! println!("Put:  {:.4} +/- {:.4}", simulation.put().price, simulation.put().std_error);
//! ```
//!
//! ## Pricing a single payoff
//!
//! ```rust
//! use pricer_montecarlo::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//! let result = pricer
//!     .price_european(GbmParams::default(), PayoffParams::put(100.0))
//!     .unwrap();
//! assert!(result.price > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod simulation;
pub mod workspace;

pub use config::{
    path_buffer_len, MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_PATH_VALUES,
    MAX_SEED, MAX_STEPS,
};
pub use error::ConfigError;
pub use paths::{
    fill_path, generate_gbm_paths, generate_path, terminal_prices, GbmParams, GbmStep, PathSet,
};
pub use payoff::{compute_payoffs, PayoffParams, PayoffType};
pub use pricer::{discounted_mean, MonteCarloPricer, PricingResult};
pub use simulation::{simulate_and_price, Simulation, SimulationParams};
pub use workspace::PathWorkspace;
