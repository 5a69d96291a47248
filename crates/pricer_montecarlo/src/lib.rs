//! # Monte Carlo Pricer (Kernel Layer)
//!
//! Numeric core of the `mcbs` workspace: European call and put prices
//! estimated by simulating geometric Brownian motion (GBM) paths.
//!
//! The crate has no display or I/O dependencies. Presentation lives in
//! `service_plot`, the command-line surface in `service_cli`.
//!
//! ## Pipeline
//!
//! ```text
//! SimulationParams + MonteCarloConfig
//!         │
//!         ▼
//! MonteCarloPricer ── PricerRng (seeded, owned)
//!   ├── generate_gbm_paths()   S_{i+1} = S_i · exp(drift·Δt + σ·√Δt·Z_i)
//!   ├── compute_payoffs()      max(S_T − K, 0) / max(K − S_T, 0)
//!   └── discounted_mean()      e^{−rT} · mean(payoffs)
//!         │
//!         ▼
//! Simulation { paths, call, put }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_montecarlo::{simulate_and_price, GbmParams, MonteCarloConfig, SimulationParams};
//!
//! let params = SimulationParams::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 105.0);
//! let config = MonteCarloConfig::builder()
//!     .n_paths(2_000)
//!     .n_steps(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulation = simulate_and_price(&params, &config).unwrap();
//! assert_eq!(simulation.paths().len(), 2_000);
//! assert!(simulation.call().price > 0.0);
//! assert!(simulation.put().price > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

// Random number generation
pub mod rng;

// Monte Carlo kernel: paths, payoffs, pricing
pub mod mc;

// Closed-form Black-Scholes for verification
pub mod analytical;

pub use analytical::{bs_call, bs_put, BlackScholes};
pub use mc::{
    simulate_and_price, ConfigError, GbmParams, MonteCarloConfig, MonteCarloPricer,
    PathSet, PayoffParams, PayoffType, PricingResult, Simulation, SimulationParams,
};
pub use rng::PricerRng;
