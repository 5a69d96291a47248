//! Closed-form solutions used to verify Monte Carlo estimates.
//!
//! - **European options**: Black-Scholes (1973)
//! - **Normal distribution**: Φ
//!
//! # Usage
//!
//! ```rust
//! use pricer_montecarlo::analytical::{bs_call, bs_put};
//! use pricer_montecarlo::mc::GbmParams;
//!
//! let gbm = GbmParams::new(100.0, 0.05, 0.2, 1.0);
//! let call = bs_call(&gbm, 105.0).unwrap();
//! let put = bs_put(&gbm, 105.0).unwrap();
//! assert!(call > put);
//! ```

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{bs_call, bs_put, BlackScholes};
pub use distributions::norm_cdf;
