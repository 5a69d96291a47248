//! # Random Number Generation
//!
//! Seedable generator used by every simulation in this crate.
//!
//! The generator is always owned by the caller and passed explicitly; there
//! is no global or thread-local instance. Two generators created from the
//! same seed yield the same sequence, so any simulation driven by them is
//! reproducible.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_montecarlo::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let uniform_value = rng.gen_uniform();
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
