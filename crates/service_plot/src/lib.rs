//! # Path Chart
//!
//! Terminal rendering of simulated asset price paths.
//!
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ## Layout
//! - **Chart** (left three quarters): up to ten paths over `[0, T]`, the
//!   strike line and a `K` marker at expiration
//! - **Annotations** (right quarter): parameter box and the call/put estimates
//!
//! Chart data is built separately from drawing so it can be inspected and
//! rendered onto any backend:
//!
//! ```rust
//! use pricer_montecarlo::mc::{simulate_and_price, MonteCarloConfig, SimulationParams};
//! use service_plot::{PathChartData, DEFAULT_MAX_PATHS};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(100)
//!     .n_steps(20)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let simulation = simulate_and_price(&SimulationParams::default(), &config).unwrap();
//!
//! let data = PathChartData::from_simulation(&simulation, DEFAULT_MAX_PATHS);
//! assert_eq!(data.displayed_paths(), 10);
//! ```

pub mod app;
pub mod error;
pub mod screens;
pub mod visualisation;

pub use app::{show, PathChartApp};
pub use error::PlotError;
pub use screens::draw_path_chart;
pub use visualisation::{time_grid, ChartParameters, PathChartData, DEFAULT_MAX_PATHS};
