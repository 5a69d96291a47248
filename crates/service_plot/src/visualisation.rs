//! Chart data for simulated asset price paths.
//!
//! Everything here is plain data derived from a [`Simulation`]; rendering
//! lives in [`crate::screens`].

use pricer_montecarlo::mc::Simulation;

/// Number of paths drawn when no explicit limit is configured.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Relative padding added above and below the plotted price range.
const Y_PADDING: f64 = 0.05;

/// `n_steps + 1` evenly spaced points from 0 to `maturity` inclusive.
///
/// # Examples
/// ```
/// use service_plot::time_grid;
///
/// assert_eq!(time_grid(1.0, 4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn time_grid(maturity: f64, n_steps: usize) -> Vec<f64> {
    if n_steps == 0 {
        return vec![0.0];
    }

    let dt = maturity / n_steps as f64;
    (0..=n_steps)
        .map(|i| if i == n_steps { maturity } else { i as f64 * dt })
        .collect()
}

/// Run parameters shown in the annotation box.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartParameters {
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
    /// Number of simulated paths
    pub n_paths: usize,
    /// Time steps per path
    pub n_steps: usize,
}

/// Everything needed to draw the path chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PathChartData {
    /// One `(time, price)` series per displayed path
    pub series: Vec<Vec<(f64, f64)>>,
    /// Horizontal strike line across the time axis
    pub strike_line: Vec<(f64, f64)>,
    /// Time axis bounds `[0, T]`
    pub x_bounds: [f64; 2],
    /// Price axis bounds, covering displayed paths and the strike
    pub y_bounds: [f64; 2],
    /// Run parameters
    pub parameters: ChartParameters,
    /// Discounted call estimate
    pub call_price: f64,
    /// Discounted put estimate
    pub put_price: f64,
}

impl PathChartData {
    /// Builds chart data from the first `min(max_paths, path count)` paths.
    pub fn from_simulation(simulation: &Simulation, max_paths: usize) -> Self {
        let params = simulation.params();
        let paths = simulation.paths();
        let maturity = params.gbm.maturity;

        let times = time_grid(maturity, paths.n_steps());
        let series: Vec<Vec<(f64, f64)>> = paths
            .iter()
            .take(max_paths)
            .map(|path| times.iter().copied().zip(path.iter().copied()).collect())
            .collect();

        let strike = params.strike;
        let y_bounds = price_bounds(&series, strike);

        Self {
            series,
            strike_line: vec![(0.0, strike), (maturity, strike)],
            x_bounds: [0.0, maturity],
            y_bounds,
            parameters: ChartParameters {
                spot: params.gbm.spot,
                strike,
                maturity,
                rate: params.gbm.rate,
                volatility: params.gbm.volatility,
                n_paths: paths.len(),
                n_steps: paths.n_steps(),
            },
            call_price: simulation.call().price,
            put_price: simulation.put().price,
        }
    }

    /// Number of displayed paths.
    #[inline]
    pub fn displayed_paths(&self) -> usize {
        self.series.len()
    }

    /// Legend entry for the strike line.
    pub fn strike_label(&self) -> String {
        format!("Strike Price (K) = {}", self.parameters.strike)
    }

    /// Lines of the parameter box.
    pub fn parameter_lines(&self) -> Vec<String> {
        let p = &self.parameters;
        vec![
            format!("S0 (Spot Price) = {}", p.spot),
            format!("K (Strike Price) = {}", p.strike),
            format!("T (Time to Expiration) = {}", p.maturity),
            format!("r (Risk-Free Rate) = {}", p.rate),
            format!("σ (Volatility) = {}", p.volatility),
            format!("Simulations = {}", p.n_paths),
            format!("Time Steps = {}", p.n_steps),
        ]
    }

    /// Call and put estimates, two decimals.
    pub fn price_lines(&self) -> [String; 2] {
        [
            format!("Call Option Price: {:.2}", self.call_price),
            format!("Put Option Price: {:.2}", self.put_price),
        ]
    }

    /// Time axis labels at both ends and the midpoint.
    pub fn x_labels(&self) -> [String; 3] {
        axis_labels(self.x_bounds, 2)
    }

    /// Price axis labels at both ends and the midpoint.
    pub fn y_labels(&self) -> [String; 3] {
        axis_labels(self.y_bounds, 1)
    }
}

fn axis_labels(bounds: [f64; 2], decimals: usize) -> [String; 3] {
    let [lo, hi] = bounds;
    [
        format!("{:.1$}", lo, decimals),
        format!("{:.1$}", (lo + hi) / 2.0, decimals),
        format!("{:.1$}", hi, decimals),
    ]
}

fn price_bounds(series: &[Vec<(f64, f64)>], strike: f64) -> [f64; 2] {
    let (min, max) = series
        .iter()
        .flatten()
        .map(|&(_, price)| price)
        .fold((strike, strike), |(lo, hi), price| (lo.min(price), hi.max(price)));

    let span = max - min;
    let pad = if span > 0.0 {
        span * Y_PADDING
    } else {
        max.abs().max(1.0) * Y_PADDING
    };

    [(min - pad).max(0.0), max + pad]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_montecarlo::mc::{simulate_and_price, GbmParams, MonteCarloConfig, SimulationParams};

    fn simulation(n_paths: usize, n_steps: usize) -> Simulation {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(42)
            .build()
            .unwrap();
        simulate_and_price(&SimulationParams::default(), &config).unwrap()
    }

    #[test]
    fn test_time_grid_endpoints() {
        let grid = time_grid(2.5, 100);
        assert_eq!(grid.len(), 101);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[100], 2.5);
        assert_relative_eq!(grid[50], 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_time_grid_evenly_spaced() {
        let grid = time_grid(1.0, 7);
        for pair in grid.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 1.0 / 7.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_time_grid_zero_steps() {
        assert_eq!(time_grid(1.0, 0), vec![0.0]);
    }

    #[test]
    fn test_displays_at_most_max_paths() {
        let data = PathChartData::from_simulation(&simulation(50, 20), DEFAULT_MAX_PATHS);
        assert_eq!(data.displayed_paths(), 10);
        assert_eq!(data.parameters.n_paths, 50);

        let few = PathChartData::from_simulation(&simulation(3, 20), DEFAULT_MAX_PATHS);
        assert_eq!(few.displayed_paths(), 3);
    }

    #[test]
    fn test_series_follow_time_grid() {
        let sim = simulation(5, 8);
        let data = PathChartData::from_simulation(&sim, DEFAULT_MAX_PATHS);
        let grid = time_grid(1.0, 8);

        for (series, path) in data.series.iter().zip(sim.paths().iter()) {
            assert_eq!(series.len(), 9);
            for ((t, price), (&expected_t, &expected_price)) in
                series.iter().zip(grid.iter().zip(path.iter()))
            {
                assert_eq!(*t, expected_t);
                assert_eq!(*price, expected_price);
            }
        }
    }

    #[test]
    fn test_bounds_cover_paths_and_strike() {
        let data = PathChartData::from_simulation(&simulation(10, 50), DEFAULT_MAX_PATHS);

        assert_eq!(data.x_bounds, [0.0, 1.0]);
        assert!(data.y_bounds[0] <= 105.0 && data.y_bounds[1] >= 105.0);
        for &(_, price) in data.series.iter().flatten() {
            assert!(price >= data.y_bounds[0] && price <= data.y_bounds[1]);
        }
    }

    #[test]
    fn test_strike_line_spans_time_axis() {
        let data = PathChartData::from_simulation(&simulation(2, 4), DEFAULT_MAX_PATHS);
        assert_eq!(data.strike_line, vec![(0.0, 105.0), (1.0, 105.0)]);
        assert_eq!(data.strike_label(), "Strike Price (K) = 105");
    }

    #[test]
    fn test_annotation_text() {
        let data = PathChartData::from_simulation(&simulation(1_000, 100), DEFAULT_MAX_PATHS);

        assert_eq!(
            data.parameter_lines(),
            vec![
                "S0 (Spot Price) = 100",
                "K (Strike Price) = 105",
                "T (Time to Expiration) = 1",
                "r (Risk-Free Rate) = 0.05",
                "σ (Volatility) = 0.2",
                "Simulations = 1000",
                "Time Steps = 100",
            ]
        );

        let [call, put] = data.price_lines();
        assert_eq!(call, format!("Call Option Price: {:.2}", data.call_price));
        assert_eq!(put, format!("Put Option Price: {:.2}", data.put_price));
    }

    #[test]
    fn test_flat_paths_still_have_range() {
        let params = SimulationParams::new(GbmParams::new(100.0, 0.0, 0.0, 1.0), 100.0);
        let config = MonteCarloConfig::builder()
            .n_paths(2)
            .n_steps(4)
            .seed(1)
            .build()
            .unwrap();
        let sim = simulate_and_price(&params, &config).unwrap();
        let data = PathChartData::from_simulation(&sim, DEFAULT_MAX_PATHS);

        assert!(data.y_bounds[1] > data.y_bounds[0]);
        assert_eq!(data.y_labels(), ["95.0", "100.0", "105.0"]);
        assert_eq!(data.x_labels(), ["0.00", "0.50", "1.00"]);
    }
}
