//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared helpers run
//! the simulation and format the console lines.

pub mod check;
pub mod plot;
pub mod price;
pub mod run;

use pricer_montecarlo::mc::{simulate_and_price, Simulation};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::Result;

/// Simulate paths and price the call and put for `config`.
pub(crate) fn simulate(config: &CliConfig) -> Result<Simulation> {
    let params = config.simulation_params();
    let mc_config = config.monte_carlo_config()?;

    info!(
        "Simulating {} paths x {} steps",
        mc_config.n_paths(),
        mc_config.n_steps()
    );

    let simulation = simulate_and_price(&params, &mc_config)?;

    debug!(
        seed = simulation.seed(),
        call_std_error = simulation.call().std_error,
        put_std_error = simulation.put().std_error,
        parity_gap = simulation.parity_gap(),
        "Simulation complete"
    );

    Ok(simulation)
}

/// The two console lines reporting the estimates.
pub(crate) fn price_lines(simulation: &Simulation) -> [String; 2] {
    [
        format!("Estimated Call Option Price:  {}", simulation.call().price),
        format!("Estimated Put Option Price:  {}", simulation.put().price),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::CliConfig;

    /// Small seeded configuration for command tests.
    pub fn seeded_config() -> CliConfig {
        let mut config = CliConfig::default();
        config.simulation.n_paths = 500;
        config.simulation.n_steps = 20;
        config.simulation.seed = Some(42);
        config
    }
}
