//! Check command implementation
//!
//! Prints the effective configuration and the closed-form reference prices.

use pricer_montecarlo::analytical::{bs_call, bs_put};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(config)?);
    info!("Configuration OK");
    Ok(())
}

fn render(config: &CliConfig) -> Result<String> {
    let params = config.simulation_params();
    config.monte_carlo_config()?;

    let call = bs_call(&params.gbm, params.strike)?;
    let put = bs_put(&params.gbm, params.strike)?;

    let mut out = config.to_toml()?;
    out.push('\n');
    out.push_str("Black-Scholes reference:\n");
    out.push_str(&format!("  call = {:.4}\n", call));
    out.push_str(&format!("  put  = {:.4}\n", put));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::seeded_config;
    use crate::CliError;
    use pricer_montecarlo::mc::ConfigError;

    #[test]
    fn test_render_default_config() {
        let out = render(&seeded_config()).unwrap();

        assert!(out.contains("[option]"));
        assert!(out.contains("strike = 105.0"));
        assert!(out.contains("seed = 42"));
        assert!(out.contains("call = 8.02"));
        assert!(out.contains("put  = 7.90"));
    }

    #[test]
    fn test_render_rejects_invalid_path_count() {
        let mut config = seeded_config();
        config.simulation.n_paths = 0;
        assert!(render(&config).is_err());
    }

    #[test]
    fn test_render_rejects_seed_beyond_toml_range() {
        let mut config = seeded_config();
        config.simulation.seed = Some(u64::MAX);
        assert!(matches!(
            render(&config),
            Err(CliError::Pricing(ConfigError::InvalidSeed(u64::MAX)))
        ));
    }

    #[test]
    fn test_drawn_seed_can_be_written_back() {
        let mut config = seeded_config();
        config.simulation.seed = None;
        let simulation = crate::commands::simulate(&config).unwrap();

        config.simulation.seed = Some(simulation.seed());
        assert!(config.validate().is_ok());
        let out = render(&config).unwrap();
        assert!(out.contains(&format!("seed = {}", simulation.seed())));
    }
}
