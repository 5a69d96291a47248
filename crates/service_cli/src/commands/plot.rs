//! Plot command implementation
//!
//! Opens the path chart without printing the estimates.

use std::io::{self, IsTerminal};

use service_plot::PathChartData;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the plot command
pub fn run(config: &CliConfig) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(CliError::InvalidArgument(
            "plot requires an interactive terminal".to_string(),
        ));
    }

    let simulation = super::simulate(config)?;
    let data = PathChartData::from_simulation(&simulation, config.display.max_paths);
    service_plot::show(&data)?;

    info!("Chart closed");
    Ok(())
}
