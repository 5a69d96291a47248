//! Run command implementation
//!
//! Prints the price estimates, then opens the path chart.

use std::io::{self, IsTerminal};

use service_plot::PathChartData;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Run the default command
pub fn run(config: &CliConfig) -> Result<()> {
    let simulation = super::simulate(config)?;

    for line in super::price_lines(&simulation) {
        println!("{}", line);
    }

    if !io::stdout().is_terminal() {
        warn!("stdout is not a terminal, skipping chart");
        return Ok(());
    }

    let data = PathChartData::from_simulation(&simulation, config.display.max_paths);
    service_plot::show(&data)?;

    info!("Chart closed");
    Ok(())
}
