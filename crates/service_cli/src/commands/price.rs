//! Price command implementation
//!
//! Prices the call and put and prints them without opening the chart.

use clap::ValueEnum;
use pricer_montecarlo::analytical::{bs_call, bs_put};
use pricer_montecarlo::mc::{PricingResult, Simulation, SimulationParams};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Output format for the price command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two console lines
    #[default]
    Plain,
    /// Table with standard errors and closed-form references
    Table,
    /// JSON document
    Json,
}

/// Serialised form of a pricing run
#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    params: &'a SimulationParams,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
    call: &'a PricingResult,
    put: &'a PricingResult,
    parity_gap: f64,
}

impl<'a> PriceReport<'a> {
    fn new(simulation: &'a Simulation) -> Self {
        Self {
            params: simulation.params(),
            n_paths: simulation.paths().len(),
            n_steps: simulation.paths().n_steps(),
            seed: simulation.seed(),
            call: simulation.call(),
            put: simulation.put(),
            parity_gap: simulation.parity_gap(),
        }
    }
}

/// Run the price command
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    let simulation = super::simulate(config)?;

    info!("Outputting results as {:?}", format);
    let output = match format {
        OutputFormat::Plain => render_plain(&simulation),
        OutputFormat::Table => render_table(&simulation)?,
        OutputFormat::Json => render_json(&simulation)?,
    };
    println!("{}", output);

    Ok(())
}

fn render_plain(simulation: &Simulation) -> String {
    super::price_lines(simulation).join("\n")
}

const COLUMN_WIDTHS: [usize; 5] = [6, 10, 10, 21, 13];

fn table_rule(left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = COLUMN_WIDTHS
        .iter()
        .map(|&width| "─".repeat(width + 2))
        .collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn table_row(cells: [&str; 5]) -> String {
    let [name, price, se, ci, bs] = cells;
    format!(
        "│ {:<w0$} │ {:>w1$} │ {:>w2$} │ {:>w3$} │ {:>w4$} │",
        name,
        price,
        se,
        ci,
        bs,
        w0 = COLUMN_WIDTHS[0],
        w1 = COLUMN_WIDTHS[1],
        w2 = COLUMN_WIDTHS[2],
        w3 = COLUMN_WIDTHS[3],
        w4 = COLUMN_WIDTHS[4],
    )
}

fn result_row(name: &str, result: &PricingResult, reference: f64) -> String {
    let half_width = result.confidence_95();
    table_row([
        name,
        &format!("{:.4}", result.price),
        &format!("{:.4}", result.std_error),
        &format!(
            "[{:.4}, {:.4}]",
            result.price - half_width,
            result.price + half_width
        ),
        &format!("{:.4}", reference),
    ])
}

fn render_table(simulation: &Simulation) -> Result<String> {
    let params = simulation.params();
    let call_reference = bs_call(&params.gbm, params.strike)?;
    let put_reference = bs_put(&params.gbm, params.strike)?;

    let lines = [
        table_rule('┌', '┬', '┐'),
        table_row(["Option", "MC Price", "Std Error", "95% CI", "Black-Scholes"]),
        table_rule('├', '┼', '┤'),
        result_row("Call", simulation.call(), call_reference),
        result_row("Put", simulation.put(), put_reference),
        table_rule('└', '┴', '┘'),
    ];

    Ok(lines.join("\n"))
}

fn render_json(simulation: &Simulation) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PriceReport::new(simulation))?)
}
