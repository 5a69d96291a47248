//! Error types for chart rendering.

use thiserror::Error;

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Terminal setup, drawing, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
