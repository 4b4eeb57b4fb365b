//! The seam to an external rendering backend
//!
//! A backend receives a finished `ChartSpec` and owns everything visual:
//! marker drawing, tick formatting, and the output device. Any device or
//! session lifecycle lives behind the trait implementation.

use thiserror::Error;

use freqdist_stats::FreqError;

use crate::chart::ChartSpec;

/// Errors surfaced through the chart layer
#[derive(Error, Debug)]
pub enum ChartError {
    /// The underlying distribution computation failed
    #[error(transparent)]
    Stats(#[from] FreqError),

    /// The rendering backend reported a failure
    #[error("Rendering backend error: {message}")]
    Backend { message: String },
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// A rendering backend capable of drawing a described chart
pub trait Renderer {
    fn render(&mut self, chart: &ChartSpec) -> ChartResult<()>;
}
