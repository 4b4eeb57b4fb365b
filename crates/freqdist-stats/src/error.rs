//! Error types for freqdist-stats
//!
//! Every failure is detected before any aggregation work begins; a failed
//! call produces no partial table or series.

use thiserror::Error;

/// Errors raised while building a frequency distribution
#[derive(Error, Debug)]
pub enum FreqError {
    /// Bin boundaries absent when a set is required
    #[error("Bin boundaries are required but were not provided")]
    MissingBoundaries,

    /// Bin boundaries present but unusable
    #[error("Invalid bin boundaries: {message}")]
    InvalidBoundaries { message: String },

    /// Sample holds no observations
    #[error("Dataset contains no observations")]
    EmptyDataset,
}

/// Result type alias for frequency distribution operations
pub type FreqResult<T> = Result<T, FreqError>;
