//! freqdist-stats - Binned frequency distributions
//!
//! This crate turns a one-dimensional numeric sample and a sequence of bin
//! boundaries into the two classic distribution chart series:
//!
//! - **Frequency polygon**: (bin midpoint, frequency) pairs
//! - **Ogive**: cumulative frequency traced along the upper bin boundaries
//!
//! # Design Philosophy
//!
//! Every operation is a pure function of (sample, breaks, mode):
//! - Classification is a single linear scan over half-open intervals
//! - Tables are recomputed per call, nothing persists between calls
//! - No drawing, no I/O; rendering belongs to whichever charting backend
//!   consumes the series

pub mod bins;
pub mod breaks;
pub mod error;
pub mod series;
pub mod table;

pub use bins::*;
pub use breaks::*;
pub use error::*;
pub use series::*;
pub use table::*;
