//! freqdist-charts - Chart descriptions for binned frequency distributions
//!
//! Wraps the point series from `freqdist-stats` into fully described charts
//! (axis labels, title, style tag) and defines the `Renderer` seam an
//! external charting backend implements. No drawing happens here: a
//! `ChartSpec` is a plain value a backend can consume, serialize, or ship
//! across a process boundary.

pub mod chart;
pub mod distribution;
pub mod render;

pub use chart::*;
pub use distribution::*;
pub use render::*;
