//! Chart descriptions handed to a rendering backend
//!
//! The stats layer produces bare point series; this module wraps them with
//! the labels, title, and style tag a charting backend needs.

use serde::{Deserialize, Serialize};

/// Visual style tag understood by rendering backends
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStyle {
    /// Markers at each data point, joined by line segments
    PointsAndLines,
}

impl ChartStyle {
    /// Wire tag for the style
    pub fn tag(&self) -> &'static str {
        match self {
            ChartStyle::PointsAndLines => "points-and-lines",
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle::PointsAndLines
    }
}

/// A fully described 2D chart: series, axis labels, title, style
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartSpec {
    /// X coordinates
    pub xs: Vec<f64>,
    /// Y coordinates, same length as `xs`
    pub ys: Vec<f64>,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Chart title
    pub title: String,
    /// Visual style tag
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Build a chart description from a point series
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (xs, ys) = points.iter().copied().unzip();
        Self {
            xs,
            ys,
            x_label: String::new(),
            y_label: String::new(),
            title: String::new(),
            style: ChartStyle::default(),
        }
    }

    /// Set the axis labels
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
