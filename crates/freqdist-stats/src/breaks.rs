//! Break sequence construction
//!
//! Helpers for callers that have a sample but no boundary sequence yet:
//! equal-width breaks over an observed range, and the Sturges heuristic
//! for picking a bin count.

use crate::error::{FreqError, FreqResult};

/// Sturges' rule for a bin count: ceil(log2 n) + 1
pub fn sturges(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    (n as f64).log2().ceil() as usize + 1
}

/// Equal-width breaks spanning [min, max]
///
/// Produces `bin_count + 1` strictly ascending edges. A zero-width range is
/// widened by 0.5 on each side so a constant sample still bins cleanly.
pub fn equal_breaks(min: f64, max: f64, bin_count: usize) -> FreqResult<Vec<f64>> {
    if bin_count == 0 {
        return Err(FreqError::InvalidBoundaries {
            message: "bin count must be at least 1".to_string(),
        });
    }
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(FreqError::InvalidBoundaries {
            message: format!("cannot span range {} to {}", min, max),
        });
    }

    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let width = (hi - lo) / bin_count as f64;
    let mut edges: Vec<f64> = (0..bin_count).map(|i| lo + i as f64 * width).collect();
    edges.push(hi);
    Ok(edges)
}

/// Derive equal-width breaks directly from a sample
///
/// Spans the finite observations; the sample maximum classifies into the
/// last bin through the inclusive final edge.
pub fn breaks_from_sample(sample: &[f64], bin_count: usize) -> FreqResult<Vec<f64>> {
    if sample.is_empty() {
        return Err(FreqError::EmptyDataset);
    }

    let min = sample
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::INFINITY, f64::min);
    let max = sample
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    equal_breaks(min, max, bin_count)
}
