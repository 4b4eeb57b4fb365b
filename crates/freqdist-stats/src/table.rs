//! Frequency table construction
//!
//! Classifies a sample against a set of bins and tabulates occupancy.
//! Both chart series (frequency polygon and ogive) derive from this table.

use serde::{Deserialize, Serialize};

use crate::bins::Bins;
use crate::error::{FreqError, FreqResult};

/// Per-bin occupancy of a sample
///
/// Invariant: classified + unclassified == sample_size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyTable {
    bins: Bins,
    counts: Vec<usize>,
    unclassified: usize,
    sample_size: usize,
    sample_min: f64,
}

impl FrequencyTable {
    /// Classify a sample into bins
    ///
    /// Single pass over the sample. Values outside the boundary range and
    /// non-finite values land in no bin; they are tracked in `unclassified`
    /// but still count toward the sample size.
    pub fn classify(sample: &[f64], bins: Bins) -> FreqResult<Self> {
        if sample.is_empty() {
            return Err(FreqError::EmptyDataset);
        }

        let mut counts = vec![0usize; bins.bin_count()];
        let mut unclassified = 0usize;
        for &value in sample {
            match bins.locate(value) {
                Some(idx) => counts[idx] += 1,
                None => unclassified += 1,
            }
        }

        let sample_min = sample
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::INFINITY, f64::min);

        Ok(Self {
            bins,
            counts,
            unclassified,
            sample_size: sample.len(),
            sample_min,
        })
    }

    /// Occupancy per bin, zero-count bins included
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of values that fell outside the boundary range
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    /// Number of values that landed in a bin
    pub fn classified(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Total observations in the sample, classified or not
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Smallest finite observation (the ogive anchor)
    pub fn sample_min(&self) -> f64 {
        self.sample_min
    }

    /// The bins this table was classified against
    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    /// Occupancy as a proportion of the full sample size
    pub fn relative_counts(&self) -> Vec<f64> {
        let n = self.sample_size as f64;
        self.counts.iter().map(|&c| c as f64 / n).collect()
    }

    /// Running occupancy totals, one per bin
    pub fn cumulative_counts(&self) -> Vec<usize> {
        self.counts
            .iter()
            .scan(0usize, |acc, &c| {
                *acc += c;
                Some(*acc)
            })
            .collect()
    }
}
