//! Frequency polygon and ogive series
//!
//! Derives the two classic distribution chart series from a frequency
//! table. The frequency polygon connects (midpoint, frequency) pairs; the
//! ogive traces cumulative frequency along the upper bin boundaries,
//! starting from the sample minimum.

use crate::bins::Bins;
use crate::error::FreqResult;
use crate::table::FrequencyTable;

impl FrequencyTable {
    /// Points of the frequency polygon, one per bin
    ///
    /// Zero-count bins appear with y = 0 so the polygon connects through
    /// empty regions instead of skipping them. In relative mode counts are
    /// divided by the full sample size, unclassified values included.
    pub fn polygon_points(&self, relative: bool) -> Vec<(f64, f64)> {
        let n = self.sample_size() as f64;
        self.bins()
            .midpoints()
            .into_iter()
            .zip(self.counts())
            .map(|(mid, &count)| {
                let y = if relative { count as f64 / n } else { count as f64 };
                (mid, y)
            })
            .collect()
    }

    /// Points of the ogive, one per bin boundary
    ///
    /// The curve starts at (sample minimum, 0) rather than at the first
    /// boundary, which matters when the first boundary sits below the data.
    /// Point i >= 1 pairs the upper boundary of bin i-1 with the cumulative
    /// occupancy through that bin.
    pub fn ogive_points(&self, relative: bool) -> Vec<(f64, f64)> {
        let n = self.sample_size() as f64;
        let edges = self.bins().edges();

        let mut points = Vec::with_capacity(self.counts().len() + 1);
        points.push((self.sample_min(), 0.0));

        let mut running = 0usize;
        for (i, &count) in self.counts().iter().enumerate() {
            running += count;
            let y = if relative {
                running as f64 / n
            } else {
                running as f64
            };
            points.push((edges[i + 1], y));
        }
        points
    }
}

/// Build the frequency polygon series for a sample
///
/// Classifies the sample against `breaks` and pairs each bin midpoint with
/// its count, or with its proportion of the sample in relative mode.
pub fn frequency_polygon(
    sample: &[f64],
    breaks: &[f64],
    relative: bool,
) -> FreqResult<Vec<(f64, f64)>> {
    let table = FrequencyTable::classify(sample, Bins::new(breaks)?)?;
    Ok(table.polygon_points(relative))
}

/// Build the ogive (cumulative frequency) series for a sample
pub fn ogive(sample: &[f64], breaks: &[f64], relative: bool) -> FreqResult<Vec<(f64, f64)>> {
    let table = FrequencyTable::classify(sample, Bins::new(breaks)?)?;
    Ok(table.ogive_points(relative))
}
