//! Ready-to-render distribution charts
//!
//! Glue between the stats layer and a rendering backend: classify the
//! sample, derive the series, attach conventional labels and titles.

use freqdist_stats::{Bins, FrequencyTable};

use crate::chart::ChartSpec;
use crate::render::ChartResult;

/// Describe a frequency polygon chart for a sample
///
/// `breaks` is required; passing `None` reports the missing boundaries
/// rather than guessing a default.
pub fn polygon_chart(
    sample: &[f64],
    breaks: Option<&[f64]>,
    relative: bool,
) -> ChartResult<ChartSpec> {
    let table = FrequencyTable::classify(sample, Bins::from_breaks(breaks)?)?;
    let y_label = if relative {
        "Relative frequency"
    } else {
        "Frequency"
    };
    Ok(ChartSpec::from_points(&table.polygon_points(relative))
        .with_labels("Class midpoint", y_label)
        .with_title("Frequency polygon"))
}

/// Describe an ogive (cumulative frequency) chart for a sample
pub fn ogive_chart(
    sample: &[f64],
    breaks: Option<&[f64]>,
    relative: bool,
) -> ChartResult<ChartSpec> {
    let table = FrequencyTable::classify(sample, Bins::from_breaks(breaks)?)?;
    let y_label = if relative {
        "Cumulative relative frequency"
    } else {
        "Cumulative frequency"
    };
    Ok(ChartSpec::from_points(&table.ogive_points(relative))
        .with_labels("Upper class boundary", y_label)
        .with_title("Ogive"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartStyle;
    use crate::render::ChartError;
    use freqdist_stats::FreqError;

    const SAMPLE: &[f64] = &[1.0, 2.0, 2.0, 3.0, 5.0, 8.0];
    const BREAKS: &[f64] = &[0.0, 3.0, 6.0, 9.0];

    #[test]
    fn test_polygon_chart_series() {
        let spec = polygon_chart(SAMPLE, Some(BREAKS), false).unwrap();
        assert_eq!(spec.xs, vec![1.5, 4.5, 7.5]);
        assert_eq!(spec.ys, vec![3.0, 2.0, 1.0]);
        assert_eq!(spec.title, "Frequency polygon");
        assert_eq!(spec.x_label, "Class midpoint");
        assert_eq!(spec.y_label, "Frequency");
        assert_eq!(spec.style, ChartStyle::PointsAndLines);
    }

    #[test]
    fn test_polygon_chart_relative_label() {
        let spec = polygon_chart(SAMPLE, Some(BREAKS), true).unwrap();
        assert_eq!(spec.y_label, "Relative frequency");
        let total: f64 = spec.ys.iter().sum();
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ogive_chart_series() {
        let spec = ogive_chart(SAMPLE, Some(BREAKS), false).unwrap();
        assert_eq!(spec.xs, vec![1.0, 3.0, 6.0, 9.0]);
        assert_eq!(spec.ys, vec![0.0, 3.0, 5.0, 6.0]);
        assert_eq!(spec.title, "Ogive");
        assert_eq!(spec.y_label, "Cumulative frequency");
    }

    #[test]
    fn test_ogive_chart_relative_label() {
        let spec = ogive_chart(SAMPLE, Some(BREAKS), true).unwrap();
        assert_eq!(spec.y_label, "Cumulative relative frequency");
    }

    #[test]
    fn test_missing_breaks() {
        let err = polygon_chart(SAMPLE, None, false).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Stats(FreqError::MissingBoundaries)
        ));
    }

    #[test]
    fn test_invalid_breaks() {
        let err = ogive_chart(SAMPLE, Some(&[5.0, 3.0, 1.0]), false).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Stats(FreqError::InvalidBoundaries { .. })
        ));
    }

    #[test]
    fn test_empty_sample() {
        let err = polygon_chart(&[], Some(BREAKS), false).unwrap_err();
        assert!(matches!(err, ChartError::Stats(FreqError::EmptyDataset)));
    }
}
