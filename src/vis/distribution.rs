//! Distribution of a single column
//!
//! Numeric columns are cut into equal-width bins; everything else, and any
//! numeric column whose range cannot be binned, is shown as value frequencies.
//! Both paths end in the horizontal bar chart.

use super::bar_chart::{bar_chart, DEFAULT_MAX_BARS};
use super::panel::{CellStyle, Panel};
use crate::dataset::{Column, Scalar};
use crate::error::{Error, Result};
use crate::stats::value_counts;

/// Number of bins used when none is configured
pub const DEFAULT_BINS: usize = 10;

/// One half-open interval `[lo, hi)` of a histogram; the last bin is closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Interval label with one decimal on each edge
    pub fn label(&self) -> String {
        format!("{:.1}-{:.1}", self.lo, self.hi)
    }
}

/// Equal-width binning of a numeric sample
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    bins: Vec<HistogramBin>,
}

impl HistogramSpec {
    /// Cut `data` into `bins` equal-width intervals over `[min, max]`.
    ///
    /// Fails on an empty sample, a zero bin count, non-finite values or a
    /// degenerate range.
    pub fn compute(data: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::BinningFailure("bin count must be positive".into()));
        }
        if data.is_empty() {
            return Err(Error::BinningFailure("no values to bin".into()));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(Error::BinningFailure("non-finite value in column".into()));
        }

        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        if max <= min {
            return Err(Error::BinningFailure(format!(
                "degenerate range [{}, {}]",
                min, max
            )));
        }

        let bin_width = (max - min) / bins as f64;
        if !bin_width.is_finite() || bin_width == 0.0 {
            return Err(Error::BinningFailure(format!(
                "range [{}, {}] cannot be split into {} bins",
                min, max, bins
            )));
        }
        let mut edges: Vec<f64> = (0..=bins).map(|i| min + i as f64 * bin_width).collect();
        // accumulated width may drift; the closing edge is the sample max
        edges[bins] = max;

        let mut counts = vec![0usize; bins];
        for &value in data {
            let bin_idx = ((value - min) / bin_width).floor() as usize;
            let bin_idx = bin_idx.min(bins - 1);
            counts[bin_idx] += 1;
        }

        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(edge, count)| HistogramBin {
                lo: edge[0],
                hi: edge[1],
                count,
            })
            .collect();

        Ok(HistogramSpec { bins })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Label/count pairs in interval order
    pub fn entries(&self) -> Vec<(String, f64)> {
        self.bins
            .iter()
            .map(|b| (b.label(), b.count as f64))
            .collect()
    }
}

/// Frequencies of the `top` most common values, ties in first-seen order
pub fn top_values(values: &[Scalar], top: usize) -> Vec<(String, f64)> {
    value_counts(values)
        .into_iter()
        .take(top)
        .map(|(label, count)| (label, count as f64))
        .collect()
}

/// Distribution panel with the default bar limit
pub fn distribution(column: &Column, title: &str, bins: usize) -> Panel {
    distribution_with(column, title, bins, DEFAULT_MAX_BARS)
}

/// Distribution panel of `column`.
///
/// Nulls are dropped first. The title is used as given.
pub fn distribution_with(column: &Column, title: &str, bins: usize, max_bars: usize) -> Panel {
    if column.is_empty() {
        return Panel::placeholder(Some(title), "No data available", CellStyle::Error);
    }

    let values: Vec<Scalar> = column.non_null().cloned().collect();
    if values.is_empty() {
        return Panel::placeholder(
            Some(title),
            "No valid data after removing nulls",
            CellStyle::Warning,
        );
    }

    if column.dtype().is_numeric() {
        let numbers: Vec<f64> = values.iter().filter_map(Scalar::as_f64).collect();
        match HistogramSpec::compute(&numbers, bins) {
            Ok(histogram) => return bar_chart(histogram.entries(), title, max_bars),
            Err(e) => {
                log::debug!(
                    "histogram of column '{}' fell back to value counts: {}",
                    column.name(),
                    e
                );
            }
        }
    }

    bar_chart(top_values(&values, bins), title, max_bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vis::panel::PanelKind;

    #[test]
    fn test_bins_cover_range_without_gaps() {
        let data: Vec<f64> = vec![0.0, 1.0, 2.5, 3.3, 7.7, 9.9, 10.0];
        let hist = HistogramSpec::compute(&data, 4).unwrap();
        let bins = hist.bins();

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].lo, 0.0);
        assert_eq!(bins[3].hi, 10.0);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].hi, pair[1].lo);
        }
        assert_eq!(hist.total(), data.len());
        // the maximum lands in the closed last bin
        assert_eq!(bins[3].count, 3);
    }

    #[test]
    fn test_bin_labels() {
        let hist = HistogramSpec::compute(&[0.0, 5.0, 10.0], 2).unwrap();
        let labels: Vec<String> = hist.bins().iter().map(HistogramBin::label).collect();
        assert_eq!(labels, vec!["0.0-5.0", "5.0-10.0"]);
    }

    #[test]
    fn test_binning_failures() {
        assert!(matches!(
            HistogramSpec::compute(&[3.0, 3.0], 10),
            Err(Error::BinningFailure(_))
        ));
        assert!(HistogramSpec::compute(&[1.0, f64::NAN], 10).is_err());
        assert!(HistogramSpec::compute(&[1.0, 2.0], 0).is_err());
        assert!(HistogramSpec::compute(&[], 10).is_err());
        // max - min overflows to infinity
        assert!(matches!(
            HistogramSpec::compute(&[-1e308, 1e308], 2),
            Err(Error::BinningFailure(_))
        ));
    }

    #[test]
    fn test_small_scale_range_is_binned() {
        let data = [1e-17, 2e-17, 3e-17];
        let hist = HistogramSpec::compute(&data, 2).unwrap();
        assert_eq!(hist.bins().len(), 2);
        assert_eq!(hist.bins()[0].lo, 1e-17);
        assert_eq!(hist.bins()[1].hi, 3e-17);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn test_numeric_distribution() {
        let column = Column::new(
            "sales",
            vec![Scalar::Int(100), Scalar::Int(150), Scalar::Null, Scalar::Int(90)],
        );
        let panel = distribution(&column, "sales Distribution", 3);
        assert_eq!(panel.kind, PanelKind::BarChart);
        assert_eq!(panel.title.as_deref(), Some("sales Distribution"));
        assert_eq!(panel.lines().unwrap().len(), 3);
    }

    #[test]
    fn test_degenerate_numeric_falls_back_to_counts() {
        let column = Column::new("n", vec![Scalar::Int(5), Scalar::Int(5), Scalar::Int(5)]);
        let panel = distribution(&column, "n", 10);
        let lines = panel.lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("5 | "));
        assert!(lines[0].contains("       3 (100.0%)"));
    }

    #[test]
    fn test_categorical_top_values() {
        let values: Vec<Scalar> = ["A", "B", "C", "A", "B", "A"]
            .iter()
            .map(|s| Scalar::from(*s))
            .collect();
        let column = Column::new("product", values);
        let panel = distribution(&column, "product", 2);
        let lines = panel.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("A | "));
        assert!(lines[1].starts_with("B | "));
    }

    #[test]
    fn test_null_and_empty_placeholders() {
        let nulls = Column::new("x", vec![Scalar::Null, Scalar::Null]);
        let panel = distribution(&nulls, "x", 10);
        assert_eq!(panel.message(), Some("No valid data after removing nulls"));

        let empty = Column::new("x", vec![]);
        assert_eq!(
            distribution(&empty, "x", 10).message(),
            Some("No data available")
        );
    }
}
