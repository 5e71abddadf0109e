//! Horizontal bar chart
//!
//! The shared primitive behind categorical distributions, histograms and
//! top-N value panels.

use super::panel::{BorderStyle, CellStyle, Panel, PanelKind};
use super::Chart;
use crate::format::{display_width, format_percentage, format_value, pad_right};

/// Bars kept by default
pub const DEFAULT_MAX_BARS: usize = 20;

/// Width of a full-length bar in characters
pub const BAR_WIDTH: usize = 40;

/// Bar fill character
pub const BAR_FILL: char = '#';

/// Width the value column is right-aligned to
const VALUE_WIDTH: usize = 8;

/// One label/value pair of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub label: String,
    pub value: f64,
}

/// A rendered bar with its derived measures
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Fill length in `0..=BAR_WIDTH`
    pub width: usize,
    /// Share of the maximum value in percent
    pub percentage: f64,
}

/// Sorted, truncated label/value sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    entries: Vec<ChartEntry>,
    label_width: usize,
}

impl ChartSpec {
    /// Sort descending by value (stable on ties) and keep `max_bars` entries.
    ///
    /// Non-finite values are dropped.
    pub fn new<L, I>(data: I, max_bars: usize) -> Self
    where
        L: ToString,
        I: IntoIterator<Item = (L, f64)>,
    {
        let mut entries: Vec<ChartEntry> = data
            .into_iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(label, value)| ChartEntry {
                label: label.to_string(),
                value,
            })
            .collect();

        // sort_by is stable, so ties keep their input order
        entries.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(max_bars);

        let label_width = entries
            .iter()
            .map(|e| display_width(&e.label))
            .max()
            .unwrap_or(0);

        ChartSpec {
            entries,
            label_width,
        }
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Largest value, or 1 when there are no entries
    pub fn max_value(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .unwrap_or(1.0)
    }

    /// Bars scaled against the maximum value
    pub fn bars(&self) -> Vec<Bar> {
        let max_value = self.max_value();
        self.entries
            .iter()
            .map(|entry| {
                let (width, percentage) = if max_value > 0.0 {
                    let ratio = entry.value / max_value;
                    let width = (ratio * BAR_WIDTH as f64).floor().clamp(0.0, BAR_WIDTH as f64);
                    (width as usize, ratio * 100.0)
                } else {
                    (0, 0.0)
                };
                Bar {
                    label: entry.label.clone(),
                    value: entry.value,
                    width,
                    percentage,
                }
            })
            .collect()
    }
}

impl Chart for ChartSpec {
    fn lines(&self) -> Vec<String> {
        let fill = BAR_FILL.to_string();
        self.bars()
            .into_iter()
            .map(|bar| {
                format!(
                    "{} | {} | {} ({})",
                    pad_right(&bar.label, self.label_width),
                    pad_right(&fill.repeat(bar.width), BAR_WIDTH),
                    // minimum width; longer values are never cut
                    format!("{:>width$}", format_value(bar.value), width = VALUE_WIDTH),
                    format_percentage(bar.percentage),
                )
            })
            .collect()
    }
}

/// Render label/value pairs as a titled horizontal bar chart panel
pub fn bar_chart<L, I>(data: I, title: &str, max_bars: usize) -> Panel
where
    L: ToString,
    I: IntoIterator<Item = (L, f64)>,
{
    let spec = ChartSpec::new(data, max_bars);
    chart_panel(&spec, title)
}

/// Wrap an already built spec in a panel; empty specs yield a placeholder
pub fn chart_panel(spec: &ChartSpec, title: &str) -> Panel {
    if spec.is_empty() {
        return Panel::placeholder(Some(title), "No data for chart", CellStyle::Error);
    }
    Panel::text(PanelKind::BarChart, Some(title), spec.lines()).with_border(BorderStyle::Blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_of(line: &str) -> usize {
        line.split(" | ").nth(1).unwrap().trim_end().len()
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let data = vec![("a", 1.0), ("b", 5.0), ("c", 3.0), ("d", 4.0)];
        let spec = ChartSpec::new(data, 3);
        let labels: Vec<&str> = spec.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "d", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let data = vec![("x", 2.0), ("y", 5.0), ("z", 2.0), ("w", 2.0)];
        let spec = ChartSpec::new(data, 20);
        let labels: Vec<&str> = spec.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["y", "x", "z", "w"]);
    }

    #[test]
    fn test_line_format() {
        let spec = ChartSpec::new(vec![("A", 190.0), ("B", 150.0)], 20);
        let lines = spec.lines();
        assert_eq!(
            lines[0],
            format!("A | {} |      190 (100.0%)", "#".repeat(40))
        );
        // 150 / 190 * 40 = 31.57 -> 31
        assert_eq!(
            lines[1],
            format!("B | {:<40} |      150 ( 78.9%)", "#".repeat(31))
        );
    }

    #[test]
    fn test_non_integral_value_printed_as_given() {
        let spec = ChartSpec::new(vec![("m", 2.5)], 20);
        assert!(spec.lines()[0].ends_with("|      2.5 (100.0%)"));
    }

    #[test]
    fn test_long_values_are_not_cut() {
        let spec = ChartSpec::new(vec![("big", 123_456_789.0), ("frac", 1.0 / 3.0)], 20);
        let lines = spec.lines();
        assert!(lines[0].ends_with("| 123456789 (100.0%)"));
        assert!(lines[1].ends_with(&format!("| {} (  0.0%)", 1.0_f64 / 3.0)));
    }

    #[test]
    fn test_bar_widths_and_percentages() {
        let spec = ChartSpec::new(vec![("a", 10.0), ("b", 5.0), ("c", 0.0)], 20);
        let bars = spec.bars();
        assert_eq!(bars[0].width, 40);
        assert!((bars[0].percentage - 100.0).abs() < 1e-9);
        assert_eq!(bars[1].width, 20);
        assert_eq!(bars[2].width, 0);
        for line in spec.lines() {
            assert!(bar_of(&line) <= BAR_WIDTH);
        }
    }

    #[test]
    fn test_non_positive_max_yields_empty_bars() {
        let spec = ChartSpec::new(vec![("a", -1.0), ("b", -3.0)], 20);
        assert!(spec.bars().iter().all(|b| b.width == 0 && b.percentage == 0.0));
    }

    #[test]
    fn test_labels_padded_to_longest() {
        let spec = ChartSpec::new(vec![("North", 2.0), ("E", 1.0)], 20);
        assert_eq!(spec.label_width(), 5);
        assert!(spec.lines()[1].starts_with("E     | "));
    }

    #[test]
    fn test_empty_input_placeholder() {
        let panel = bar_chart(Vec::<(String, f64)>::new(), "Empty", 20);
        assert!(panel.is_placeholder());
        assert_eq!(panel.message(), Some("No data for chart"));
    }

    #[test]
    fn test_max_value_defaults_to_one() {
        let spec = ChartSpec::new(Vec::<(String, f64)>::new(), 20);
        assert_eq!(spec.max_value(), 1.0);
    }
}
