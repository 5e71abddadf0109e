//! Summary statistics
//!
//! [`SummaryRecord`] holds dataset-level counts plus per-column descriptive
//! statistics; [`summarize`] renders it as a two-column metric/value table.
//! Nothing is cached: every call recomputes from the dataset.

pub mod descriptive;

pub use descriptive::Extent;

use crate::dataset::{Column, Dataset, Scalar};
use crate::format::{format_fixed, format_kilobytes, group_thousands};
use crate::vis::panel::{
    BorderStyle, Cell, CellStyle, Justify, Panel, PanelKind, Table, TableColumn,
};

/// Numeric columns listed in a summary by default
pub const DEFAULT_NUMERIC_LIMIT: usize = 5;

/// Text columns listed in a summary by default
pub const DEFAULT_TEXT_LIMIT: usize = 3;

/// Indent nesting a per-column row under its section header
const NESTED_ROW_PREFIX: &str = "  ";

/// Mean/min/max of one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub name: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Distinct non-null values of one text column
#[derive(Debug, Clone, PartialEq)]
pub struct TextSummary {
    pub name: String,
    pub unique: usize,
}

/// Dataset- and column-level descriptive statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub row_count: usize,
    pub column_count: usize,
    pub memory_bytes: usize,
    /// Total number of numeric columns, including the ones not listed
    pub numeric_column_count: usize,
    /// First numeric columns in declaration order
    pub numeric: Vec<NumericSummary>,
    /// Total number of text columns, including the ones not listed
    pub text_column_count: usize,
    /// First text columns in declaration order
    pub text: Vec<TextSummary>,
}

impl SummaryRecord {
    /// Compute with the default column limits
    pub fn compute(dataset: &Dataset) -> Self {
        Self::compute_with_limits(dataset, DEFAULT_NUMERIC_LIMIT, DEFAULT_TEXT_LIMIT)
    }

    pub fn compute_with_limits(dataset: &Dataset, numeric_limit: usize, text_limit: usize) -> Self {
        let numeric_columns = dataset.numeric_columns();
        let text_columns = dataset.text_columns();

        let numeric = numeric_columns
            .iter()
            .take(numeric_limit)
            .filter_map(|c| numeric_summary(c))
            .collect();

        let text = text_columns
            .iter()
            .take(text_limit)
            .map(|c| TextSummary {
                name: c.name().to_string(),
                unique: unique_count(c.values()),
            })
            .collect();

        SummaryRecord {
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            memory_bytes: dataset.estimated_memory_bytes(),
            numeric_column_count: numeric_columns.len(),
            numeric,
            text_column_count: text_columns.len(),
            text,
        }
    }

    /// Render as a metric/value table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new().with_header_style(CellStyle::Heading);
        table.add_column(TableColumn::new("Metric").style(CellStyle::Highlight));
        table.add_column(TableColumn::new("Value").justify(Justify::Right));

        table.add_row(vec![
            Cell::new("Total Records"),
            Cell::new(group_thousands(self.row_count)),
        ]);
        table.add_row(vec![
            Cell::new("Columns"),
            Cell::new(self.column_count.to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Memory Usage"),
            Cell::new(format_kilobytes(self.memory_bytes)),
        ]);

        if self.numeric_column_count > 0 {
            table.add_row(vec![
                Cell::styled("Numeric Columns", CellStyle::Bold),
                Cell::new(self.numeric_column_count.to_string()),
            ]);
            for col in &self.numeric {
                table.add_row(vec![
                    Cell::new(format!("{}{} (avg)", NESTED_ROW_PREFIX, col.name)),
                    Cell::new(format_fixed(col.mean, 2)),
                ]);
                table.add_row(vec![
                    Cell::new(format!("{}{} (min-max)", NESTED_ROW_PREFIX, col.name)),
                    Cell::new(format!(
                        "{} - {}",
                        format_fixed(col.min, 2),
                        format_fixed(col.max, 2)
                    )),
                ]);
            }
        }

        if self.text_column_count > 0 {
            table.add_row(vec![
                Cell::styled("Text Columns", CellStyle::Bold),
                Cell::new(self.text_column_count.to_string()),
            ]);
            for col in &self.text {
                table.add_row(vec![
                    Cell::new(format!("{}{} (unique)", NESTED_ROW_PREFIX, col.name)),
                    Cell::new(col.unique.to_string()),
                ]);
            }
        }

        table
    }
}

fn numeric_summary(column: &Column) -> Option<NumericSummary> {
    let extent = descriptive::extent_impl(&column.numeric_values())?;
    Some(NumericSummary {
        name: column.name().to_string(),
        mean: extent.mean,
        min: extent.min,
        max: extent.max,
    })
}

/// Number of distinct non-null values
pub fn unique_count(values: &[Scalar]) -> usize {
    descriptive::value_counts_impl(values).len()
}

/// Non-null value frequencies, most frequent first, ties in first-seen order
pub fn value_counts(values: &[Scalar]) -> Vec<(String, usize)> {
    descriptive::value_counts_impl(values)
}

/// Mean/min/max of a numeric sample
pub fn extent(data: &[f64]) -> Option<Extent> {
    descriptive::extent_impl(data)
}

/// Pearson correlation over pairwise-complete numeric observations
pub fn correlation(x: &[Scalar], y: &[Scalar]) -> Option<f64> {
    descriptive::correlation_impl(x, y)
}

/// Summary statistics panel with the default limits
pub fn summarize(dataset: &Dataset, title: &str) -> Panel {
    summarize_with_limits(dataset, title, DEFAULT_NUMERIC_LIMIT, DEFAULT_TEXT_LIMIT)
}

/// Summary statistics panel; an empty dataset yields a placeholder
pub fn summarize_with_limits(
    dataset: &Dataset,
    title: &str,
    numeric_limit: usize,
    text_limit: usize,
) -> Panel {
    if dataset.is_empty() {
        return Panel::placeholder(Some(title), "No data available", CellStyle::Error);
    }

    let record = SummaryRecord::compute_with_limits(dataset, numeric_limit, text_limit);
    Panel::table(PanelKind::Summary, Some(title), record.to_table())
        .with_border(BorderStyle::Green)
}
