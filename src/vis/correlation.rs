//! Correlation matrix over the numeric columns of a dataset

use super::panel::{
    BorderStyle, Cell, CellStyle, Justify, Panel, PanelKind, Table, TableColumn,
};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::format::{format_fixed, truncate};
use crate::stats::correlation as pearson;

/// Title used when the caller has none
pub const DEFAULT_TITLE: &str = "Correlation Matrix";

/// Glyph shown for an undefined coefficient
pub const MISSING_GLYPH: &str = "-";

const STRONG_THRESHOLD: f64 = 0.7;
const MODERATE_THRESHOLD: f64 = 0.3;

const HEADER_MAX_CHARS: usize = 10;
const ROW_LABEL_MAX_CHARS: usize = 15;

/// Magnitude class of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Strong,
    Moderate,
    Weak,
}

impl Tier {
    /// Classify `abs(value)`; both boundaries are exclusive
    pub fn classify(value: f64) -> Self {
        let magnitude = value.abs();
        if magnitude > STRONG_THRESHOLD {
            Tier::Strong
        } else if magnitude > MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Weak
        }
    }

    pub fn style(&self) -> CellStyle {
        match self {
            Tier::Strong => CellStyle::Strong,
            Tier::Moderate => CellStyle::Warning,
            Tier::Weak => CellStyle::Dim,
        }
    }
}

/// Symmetric matrix of pairwise Pearson coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Compute over the numeric columns in declaration order
    pub fn compute(dataset: &Dataset) -> Result<Self> {
        let columns = dataset.numeric_columns();
        if columns.len() < 2 {
            return Err(Error::InsufficientNumericColumns {
                found: columns.len(),
            });
        }

        let n = columns.len();
        let mut values = vec![vec![None; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = pearson(columns[i].values(), columns[j].values());
                // a column with variance correlates perfectly with itself
                let r = if i == j { r.map(|_| 1.0) } else { r };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(CorrelationMatrix {
            names: columns.iter().map(|c| c.name().to_string()).collect(),
            values,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Coefficient at `(i, j)`; `None` when undefined or out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Render as a tiered table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new().with_header_style(CellStyle::Heading);
        table.add_column(TableColumn::new("").style(CellStyle::Highlight));
        for name in &self.names {
            table.add_column(
                TableColumn::new(truncate(name, HEADER_MAX_CHARS))
                    .justify(Justify::Center)
                    .style(CellStyle::Dim),
            );
        }

        for (i, name) in self.names.iter().enumerate() {
            let mut row = Vec::with_capacity(self.len() + 1);
            row.push(Cell::styled(
                truncate(name, ROW_LABEL_MAX_CHARS),
                CellStyle::Highlight,
            ));
            for j in 0..self.len() {
                row.push(match self.get(i, j) {
                    Some(r) => Cell::styled(format_fixed(r, 2), Tier::classify(r).style()),
                    None => Cell::styled(MISSING_GLYPH, CellStyle::Dim),
                });
            }
            table.add_row(row);
        }

        table
    }
}

/// Correlation matrix panel; fewer than two numeric columns yields a placeholder
pub fn correlation(dataset: &Dataset, title: &str) -> Panel {
    match CorrelationMatrix::compute(dataset) {
        Ok(matrix) => Panel::table(PanelKind::Correlation, Some(title), matrix.to_table())
            .with_border(BorderStyle::Magenta),
        Err(e) => {
            log::debug!("correlation skipped: {}", e);
            Panel::placeholder(
                Some(title),
                "Not enough numeric columns for correlation",
                CellStyle::Warning,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Scalar;

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::Int(*v)).collect()
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::classify(0.75), Tier::Strong);
        assert_eq!(Tier::classify(0.70), Tier::Moderate);
        assert_eq!(Tier::classify(0.30), Tier::Weak);
        assert_eq!(Tier::classify(0.31), Tier::Moderate);
        assert_eq!(Tier::classify(0.20), Tier::Weak);
        assert_eq!(Tier::classify(-0.9), Tier::Strong);
    }

    #[test]
    fn test_matrix_symmetric_with_unit_diagonal() {
        let ds = Dataset::from_columns(vec![
            ("a", ints(&[1, 2, 3, 4])),
            ("b", ints(&[2, 1, 4, 3])),
            ("c", ints(&[10, 7, 3, 1])),
        ])
        .unwrap();
        let m = CorrelationMatrix::compute(&ds).unwrap();
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), Some(1.0));
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_small_scale_columns_keep_unit_diagonal() {
        let floats = |v: [f64; 3]| v.iter().map(|x| Scalar::Float(*x)).collect::<Vec<_>>();
        let ds = Dataset::from_columns(vec![
            ("a", floats([1e-9, 2e-9, 3e-9])),
            ("b", floats([3e-9, 1e-9, 2e-9])),
        ])
        .unwrap();
        let m = CorrelationMatrix::compute(&ds).unwrap();
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(1, 1), Some(1.0));
        assert!((m.get(0, 1).unwrap() + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_constant_column_is_missing() {
        let ds = Dataset::from_columns(vec![
            ("a", ints(&[1, 2, 3])),
            ("flat", ints(&[4, 4, 4])),
        ])
        .unwrap();
        let m = CorrelationMatrix::compute(&ds).unwrap();
        assert_eq!(m.get(1, 1), None);
        assert_eq!(m.get(0, 1), None);

        let table = m.to_table();
        assert_eq!(table.cell_text(1, 2), Some(MISSING_GLYPH));
        assert_eq!(table.cell_text(0, 1), Some("1.00"));
    }

    #[test]
    fn test_insufficient_columns() {
        let ds = Dataset::from_columns(vec![
            ("a", ints(&[1, 2, 3])),
            ("t", vec![Scalar::from("x"); 3]),
        ])
        .unwrap();
        assert!(matches!(
            CorrelationMatrix::compute(&ds),
            Err(Error::InsufficientNumericColumns { found: 1 })
        ));

        let panel = correlation(&ds, DEFAULT_TITLE);
        assert!(panel.is_placeholder());
        assert_eq!(
            panel.message(),
            Some("Not enough numeric columns for correlation")
        );
    }

    #[test]
    fn test_headers_truncated() {
        let ds = Dataset::from_columns(vec![
            ("a_very_long_column_name", ints(&[1, 2, 3])),
            ("b", ints(&[3, 1, 2])),
        ])
        .unwrap();
        let panel = correlation(&ds, DEFAULT_TITLE);
        let table = panel.as_table().unwrap();
        assert_eq!(table.headers(), vec!["", "a_very_lon", "b"]);
        assert_eq!(table.cell_text(0, 0), Some("a_very_long_col"));
    }
}
