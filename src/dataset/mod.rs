//! In-memory tabular dataset
//!
//! A [`Dataset`] is an ordered set of uniquely named [`Column`]s of equal
//! length. Each column's [`ColumnType`] is inferred once at construction and
//! never changes; the dataset exposes no mutators.

pub mod infer;
pub mod ingest;
mod sample;
pub mod scalar;

pub use infer::{infer_column_type, ColumnType};
pub use ingest::{is_single_row_mapping, Field, RawInput, Record};
pub use sample::sample_dataset;
pub use scalar::{Scalar, ScalarKind};

use crate::error::{Error, Result};
use std::collections::HashSet;

/// A named column of scalar values with its inferred type
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Scalar>,
}

impl Column {
    /// Create a column, inferring its type from the non-null values
    pub fn new(name: impl Into<String>, values: Vec<Scalar>) -> Self {
        let dtype = infer_column_type(&values);
        Column {
            name: name.into(),
            dtype,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the non-null values
    pub fn non_null(&self) -> impl Iterator<Item = &Scalar> {
        self.values.iter().filter(|v| !v.is_null())
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Non-null numeric values as `f64`
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(Scalar::as_f64).collect()
    }

    /// Estimated footprint of the column's cells in bytes
    pub fn estimated_size(&self) -> usize {
        self.values.iter().map(Scalar::estimated_size).sum()
    }
}

/// Rectangular table of typed columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Create a dataset with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, values)` pairs in declaration order.
    ///
    /// Fails on a repeated column name or when column lengths differ.
    pub fn from_columns<N, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Scalar>)>,
    {
        let mut seen = HashSet::new();
        let mut built = Vec::new();
        let mut row_count: Option<usize> = None;

        for (name, values) in columns {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateColumnName(name));
            }
            match row_count {
                None => row_count = Some(values.len()),
                Some(expected) if expected != values.len() => {
                    return Err(Error::InconsistentRowCount {
                        expected,
                        found: values.len(),
                    });
                }
                Some(_) => {}
            }
            built.push(Column::new(name, values));
        }

        Ok(Dataset {
            columns: built,
            row_count: row_count.unwrap_or(0),
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when there is nothing to show: no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`Dataset::column`] but fails with `ColumnNotFound`
    pub fn get_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Numeric columns in declaration order
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.dtype.is_numeric())
            .collect()
    }

    /// Text columns in declaration order
    pub fn text_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.dtype.is_text()).collect()
    }

    /// Cells of row `index` in column order
    pub fn row(&self, index: usize) -> Option<Vec<&Scalar>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Scalar>> + '_ {
        (0..self.row_count).filter_map(move |i| self.row(i))
    }

    /// Estimated memory footprint in bytes (sum of per-cell estimates)
    pub fn estimated_memory_bytes(&self) -> usize {
        self.columns.iter().map(Column::estimated_size).sum()
    }
}
