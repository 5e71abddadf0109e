//! Column type inference
//!
//! A column's type is decided once, from its non-null values, when the
//! column is constructed.

use super::scalar::{Scalar, ScalarKind};
use std::fmt;

/// Inferred type tag of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Every non-null value is an integer or a float
    Numeric,
    /// Every non-null value is text
    Text,
    /// Every non-null value is a timestamp
    Temporal,
    /// Heterogeneous values, or no non-null values at all
    Mixed,
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ColumnType::Text)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Text => "text",
            ColumnType::Temporal => "temporal",
            ColumnType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the type tag of a column from its values.
///
/// Nulls are ignored. Ints and floats together are still numeric. A column
/// with no non-null values is `Mixed`.
pub fn infer_column_type<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let mut inferred: Option<ColumnType> = None;

    for value in values {
        let tag = match value.kind() {
            ScalarKind::Null => continue,
            ScalarKind::Int | ScalarKind::Float => ColumnType::Numeric,
            ScalarKind::Text => ColumnType::Text,
            ScalarKind::Timestamp => ColumnType::Temporal,
        };
        match inferred {
            None => inferred = Some(tag),
            Some(current) if current != tag => return ColumnType::Mixed,
            Some(_) => {}
        }
    }

    inferred.unwrap_or(ColumnType::Mixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_numeric_with_nulls() {
        let values = vec![Scalar::Int(1), Scalar::Null, Scalar::Float(2.5)];
        assert_eq!(infer_column_type(&values), ColumnType::Numeric);
    }

    #[test]
    fn test_infer_text() {
        let values = vec![Scalar::from("a"), Scalar::Null, Scalar::from("b")];
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn test_infer_mixed_and_empty() {
        let mixed = vec![Scalar::Int(1), Scalar::from("a")];
        assert_eq!(infer_column_type(&mixed), ColumnType::Mixed);

        let nulls = vec![Scalar::Null, Scalar::Null];
        assert_eq!(infer_column_type(&nulls), ColumnType::Mixed);

        let empty: Vec<Scalar> = vec![];
        assert_eq!(infer_column_type(&empty), ColumnType::Mixed);
    }
}
