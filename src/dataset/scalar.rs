//! Scalar cell values
//!
//! Every cell of a [`Dataset`](super::Dataset) is one of a closed set of
//! variants. Formatting and type inference switch on the variant tag.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Fixed per-cell footprint of numeric, temporal and null cells (bytes)
const FIXED_CELL_BYTES: usize = 8;

/// Per-cell overhead of a boxed text value on top of its UTF-8 payload (bytes)
const TEXT_CELL_OVERHEAD: usize = 8 + 49;

/// Timestamp display format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Timestamp without timezone
    Timestamp(NaiveDateTime),
    /// Missing value
    Null,
}

/// Tag of a [`Scalar`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int,
    Float,
    Text,
    Timestamp,
    Null,
}

impl Scalar {
    /// Variant tag
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Text(_) => ScalarKind::Text,
            Scalar::Timestamp(_) => ScalarKind::Timestamp,
            Scalar::Null => ScalarKind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_))
    }

    /// Numeric value as `f64`, `None` for non-numeric variants
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Estimated in-memory footprint of this cell in bytes
    pub fn estimated_size(&self) -> usize {
        match self {
            Scalar::Text(s) => TEXT_CELL_OVERHEAD + s.len(),
            _ => FIXED_CELL_BYTES,
        }
    }

    /// Parse a raw text cell into the narrowest matching variant.
    ///
    /// Empty (after trimming) is `Null`; then integer, finite float, timestamp
    /// (RFC 3339, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d`) and
    /// finally text.
    pub fn parse(raw: &str) -> Scalar {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Scalar::Null;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Scalar::Int(v);
        }
        // "NaN", "inf" and overflowing literals stay text
        if let Ok(v) = trimmed.parse::<f64>() {
            if v.is_finite() {
                return Scalar::Float(v);
            }
        }
        if let Some(ts) = parse_timestamp(trimmed) {
            return Scalar::Timestamp(ts);
        }
        Scalar::Text(trimmed.to_string())
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in [TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            // Integral floats keep a trailing ".0" so they stay distinguishable from ints
            Scalar::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
            Scalar::Null => write!(f, "NULL"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(v: NaiveDateTime) -> Self {
        Scalar::Timestamp(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Scalar::Null,
        }
    }
}
