//! Normalization of raw input into a [`Dataset`]
//!
//! Raw input arrives as a ready table, a sequence of records, a single
//! mapping, or an arbitrary JSON value. Normalization is an ordered fallback
//! chain:
//!
//! 1. records become one row each; columns are the union of keys in
//!    first-seen order, missing keys become nulls
//! 2. a single flat mapping becomes a one-row table; a mapping holding
//!    nested values degrades to a two-column `Key`/`Value` table
//! 3. a table passes through unchanged
//!
//! Any other shape fails with [`Error::UnsupportedInputKind`].

use super::scalar::Scalar;
use super::Dataset;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A field value inside a raw record
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Scalar(Scalar),
    List(Vec<Field>),
    Map(Record),
}

impl Field {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Field::Scalar(_))
    }

    /// Collapse to a scalar; nested values become their text rendering
    pub fn to_scalar(&self) -> Scalar {
        match self {
            Field::Scalar(s) => s.clone(),
            nested => Scalar::Text(nested.to_string()),
        }
    }

    /// Convert a JSON value; booleans become text
    pub fn from_json(value: Value) -> Field {
        match value {
            Value::Null => Field::Scalar(Scalar::Null),
            Value::Bool(b) => Field::Scalar(Scalar::Text(b.to_string())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Field::Scalar(Scalar::Int(i)),
                None => Field::Scalar(n.as_f64().map_or(Scalar::Null, Scalar::Float)),
            },
            Value::String(s) => Field::Scalar(Scalar::Text(s)),
            Value::Array(items) => Field::List(items.into_iter().map(Field::from_json).collect()),
            Value::Object(map) => Field::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Field::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Scalar(s) => write!(f, "{}", s),
            Field::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Field::Map(record) => {
                f.write_str("{")?;
                for (i, (key, value)) in record.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! impl_field_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Field {
                fn from(value: $t) -> Self {
                    Field::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_field_from_scalar!(i64, i32, f64, &str, String, NaiveDateTime);

impl From<Scalar> for Field {
    fn from(value: Scalar) -> Self {
        Field::Scalar(value)
    }
}

/// An insertion-ordered key to field mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Field)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Field>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every field is a scalar
    pub fn is_flat(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_scalar())
    }
}

impl<K: Into<String>> FromIterator<(K, Field)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Field)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Raw input accepted by the renderer
#[derive(Debug, Clone)]
pub enum RawInput {
    /// Already tabular
    Table(Dataset),
    /// Sequence of records, one row each
    Records(Vec<Record>),
    /// A single mapping
    Mapping(Record),
    /// Untyped JSON, classified during normalization
    Json(Value),
}

impl From<Dataset> for RawInput {
    fn from(ds: Dataset) -> Self {
        RawInput::Table(ds)
    }
}

impl From<Vec<Record>> for RawInput {
    fn from(records: Vec<Record>) -> Self {
        RawInput::Records(records)
    }
}

impl From<Record> for RawInput {
    fn from(record: Record) -> Self {
        RawInput::Mapping(record)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        RawInput::Json(value)
    }
}

impl RawInput {
    /// Normalize into a dataset using the ordered fallback chain
    pub fn normalize(self) -> Result<Dataset> {
        match self {
            RawInput::Records(records) => {
                log::debug!("normalizing {} records", records.len());
                records_to_dataset(&records)
            }
            RawInput::Mapping(record) => mapping_to_dataset(&record),
            RawInput::Table(ds) => Ok(ds),
            RawInput::Json(value) => RawInput::classify_json(value)?.normalize(),
        }
    }

    /// Map a JSON value onto a typed input shape
    pub fn classify_json(value: Value) -> Result<RawInput> {
        match value {
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for item in items {
                    match Field::from_json(item) {
                        Field::Map(record) => records.push(record),
                        other => {
                            return Err(Error::UnsupportedInputKind(format!(
                                "array element {}",
                                json_kind(&other)
                            )))
                        }
                    }
                }
                Ok(RawInput::Records(records))
            }
            Value::Object(map) => Ok(RawInput::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Field::from_json(v)))
                    .collect(),
            )),
            other => Err(Error::UnsupportedInputKind(
                json_kind(&Field::from_json(other)).to_string(),
            )),
        }
    }
}

fn json_kind(field: &Field) -> &'static str {
    match field {
        Field::Scalar(Scalar::Null) => "null",
        Field::Scalar(Scalar::Int(_)) | Field::Scalar(Scalar::Float(_)) => "number",
        Field::Scalar(_) => "string",
        Field::List(_) => "array",
        Field::Map(_) => "object",
    }
}

/// Precondition for the one-row branch of mapping normalization
pub fn is_single_row_mapping(record: &Record) -> bool {
    record.is_flat()
}

fn records_to_dataset(records: &[Record]) -> Result<Dataset> {
    let mut order: Vec<&str> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for record in records {
        for key in record.keys() {
            if !positions.contains_key(key) {
                positions.insert(key, order.len());
                order.push(key);
            }
        }
    }

    let mut columns: Vec<Vec<Scalar>> = vec![Vec::with_capacity(records.len()); order.len()];
    for record in records {
        for (idx, key) in order.iter().enumerate() {
            let cell = record.get(key).map_or(Scalar::Null, Field::to_scalar);
            columns[idx].push(cell);
        }
    }

    Dataset::from_columns(order.into_iter().zip(columns))
}

fn mapping_to_dataset(record: &Record) -> Result<Dataset> {
    if is_single_row_mapping(record) {
        log::debug!("normalizing flat mapping of {} keys as one row", record.len());
        return records_to_dataset(std::slice::from_ref(record));
    }

    log::debug!("mapping holds nested values; falling back to a key/value table");
    let keys: Vec<Scalar> = record.keys().map(Scalar::from).collect();
    let values: Vec<Scalar> = record.iter().map(|(_, v)| v.to_scalar()).collect();
    Dataset::from_columns(vec![("Key", keys), ("Value", values)])
}
