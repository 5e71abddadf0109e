use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::dataset::{Dataset, Field, RawInput, Scalar};
use crate::error::Result;

/// Read a JSON file as raw input.
///
/// An array of objects becomes records, an object whose values are all
/// arrays of the same length becomes a column-oriented table, and any other
/// object is treated as a single mapping.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<RawInput> {
    let file = File::open(path.as_ref())?;
    read_json_from(BufReader::new(file))
}

/// Same as [`read_json`] over any reader
pub fn read_json_from<R: Read>(reader: R) -> Result<RawInput> {
    let json_value: Value = serde_json::from_reader(reader)?;

    match json_value {
        Value::Object(map) if is_column_oriented(&map) => read_column_oriented(map),
        other => RawInput::classify_json(other),
    }
}

// every value an array, all of one length
fn is_column_oriented(map: &Map<String, Value>) -> bool {
    let mut lengths = map.values().map(|v| v.as_array().map(Vec::len));
    match lengths.next() {
        Some(Some(first)) => lengths.all(|len| len == Some(first)),
        _ => false,
    }
}

fn read_column_oriented(map: Map<String, Value>) -> Result<RawInput> {
    let columns: Vec<(String, Vec<Scalar>)> = map
        .into_iter()
        .map(|(key, value)| {
            let values = match value {
                Value::Array(array) => array
                    .into_iter()
                    .map(|v| Field::from_json(v).to_scalar())
                    .collect(),
                _ => Vec::new(),
            };
            (key, values)
        })
        .collect();

    log::debug!("read {} columns from column-oriented JSON", columns.len());
    Ok(RawInput::Table(Dataset::from_columns(columns)?))
}
