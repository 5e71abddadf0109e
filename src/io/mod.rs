pub mod csv;
pub mod json;

// Re-export commonly used functions
pub use self::csv::{read_csv, read_csv_from};
pub use self::json::{read_json, read_json_from};

use std::path::Path;

use crate::dataset::RawInput;
use crate::error::Result;

/// Read a data file, choosing the reader by extension.
///
/// `.json` goes through [`read_json`]; anything else is read as CSV with a
/// header row.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<RawInput> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        read_json(path)
    } else {
        Ok(RawInput::Table(read_csv(path, true)?))
    }
}
