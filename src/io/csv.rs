use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::{Dataset, Scalar};
use crate::error::Result;

/// Read a CSV file into a dataset.
///
/// Each cell is parsed on its own: integers, floats and timestamps are
/// recognized, empty cells become null, everything else is text.
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    read_csv_from(file, has_header)
}

/// Same as [`read_csv`] over any reader
pub fn read_csv_from<R: Read>(reader: R, has_header: bool) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<Scalar>> = Vec::new();
    let headers: Vec<String> = if has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        Vec::new()
    };

    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(Scalar::parse).collect());
    }

    // without a header row, columns are named after the widest record
    let headers = if has_header {
        headers
    } else {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..width).map(|i| format!("column_{}", i)).collect()
    };

    let mut columns: Vec<Vec<Scalar>> = vec![Vec::with_capacity(rows.len()); headers.len()];
    for row in rows {
        let mut cells = row.into_iter();
        for column in columns.iter_mut() {
            // short rows are padded with nulls
            column.push(cells.next().unwrap_or(Scalar::Null));
        }
    }

    log::debug!("read {} columns from CSV", headers.len());
    Dataset::from_columns(headers.into_iter().zip(columns))
}
