//! CSV loader for the delivery-orders dataset

use crate::error::{IoError, IoResult};
use crate::table::RawTable;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read the orders CSV at `path`
///
/// Comma-delimited, first record is the header. The whole file is read
/// up front; the dataset is loaded once per page render.
pub fn read_orders(path: &str) -> IoResult<RawTable> {
    read_orders_with_options(path, b',')
}

/// Read the orders CSV at `path` with an explicit delimiter
pub fn read_orders_with_options(path: &str, delimiter: u8) -> IoResult<RawTable> {
    if !Path::new(path).exists() {
        return Err(IoError::FileNotFound(path.to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let table = read_from(BufReader::new(file), delimiter)?;

    tracing::info!(path, rows = table.num_rows(), "loaded orders dataset");
    Ok(table)
}

/// Read the orders CSV from any reader, for tests and embedded fixtures
pub fn read_orders_from(reader: impl Read) -> IoResult<RawTable> {
    read_from(reader, b',')
}

fn read_from(reader: impl Read, delimiter: u8) -> IoResult<RawTable> {
    // flexible so the width check below owns the ragged-row diagnostics
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut table = RawTable::new(headers);
    for result in csv_reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        table.push_row(record.iter().map(|s| s.to_string()).collect())?;
    }

    Ok(table)
}
