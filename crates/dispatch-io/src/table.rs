//! Untyped raw table produced by the CSV loader

use crate::error::{IoError, IoResult};
use serde::{Deserialize, Serialize};

/// A raw tabular record set: header names plus row-major string cells
///
/// Cells keep exactly the text found in the file, surrounding whitespace
/// included. Sentinel matching in the cleaning pass depends on that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create an empty table with the given header
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, rejecting a cell count that differs from the header
    pub fn push_row(&mut self, row: Vec<String>) -> IoResult<()> {
        if row.len() != self.headers.len() {
            // header is line 1, data starts at line 2
            return Err(IoError::RaggedRow {
                line: self.rows.len() + 2,
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Header names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of a column by header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a column that must exist
    pub fn require_column(&self, name: &str) -> IoResult<usize> {
        self.column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
    }

    /// Number of data rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrowed view of one row
    pub fn row(&self, index: usize) -> Option<RawRow<'_>> {
        self.rows.get(index).map(|cells| RawRow { index, cells })
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| RawRow { index, cells })
    }
}

/// Borrowed view of one raw row
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    index: usize,
    cells: &'a [String],
}

impl<'a> RawRow<'a> {
    /// Zero-based row index within the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell text at a column index
    ///
    /// Panics if the index is out of range; `RawTable::push_row` guarantees
    /// every row matches the header width.
    pub fn get(&self, column: usize) -> &'a str {
        &self.cells[column]
    }
}
