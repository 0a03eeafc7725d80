//! Error types for dataset I/O

use thiserror::Error;

/// Errors that can occur while loading the orders dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Row {line} has {actual} fields, the header has {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
