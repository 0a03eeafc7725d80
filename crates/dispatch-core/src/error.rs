//! Error types for the cleaning pipeline

use thiserror::Error;

/// Errors raised while cleaning the raw orders table
///
/// Every variant is fatal for the whole cleaning pass; the only recovered
/// condition is a sentinel-marked missing value, which drops its row
/// before any coercion runs.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The raw table is missing a required column
    #[error("Dataset I/O failed: {0}")]
    Io(#[from] dispatch_io::IoError),

    /// A numeric cell failed integer or float coercion
    #[error("Row {row}: column '{column}' is not numeric: '{value}'")]
    BadNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The order date did not match the expected `DD-MM-YYYY` form
    #[error("Row {row}: invalid order date '{value}'")]
    BadDate { row: usize, value: String },

    /// A categorical cell held neither the sentinel nor a known category
    #[error("Row {row}: column '{column}' has unknown category '{value}'")]
    BadCategory {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The time-taken cell lacked the literal unit marker
    #[error("Row {row}: time-taken value '{value}' has no unit marker")]
    MissingTimeMarker { row: usize, value: String },
}

/// Result type for cleaning operations
pub type CleanResult<T> = Result<T, CleanError>;
