//! Dataset error types.

use thiserror::Error;

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while ingesting and querying a dataset.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DatasetError {
    /// Input bytes are neither parseable tabular text nor spreadsheet binary
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    /// No column matches any date-detection rule
    #[error("Could not detect a date column; ensure one column contains valid dates")]
    MissingDateColumn,

    /// No remaining column is fully numeric after normalization
    #[error("Could not detect any numeric columns to forecast")]
    NoNumericColumns,

    /// Requested place is not present in the store
    #[error("Place '{0}' not found in dataset")]
    UnknownPlace(String),

    /// A forecast was requested before any dataset was loaded
    #[error("No data loaded; upload a dataset first")]
    NoDataLoaded,
}
