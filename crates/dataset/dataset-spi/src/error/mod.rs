//! Error types for dataset ingestion.

mod dataset_error;

pub use dataset_error::{DatasetError, Result};
