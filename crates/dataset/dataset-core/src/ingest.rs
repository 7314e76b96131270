//! Composed ingestion entry point.

use dataset_spi::{LoadSummary, Result};

use crate::detect::detect_columns;
use crate::normalize::normalize;
use crate::reader::parse_table;
use crate::store::SeriesStore;

/// Ingest uploaded file bytes into a fresh series store.
///
/// Runs the full pipeline: parse the bytes into a raw table, detect the
/// date and measurement columns, then resample each measurement into a
/// monthly series.
pub fn load_dataset(bytes: &[u8]) -> Result<(SeriesStore, LoadSummary)> {
    let table = parse_table(bytes)?;
    let (date_column, numeric_columns) = detect_columns(&table)?;
    let (store, summary) = normalize(&table, &date_column, &numeric_columns)?;
    tracing::info!(
        rows = summary.rows,
        places = store.len(),
        date_range = %summary.date_range,
        "dataset ingested"
    );
    Ok((store, summary))
}
