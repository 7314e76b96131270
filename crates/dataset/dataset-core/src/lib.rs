//! Dataset Core Implementations
//!
//! The ingestion pipeline of the workspace:
//!
//! - [`reader`]: raw bytes to a [`dataset_spi::RawTable`] (CSV or workbook)
//! - [`detect`]: date-column and numeric-column auto-detection
//! - [`normalize`]: monthly resampling into per-place series
//! - [`store`]: the in-memory series store
//! - [`ingest`]: the composed bytes-to-store entry point

pub mod dates;
pub mod detect;
pub mod ingest;
pub mod normalize;
pub mod reader;
pub mod store;

// Re-export from SPI
pub use dataset_spi::{
    DatasetError, DateColumnRule, LoadSummary, MonthlySeries, RawTable, Result, SeriesPoint,
};

pub use detect::detect_columns;
pub use ingest::load_dataset;
pub use normalize::normalize;
pub use reader::parse_table;
pub use store::{SeriesStore, AGGREGATE_PLACE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::detect::detect_columns;
    pub use crate::ingest::load_dataset;
    pub use crate::normalize::normalize;
    pub use crate::reader::parse_table;
    pub use crate::store::{SeriesStore, AGGREGATE_PLACE};
    pub use dataset_spi::{
        DatasetError, DateColumnRule, LoadSummary, MonthlySeries, RawTable, Result, SeriesPoint,
    };
}
