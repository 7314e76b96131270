//! Dataset Service Provider Interface
//!
//! Defines the foundational abstractions of the ingestion domain:
//!
//! - [`DateColumnRule`]: one strategy in the ordered date-column search
//! - [`RawTable`]: a raw rectangular table as read from CSV or a workbook
//! - [`SeriesPoint`] / [`MonthlySeries`]: monthly-resampled observations
//! - [`LoadSummary`]: what a successful load reports back
//! - [`DatasetError`]: standardized error type for ingestion operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DateColumnRule;
pub use error::{DatasetError, Result};
pub use model::{LoadSummary, MonthlySeries, RawTable, SeriesPoint};
