//! Dataset Facade
//!
//! Unified re-exports for the ingestion domain.
//!
//! # Example
//!
//! ```rust
//! use dataset_facade::load_dataset;
//!
//! let csv = "Date,North\n2021-01-01,10\n2021-02-01,12\n";
//! let (store, summary) = load_dataset(csv.as_bytes()).unwrap();
//!
//! assert_eq!(summary.places, vec!["All Places", "North"]);
//! assert_eq!(store.get("North").unwrap().len(), 2);
//! ```

// Re-export everything from SPI
pub use dataset_spi::*;

// Re-export everything from Core
pub use dataset_core::*;
