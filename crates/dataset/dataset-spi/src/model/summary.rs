//! Load result summary.

use serde::{Deserialize, Serialize};

/// What a successful dataset load reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Human-readable status message
    pub message: String,
    /// Entity names, aggregate first, then columns in original order
    pub places: Vec<String>,
    /// Number of ingested rows with parseable dates
    pub rows: usize,
    /// `"<min> to <max>"` over the aggregate series
    pub date_range: String,
}
