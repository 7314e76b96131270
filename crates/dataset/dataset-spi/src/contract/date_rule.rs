//! Date-column detection strategy contract.

use crate::model::RawTable;

/// One strategy in the ordered date-column search.
///
/// Detection runs a fixed priority list of rules and stops at the first
/// rule that selects a column.
pub trait DateColumnRule {
    /// Strategy name, used in logs.
    fn name(&self) -> &'static str;

    /// The name of the column this rule selects, if any.
    fn select(&self, table: &RawTable) -> Option<String>;
}
