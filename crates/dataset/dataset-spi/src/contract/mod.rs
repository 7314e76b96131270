//! Trait contracts for dataset ingestion.

mod date_rule;

pub use date_rule::DateColumnRule;
