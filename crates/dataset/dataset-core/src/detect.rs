//! Column auto-detection.
//!
//! The date column is found by an ordered list of detection strategies, each
//! behind the [`DateColumnRule`] contract; the first rule that selects a
//! column wins. Measurement columns are every other column that is fully
//! numeric after input normalization.

use dataset_spi::{DatasetError, DateColumnRule, RawTable, Result};

use crate::dates::{parse_general, parse_month_year};

/// Headers accepted by the name-based fallback, in priority order.
const CONVENTIONAL_NAMES: &[&str] = &["date", "Date", "timestamp", "time"];

/// Strip grouping separators and parse a cell as a finite number.
///
/// `"1,291,469"` parses as `1291469.0`. Empty cells yield `None`.
pub fn normalize_number(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Selects the first column whose every non-empty cell parses under the
/// general date parser.
pub struct GeneralFormatRule;

impl DateColumnRule for GeneralFormatRule {
    fn name(&self) -> &'static str {
        "general-format"
    }

    fn select(&self, table: &RawTable) -> Option<String> {
        first_fully_parseable(table, |cell| parse_general(cell).is_some())
    }
}

/// Selects the first column whose every non-empty cell is an
/// abbreviated-month/two-digit-year token such as `Jan-21`.
pub struct MonthYearRule;

impl DateColumnRule for MonthYearRule {
    fn name(&self) -> &'static str {
        "month-year-format"
    }

    fn select(&self, table: &RawTable) -> Option<String> {
        first_fully_parseable(table, |cell| parse_month_year(cell).is_some())
    }
}

/// Falls back to an exact header match against conventional date column
/// names when no column matched structurally.
pub struct ConventionalNameRule;

impl DateColumnRule for ConventionalNameRule {
    fn name(&self) -> &'static str {
        "conventional-name"
    }

    fn select(&self, table: &RawTable) -> Option<String> {
        CONVENTIONAL_NAMES
            .iter()
            .copied()
            .find(|name| table.column_index(name).is_some())
            .map(String::from)
    }
}

/// The detection strategies in their fixed priority order.
pub fn date_rules() -> Vec<Box<dyn DateColumnRule>> {
    vec![
        Box::new(GeneralFormatRule),
        Box::new(MonthYearRule),
        Box::new(ConventionalNameRule),
    ]
}

/// Identify the date column and the numeric measurement columns.
pub fn detect_columns(table: &RawTable) -> Result<(String, Vec<String>)> {
    let date_column = detect_date_column(table)?;

    let numeric: Vec<String> = table
        .headers()
        .iter()
        .filter(|header| **header != date_column)
        .filter(|header| is_numeric_column(table, header.as_str()))
        .cloned()
        .collect();
    if numeric.is_empty() {
        return Err(DatasetError::NoNumericColumns);
    }

    Ok((date_column, numeric))
}

fn detect_date_column(table: &RawTable) -> Result<String> {
    for rule in date_rules() {
        if let Some(column) = rule.select(table) {
            tracing::debug!(rule = rule.name(), column = %column, "date column selected");
            return Ok(column);
        }
    }
    Err(DatasetError::MissingDateColumn)
}

/// First column, in header order, where every non-empty cell satisfies the
/// predicate and at least one cell is non-empty.
fn first_fully_parseable(table: &RawTable, matches: impl Fn(&str) -> bool) -> Option<String> {
    table
        .headers()
        .iter()
        .find(|header| {
            let Some(cells) = table.column(header.as_str()) else {
                return false;
            };
            let mut non_empty = 0usize;
            for cell in cells {
                if cell.trim().is_empty() {
                    continue;
                }
                non_empty += 1;
                if !matches(cell) {
                    return false;
                }
            }
            non_empty > 0
        })
        .cloned()
}

/// A column is numeric when all its non-empty cells parse after numeric
/// normalization. Empty cells are missing observations, not disqualifiers.
fn is_numeric_column(table: &RawTable, header: &str) -> bool {
    match table.column(header) {
        Some(cells) => cells
            .filter(|cell| !cell.trim().is_empty())
            .all(|cell| normalize_number(cell).is_some()),
        None => false,
    }
}
