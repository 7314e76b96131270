//! Date parsing and month truncation helpers.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Date-only formats accepted by the general parser, most common first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y", "%d %b %Y"];

/// Datetime formats accepted by the general parser; the time part is dropped.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date under the general format list.
pub fn parse_general(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Parse an abbreviated-month/two-digit-year token such as `Jan-21`.
pub fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    // chrono needs a day component, so pin one before parsing
    NaiveDate::parse_from_str(&format!("{text}-01"), "%b-%y-%d").ok()
}

/// Truncate a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("first of month is always a valid date")
}

/// The calendar month immediately after `date`, at month granularity.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always a valid date")
}

/// Every first-of-month date from `first` through `last`, inclusive.
pub fn month_span(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut current = month_start(first);
    let last = month_start(last);
    while current <= last {
        months.push(current);
        current = next_month(current);
    }
    months
}
