//! Forecast horizon resolution
//!
//! Turns a forecast request (an optional target calendar year) into a count
//! of monthly steps beyond the last observed date, and enumerates the future
//! months those steps cover.

use chrono::{Datelike, NaiveDate};
use forecast_spi::{ForecastError, Result};

/// Steps used when no target year is requested.
const DEFAULT_STEPS: usize = 12;

/// Resolve the number of monthly forecast steps.
///
/// With a target year, the horizon runs up to December 1 of that year, which
/// must lie strictly after `last_date`. Without one, the horizon defaults to
/// twelve months.
pub fn resolve_steps(target_year: Option<i32>, last_date: NaiveDate) -> Result<usize> {
    let Some(year) = target_year else {
        return Ok(DEFAULT_STEPS);
    };

    let boundary = NaiveDate::from_ymd_opt(year, 12, 1)
        .ok_or_else(|| ForecastError::InvalidHorizon(format!("target year {year} is out of range")))?;
    if boundary <= last_date {
        return Err(ForecastError::InvalidHorizon(format!(
            "target year {year} must be after the last data point ({})",
            last_date.year()
        )));
    }

    let steps =
        i64::from(year - last_date.year()) * 12 + i64::from(12 - last_date.month() as i32);
    if steps <= 0 {
        return Err(ForecastError::InvalidHorizon(
            "forecast steps must be positive".to_string(),
        ));
    }
    Ok(steps as usize)
}

/// The `steps` consecutive first-of-month dates strictly after `last_date`.
pub fn future_months(last_date: NaiveDate, steps: usize) -> Vec<NaiveDate> {
    let mut months = Vec::with_capacity(steps);
    let mut current = last_date;
    for _ in 0..steps {
        current = next_month(current);
        months.push(current);
    }
    months
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always a valid date")
}
