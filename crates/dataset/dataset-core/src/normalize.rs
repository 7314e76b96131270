//! Monthly normalization.
//!
//! Turns a raw table plus detected columns into one monthly-resampled series
//! per measurement column, the synthetic aggregate series, and a load
//! summary. Same-month rows are summed; the quantities are assumed to be
//! additive flows, not point-in-time rates.

use std::collections::HashMap;

use chrono::NaiveDate;
use dataset_spi::{DatasetError, LoadSummary, MonthlySeries, RawTable, Result, SeriesPoint};

use crate::dates::{month_span, month_start, parse_general, parse_month_year};
use crate::detect::normalize_number;
use crate::store::{SeriesStore, AGGREGATE_PLACE};

/// One retained row: its month and the per-column values.
struct Observation {
    month: NaiveDate,
    values: Vec<f64>,
}

/// Build the series store and load summary from a detected table.
pub fn normalize(
    table: &RawTable,
    date_column: &str,
    numeric_columns: &[String],
) -> Result<(SeriesStore, LoadSummary)> {
    let date_index = table.column_index(date_column).ok_or_else(|| {
        DatasetError::InvalidFileFormat(format!("date column '{date_column}' is missing"))
    })?;
    let mut numeric_indexes = Vec::with_capacity(numeric_columns.len());
    for name in numeric_columns {
        let index = table.column_index(name).ok_or_else(|| {
            DatasetError::InvalidFileFormat(format!("numeric column '{name}' is missing"))
        })?;
        numeric_indexes.push(index);
    }

    let observations = collect_observations(table, date_index, &numeric_indexes)?;
    let months = month_span(
        observations[0].month,
        observations[observations.len() - 1].month,
    );

    let mut store = SeriesStore::new();
    store.insert(
        AGGREGATE_PLACE,
        resample(&observations, &months, |values| values.iter().sum()),
    );
    for (j, name) in numeric_columns.iter().enumerate() {
        store.insert(
            name.clone(),
            resample(&observations, &months, |values| values[j]),
        );
    }

    let first = months[0];
    let last = months[months.len() - 1];
    let summary = LoadSummary {
        message: "File processed successfully".to_string(),
        places: store.places().to_vec(),
        rows: observations.len(),
        date_range: format!("{first} to {last}"),
    };

    Ok((store, summary))
}

/// Parse the date column and keep the rows whose date parses.
///
/// The abbreviated-month format is preferred for the whole column; the
/// general parser is the per-cell fallback when that format matches nothing.
fn collect_observations(
    table: &RawTable,
    date_index: usize,
    numeric_indexes: &[usize],
) -> Result<Vec<Observation>> {
    let abbreviated: Vec<Option<NaiveDate>> = table
        .rows()
        .iter()
        .map(|row| parse_month_year(&row[date_index]))
        .collect();
    let parsed: Vec<Option<NaiveDate>> = if abbreviated.iter().any(Option::is_some) {
        abbreviated
    } else {
        table
            .rows()
            .iter()
            .map(|row| parse_general(&row[date_index]))
            .collect()
    };

    let mut observations: Vec<Observation> = table
        .rows()
        .iter()
        .zip(parsed)
        .filter_map(|(row, date)| {
            date.map(|date| Observation {
                month: month_start(date),
                values: numeric_indexes
                    .iter()
                    .map(|&i| normalize_number(&row[i]).unwrap_or(0.0))
                    .collect(),
            })
        })
        .collect();
    if observations.is_empty() {
        return Err(DatasetError::InvalidFileFormat(
            "no rows with parseable dates".to_string(),
        ));
    }

    observations.sort_by_key(|observation| observation.month);
    Ok(observations)
}

/// Sum one value per observation into its month on the contiguous grid.
/// Months with no contributing rows hold the empty sum.
fn resample(
    observations: &[Observation],
    months: &[NaiveDate],
    value: impl Fn(&[f64]) -> f64,
) -> MonthlySeries {
    let mut sums: HashMap<NaiveDate, f64> = HashMap::new();
    for observation in observations {
        *sums.entry(observation.month).or_insert(0.0) += value(&observation.values);
    }

    MonthlySeries::new(
        months
            .iter()
            .map(|&month| SeriesPoint::new(month, sums.get(&month).copied().unwrap_or(0.0)))
            .collect(),
    )
}
