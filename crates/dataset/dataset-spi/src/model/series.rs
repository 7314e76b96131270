//! Monthly time series types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observed monthly value.
///
/// Serializes with the historical wire field names (`Date`, `Value`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// First day of the observed month
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Aggregated value for that month
    #[serde(rename = "Value")]
    pub value: f64,
}

impl SeriesPoint {
    /// Create a new series point.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A monthly-resampled time series.
///
/// Invariant: dates are strictly increasing first-of-month dates spaced
/// exactly one calendar month apart, with no gaps inside the observed span.
/// Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    points: Vec<SeriesPoint>,
}

impl MonthlySeries {
    /// Wrap an ordered sequence of monthly points.
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    /// The ordered points.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// The values, in date order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// First observed month.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Last observed month.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Number of months in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_series_point_wire_format() {
        let point = SeriesPoint::new(date(2021, 1), 1291469.0);
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["Date"], "2021-01-01");
        assert_eq!(json["Value"], 1291469.0);
    }

    #[test]
    fn test_series_accessors() {
        let series = MonthlySeries::new(vec![
            SeriesPoint::new(date(2021, 1), 10.0),
            SeriesPoint::new(date(2021, 2), 12.0),
            SeriesPoint::new(date(2021, 3), 9.0),
        ]);

        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.first_date(), Some(date(2021, 1)));
        assert_eq!(series.last_date(), Some(date(2021, 3)));
        assert_eq!(series.values(), vec![10.0, 12.0, 9.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = MonthlySeries::new(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.first_date(), None);
        assert_eq!(series.last_date(), None);
    }
}
