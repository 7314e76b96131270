//! Predicted value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single predicted monthly value.
///
/// Serializes with the historical wire field names (`Date`, `PredictedValue`)
/// so existing clients keep working unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// First day of the predicted month
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Predicted value for that month
    #[serde(rename = "PredictedValue")]
    pub value: f64,
}

impl ForecastPoint {
    /// Create a new forecast point.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let point = ForecastPoint::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 125.5);
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["Date"], "2024-03-01");
        assert_eq!(json["PredictedValue"], 125.5);
    }

    #[test]
    fn test_round_trips_through_json() {
        let point = ForecastPoint::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), -3.25);
        let json = serde_json::to_string(&point).unwrap();
        let back: ForecastPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
