//! Load and forecast operations over the shared series store.
//!
//! Pure synchronous functions; the HTTP handlers in [`crate::routes`] only
//! lock the store and translate errors into responses.

use dataset_facade::{DatasetError, LoadSummary, SeriesPoint, SeriesStore};
use forecast_facade::{ForecastEngine, ForecastError, ForecastPoint, resolve_steps};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A forecast request.
///
/// `days`, `months`, and `years` are accepted for wire compatibility with
/// older clients; horizon resolution ignores them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub days: i64,
    #[serde(default)]
    pub months: i64,
    #[serde(default)]
    pub years: i64,
    #[serde(default)]
    pub target_year: Option<i32>,
    #[serde(default)]
    pub place: Option<String>,
}

/// History and forecast for one place.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResult {
    pub history: Vec<SeriesPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub place: String,
}

/// Failures from either pipeline stage, surfaced verbatim to the client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// Replace the store contents with a freshly ingested dataset.
pub fn load_into(store: &mut SeriesStore, bytes: &[u8]) -> Result<LoadSummary, DatasetError> {
    let (fresh, summary) = dataset_facade::load_dataset(bytes)?;
    *store = fresh;
    Ok(summary)
}

/// Resolve the place and horizon, fit the model, and assemble the response.
pub fn run_forecast(
    store: &SeriesStore,
    request: &ForecastRequest,
) -> Result<ForecastResult, ServiceError> {
    if store.is_empty() {
        return Err(DatasetError::NoDataLoaded.into());
    }

    let place = match &request.place {
        Some(place) => place.clone(),
        None => store
            .default_place()
            .ok_or(DatasetError::NoDataLoaded)?
            .to_string(),
    };
    let series = store
        .get(&place)
        .ok_or_else(|| DatasetError::UnknownPlace(place.clone()))?;
    let last_date = series.last_date().ok_or(DatasetError::NoDataLoaded)?;

    let steps = resolve_steps(request.target_year, last_date).map_err(ServiceError::Forecast)?;
    let forecast = ForecastEngine::new()
        .forecast(&series.values(), last_date, steps)
        .map_err(ServiceError::Forecast)?;

    Ok(ForecastResult {
        history: series.points().to_vec(),
        forecast,
        place,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn monthly_csv(months: usize) -> String {
        let mut csv = String::from("Date,A,B\n");
        let mut current = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        for t in 0..months {
            csv.push_str(&format!("{current},{},{}\n", 100 + t * 2, 300 + t * 4));
            let (year, month) = if current.month() == 12 {
                (current.year() + 1, 1)
            } else {
                (current.year(), current.month() + 1)
            };
            current = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        }
        csv
    }

    fn loaded_store(months: usize) -> SeriesStore {
        let mut store = SeriesStore::new();
        load_into(&mut store, monthly_csv(months).as_bytes()).unwrap();
        store
    }

    #[test]
    fn test_load_into_replaces_previous_dataset() {
        let mut store = SeriesStore::new();
        load_into(&mut store, monthly_csv(12).as_bytes()).unwrap();
        assert_eq!(store.places(), &["All Places", "A", "B"]);

        let other = "Date,Only\n2024-01-01,1\n2024-02-01,2\n";
        load_into(&mut store, other.as_bytes()).unwrap();
        assert_eq!(store.places(), &["All Places", "Only"]);
        assert!(store.get("A").is_none());
    }

    #[test]
    fn test_forecast_requires_loaded_data() {
        let store = SeriesStore::new();
        let result = run_forecast(&store, &ForecastRequest::default());
        assert!(matches!(
            result,
            Err(ServiceError::Dataset(DatasetError::NoDataLoaded))
        ));
    }

    #[test]
    fn test_forecast_defaults_to_aggregate_place() {
        let store = loaded_store(24);
        let result = run_forecast(&store, &ForecastRequest::default()).unwrap();

        assert_eq!(result.place, "All Places");
        assert_eq!(result.history.len(), 24);
        assert_eq!(result.forecast.len(), 12);
    }

    #[test]
    fn test_forecast_unknown_place() {
        let store = loaded_store(24);
        let request = ForecastRequest {
            place: Some("Atlantis".to_string()),
            ..Default::default()
        };

        let result = run_forecast(&store, &request);
        match result {
            Err(ServiceError::Dataset(DatasetError::UnknownPlace(place))) => {
                assert_eq!(place, "Atlantis");
            }
            other => panic!("expected UnknownPlace, got {other:?}"),
        }
    }

    #[test]
    fn test_forecast_for_named_place_to_target_year() {
        let store = loaded_store(24); // 2021-01 .. 2022-12
        let request = ForecastRequest {
            place: Some("A".to_string()),
            target_year: Some(2023),
            ..Default::default()
        };

        let result = run_forecast(&store, &request).unwrap();

        assert_eq!(result.place, "A");
        assert_eq!(result.forecast.len(), 12);
        assert_eq!(
            result.forecast[0].date,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        for pair in result.forecast.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_forecast_rejects_past_target_year() {
        let store = loaded_store(24);
        let request = ForecastRequest {
            target_year: Some(2021),
            ..Default::default()
        };

        let result = run_forecast(&store, &request);
        assert!(matches!(
            result,
            Err(ServiceError::Forecast(ForecastError::InvalidHorizon(_)))
        ));
    }

    #[test]
    fn test_legacy_offset_fields_are_ignored() {
        let store = loaded_store(24);
        let request = ForecastRequest {
            days: 90,
            months: 7,
            years: 3,
            ..Default::default()
        };

        // horizon still defaults to twelve months
        let result = run_forecast(&store, &request).unwrap();
        assert_eq!(result.forecast.len(), 12);
    }

    #[test]
    fn test_forecast_is_deterministic_across_calls() {
        let store = loaded_store(30);
        let request = ForecastRequest {
            place: Some("B".to_string()),
            ..Default::default()
        };

        let first = run_forecast(&store, &request).unwrap();
        let second = run_forecast(&store, &request).unwrap();
        assert_eq!(first.forecast, second.forecast);
    }

    #[test]
    fn test_result_serializes_with_wire_shape() {
        let store = loaded_store(24);
        let result = run_forecast(&store, &ForecastRequest::default()).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["history"][0]["Date"].is_string());
        assert!(json["history"][0]["Value"].is_number());
        assert!(json["forecast"][0]["PredictedValue"].is_number());
        assert_eq!(json["place"], "All Places");
    }
}
