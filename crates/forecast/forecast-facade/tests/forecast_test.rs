//! Integration tests for the forecast facade

use chrono::NaiveDate;
use forecast_facade::{
    forecast_monthly, resolve_steps, Arima, ForecastEngine, ForecastError, Predictor, TsError,
};

fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn monthly_history(months: usize) -> Vec<f64> {
    (0..months)
        .map(|t| 1000.0 + t as f64 * 25.0 + ((t * 13 + 7) % 11) as f64)
        .collect()
}

// ============================================================================
// Horizon Resolution
// ============================================================================

#[test]
fn test_resolve_steps_to_next_year() {
    assert_eq!(resolve_steps(Some(2024), date(2023, 6)).unwrap(), 18);
}

#[test]
fn test_resolve_steps_rejects_past_target() {
    let result = resolve_steps(Some(2023), date(2023, 12));
    assert!(matches!(result, Err(ForecastError::InvalidHorizon(_))));
}

#[test]
fn test_resolve_steps_defaults_to_twelve() {
    assert_eq!(resolve_steps(None, date(2021, 2)).unwrap(), 12);
}

// ============================================================================
// End-to-End Forecasting
// ============================================================================

#[test]
fn test_forecast_monthly_produces_requested_span() {
    let history = monthly_history(24);
    let last = date(2022, 12);

    let forecast = forecast_monthly(&history, last, Some(2023)).unwrap();

    assert_eq!(forecast.len(), 12);
    assert_eq!(forecast[0].date, date(2023, 1));
    assert_eq!(forecast[11].date, date(2023, 12));
    for pair in forecast.windows(2) {
        assert!(pair[0].date < pair[1].date, "dates must strictly increase");
    }
    assert!(forecast.iter().all(|p| p.value.is_finite()));
}

#[test]
fn test_forecast_monthly_without_target_year() {
    let history = monthly_history(36);
    let forecast = forecast_monthly(&history, date(2024, 3), None).unwrap();

    assert_eq!(forecast.len(), 12);
    assert_eq!(forecast[0].date, date(2024, 4));
}

#[test]
fn test_forecast_monthly_is_idempotent() {
    let history = monthly_history(30);
    let first = forecast_monthly(&history, date(2023, 6), Some(2024)).unwrap();
    let second = forecast_monthly(&history, date(2023, 6), Some(2024)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_forecast_monthly_short_history_fails() {
    let result = forecast_monthly(&[5.0, 6.0], date(2023, 2), Some(2023));
    match result {
        Err(ForecastError::ModelingFailed { source }) => {
            assert!(matches!(source, TsError::InsufficientData { .. }));
        }
        other => panic!("expected ModelingFailed, got {other:?}"),
    }
}

// ============================================================================
// Engine and Model Access Through the Facade
// ============================================================================

#[test]
fn test_custom_order_engine() {
    let history = monthly_history(24);
    let engine = ForecastEngine::with_order(1, 1, 0);
    let forecast = engine.forecast(&history, date(2022, 12), 6).unwrap();
    assert_eq!(forecast.len(), 6);
}

#[test]
fn test_direct_model_use() {
    let history = monthly_history(24);
    let mut model = Arima::new(5, 1, 0).unwrap();
    model.fit(&history).unwrap();
    assert_eq!(model.order(), (5, 1, 0));
    assert_eq!(model.predict(3).unwrap().len(), 3);
}
