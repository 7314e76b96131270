//! Forecast Facade
//!
//! Unified re-exports and the high-level entry point for the forecasting
//! domain.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use forecast_facade::forecast_monthly;
//!
//! let history: Vec<f64> = (0..24).map(|t| 100.0 + t as f64).collect();
//! let last = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
//!
//! let forecast = forecast_monthly(&history, last, Some(2024)).unwrap();
//! assert_eq!(forecast.len(), 12);
//! ```

// Re-export everything from SPI
pub use forecast_spi::*;

// Re-export everything from Core
pub use forecast_core::*;

use chrono::NaiveDate;

/// Resolve the horizon for `target_year` and produce a fixed-order ARIMA
/// forecast of the monthly history ending at `last_date`.
pub fn forecast_monthly(
    history: &[f64],
    last_date: NaiveDate,
    target_year: Option<i32>,
) -> Result<Vec<ForecastPoint>> {
    let steps = resolve_steps(target_year, last_date)?;
    ForecastEngine::new().forecast(history, last_date, steps)
}
