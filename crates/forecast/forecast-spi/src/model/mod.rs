//! Data models for the forecasting domain.

mod forecast_point;

pub use forecast_point::ForecastPoint;
