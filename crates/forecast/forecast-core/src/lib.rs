//! Forecast Core Implementations
//!
//! Provides the forecasting machinery of the workspace:
//!
//! - [`arima`]: fixed-order ARIMA point forecasting
//! - [`horizon`]: translation of a target calendar year into monthly steps
//! - [`engine`]: fit-and-forecast over a monthly history
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::prelude::*;
//!
//! let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
//! let mut model = Arima::new(5, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(12).unwrap();
//! assert_eq!(forecast.len(), 12);
//! ```

pub mod arima;
pub mod engine;
pub mod horizon;

// Re-export from SPI
pub use forecast_spi::{ForecastError, ForecastPoint, Predictor, Result, TsError};

pub use arima::Arima;
pub use engine::ForecastEngine;
pub use horizon::{future_months, resolve_steps};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arima::Arima;
    pub use crate::engine::ForecastEngine;
    pub use crate::horizon::{future_months, resolve_steps};
    pub use forecast_spi::{ForecastError, ForecastPoint, Predictor, Result, TsError};
}
