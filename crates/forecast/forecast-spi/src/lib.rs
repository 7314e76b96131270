//! Forecast Service Provider Interface
//!
//! Defines the foundational abstractions of the forecasting domain:
//!
//! - [`Predictor`]: the fit/predict trait every model implements
//! - [`TsError`]: model-level error type
//! - [`ForecastError`]: forecast-operation error type (horizon, modeling)
//! - [`ForecastPoint`]: one predicted monthly value

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Predictor;
pub use error::{ForecastError, Result, TsError};
pub use model::ForecastPoint;
