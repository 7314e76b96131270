//! Forecast operation error type

use crate::error::TsError;
use thiserror::Error;

/// Result type alias for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while resolving and producing a forecast
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The requested horizon does not extend beyond the observed history
    #[error("Invalid forecast horizon: {0}")]
    InvalidHorizon(String),

    /// The underlying model failed to fit or predict; the cause is preserved
    #[error("ARIMA modeling failed: {source}")]
    ModelingFailed {
        #[from]
        source: TsError,
    },
}
