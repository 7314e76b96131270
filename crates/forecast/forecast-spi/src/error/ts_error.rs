//! Model-level error type
//!
//! Errors raised while fitting a time series model or producing predictions
//! from it. Operation-level failures (horizon resolution, wrapping of model
//! failures) live in [`crate::error::ForecastError`].

use thiserror::Error;

/// Result type alias for model fit/predict operations
pub type ModelResult<T> = std::result::Result<T, TsError>;

/// Errors that can occur inside a time series model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Insufficient data points for the operation
    #[error("insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid hyperparameter value
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error (singular system, non-finite estimate)
    #[error("numerical error: {0}")]
    NumericalError(String),

    /// Invalid time series data
    #[error("invalid data: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = TsError::InsufficientData {
            required: 7,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "insufficient data: need at least 7 points, got 3"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = TsError::InvalidParameter {
            name: "p".to_string(),
            reason: "must be <= 10".to_string(),
        };
        assert_eq!(error.to_string(), "invalid parameter 'p': must be <= 10");
    }

    #[test]
    fn test_not_fitted_display() {
        assert_eq!(
            TsError::NotFitted.to_string(),
            "model must be fitted before prediction"
        );
    }

    #[test]
    fn test_numerical_error_display() {
        let error = TsError::NumericalError("singular normal equations".to_string());
        assert_eq!(
            error.to_string(),
            "numerical error: singular normal equations"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = TsError::InvalidData("series contains NaN".to_string());
        assert_eq!(error.to_string(), "invalid data: series contains NaN");
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = TsError::InsufficientData {
            required: 7,
            actual: 3,
        };
        assert_eq!(error.clone(), error);
        assert_ne!(error, TsError::NotFitted);
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> ModelResult<()> {
            Err(TsError::NotFitted)
        }

        fn outer() -> ModelResult<i32> {
            inner()?;
            Ok(1)
        }

        assert_eq!(outer().unwrap_err(), TsError::NotFitted);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &TsError::NotFitted;
        let _ = error.to_string();
    }
}
