//! Predictor trait for time series models
//!
//! Defines the fit-predict interface that forecasting models implement.

use crate::error::ModelResult;

/// Common trait for time series point forecasters.
///
/// Follows the fit-predict pattern common in statistical libraries: a model
/// is constructed with its hyperparameters, fitted to historical data, and
/// then asked for a fixed number of future values.
///
/// # Example
///
/// ```rust,ignore
/// use forecast_spi::Predictor;
///
/// fn forecast<P: Predictor>(model: &mut P, data: &[f64], horizon: usize) -> forecast_spi::error::ModelResult<Vec<f64>> {
///     model.fit(data)?;
///     model.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data.
    fn fit(&mut self, data: &[f64]) -> ModelResult<()>;

    /// Predict `steps` future values.
    ///
    /// Returns a vector of exactly `steps` predictions, or an error if the
    /// model has not been fitted or prediction fails numerically.
    fn predict(&self, steps: usize) -> ModelResult<Vec<f64>>;

    /// Whether the model has been successfully fitted.
    fn is_fitted(&self) -> bool;
}
