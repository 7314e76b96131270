//! Fit-and-forecast engine
//!
//! Fits a fresh fixed-order ARIMA model on every call (no cached model
//! state) and pairs the point forecasts with the calendar months following
//! the observed history.

use chrono::NaiveDate;
use forecast_spi::{ForecastPoint, Predictor, Result};

use crate::arima::Arima;
use crate::horizon::future_months;

/// Forecast engine with a fixed ARIMA order.
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    p: usize,
    d: usize,
    q: usize,
}

impl Default for ForecastEngine {
    /// ARIMA(5,1,0): a robust default for monthly data without explicit
    /// seasonality handling.
    fn default() -> Self {
        Self { p: 5, d: 1, q: 0 }
    }
}

impl ForecastEngine {
    /// Engine with the default order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit order.
    pub fn with_order(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Fit the model to `history` and forecast `steps` monthly values
    /// following `last_date`.
    ///
    /// Model failures (insufficient history, invalid values, singular
    /// estimation) surface as [`forecast_spi::ForecastError::ModelingFailed`]
    /// with the underlying cause attached.
    pub fn forecast(
        &self,
        history: &[f64],
        last_date: NaiveDate,
        steps: usize,
    ) -> Result<Vec<ForecastPoint>> {
        let mut model = Arima::new(self.p, self.d, self.q)?;
        model.fit(history)?;
        let values = model.predict(steps)?;
        tracing::debug!(
            steps,
            history_len = history.len(),
            "fitted ARIMA({}, {}, {})",
            self.p,
            self.d,
            self.q
        );

        Ok(future_months(last_date, steps)
            .into_iter()
            .zip(values)
            .map(|(date, value)| ForecastPoint::new(date, value))
            .collect())
    }
}
