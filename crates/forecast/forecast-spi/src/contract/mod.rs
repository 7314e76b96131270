//! Trait contracts for forecasting models.

mod predictor;

pub use predictor::Predictor;
