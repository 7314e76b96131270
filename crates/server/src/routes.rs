//! API route handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dataset_facade::LoadSummary;

use crate::service::{self, ForecastRequest, ForecastResult, ServiceError};
use crate::AppState;

/// Client error carrying the failure message, FastAPI-style.
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": self.0 })),
        )
            .into_response()
    }
}

impl<E: std::error::Error> From<E> for ApiError {
    fn from(error: E) -> Self {
        Self(error.to_string())
    }
}

/// Ingest uploaded file bytes, replacing any previously loaded dataset.
pub async fn load_dataset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoadSummary>, ApiError> {
    let mut store = state.store.write();
    let summary = service::load_into(&mut store, &body)?;
    Ok(Json(summary))
}

/// Forecast one place from the currently loaded dataset.
pub async fn forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ForecastResult>, ApiError> {
    let store = state.store.read();
    let result = service::run_forecast(&store, &request).map_err(|e: ServiceError| {
        tracing::warn!(error = %e, "forecast request failed");
        ApiError::from(e)
    })?;
    Ok(Json(result))
}
