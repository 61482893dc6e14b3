//! HTTP handlers for the dashboard API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::dataset::Dataset;
use crate::views::{compute_views, ViewBundle, ViewError};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// A selection failure rendered as a JSON error body
///
/// The page shows an explicit error state for these instead of keeping the
/// previous charts.
#[derive(Debug)]
pub struct ApiError(pub ViewError);

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ViewError::SelectionNotFound(_) => StatusCode::NOT_FOUND,
            ViewError::SelectionAmbiguous { .. } => StatusCode::CONFLICT,
        };
        let body = json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
        });
        (status, Json(body)).into_response()
    }
}

/// Handler for the selector options
pub async fn handles_handler(State(dataset): State<Arc<Dataset>>) -> impl IntoResponse {
    Json(json!({
        "handles": dataset.handles().collect::<Vec<_>>(),
        "default": dataset.default_selection(),
    }))
}

/// Handler for one selection event
pub async fn views_handler(
    State(dataset): State<Arc<Dataset>>,
    Path(handle): Path<String>,
) -> Result<Json<ViewBundle>, ApiError> {
    debug!(handle = %handle, "selection event");
    let bundle = compute_views(&dataset, &handle)?;
    Ok(Json(bundle))
}

/// Handler for system status
pub async fn status_handler(State(dataset): State<Arc<Dataset>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "dataset": {
            "records": dataset.len(),
        },
        "data_quality": dataset.data_quality(),
    }))
}
