//! Handlers for hit metrics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use validator::Validate;

use crate::api::dto::code::CodePath;
use crate::api::dto::metrics::{CodeMetricsResponse, MetricItem};
use crate::application::services::MAX_TOP_METRICS;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most-hit codes.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// # Response
///
/// Up to 50 entries, hits descending:
///
/// ```json
/// [{ "code": "rust", "hits": 10 }, { "code": "tokio", "hits": 5 }]
/// ```
pub async fn top_metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetricItem>>, AppError> {
    let entries = state.metrics_service.top_metrics(MAX_TOP_METRICS).await?;

    Ok(Json(entries.into_iter().map(MetricItem::from).collect()))
}

/// Returns the hit count for one code.
///
/// # Endpoint
///
/// `GET /api/metrics/{code}`
///
/// The code is matched exactly; metrics are keyed by the lowercase stored code.
///
/// # Errors
///
/// Returns 404 Not Found if the code has never been hit.
pub async fn code_metrics_handler(
    State(state): State<AppState>,
    path: Result<Path<CodePath>, PathRejection>,
) -> Result<Json<CodeMetricsResponse>, AppError> {
    let Path(params) = path?;
    params.validate()?;

    state
        .metrics_service
        .metrics_for(&params.code)
        .await?
        .map(|entry| Json(CodeMetricsResponse::from(entry)))
        .ok_or_else(|| AppError::metrics_not_found(&params.code))
}
