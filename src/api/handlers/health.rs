//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` through the link store
/// 2. **Counter**: Backend ping
/// 3. **Hit queue**: Open and remaining capacity (detached counting only)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let counter_check = check_counter(&state).await;

    let queue_check = check_hit_queue(&state);

    let all_healthy = db_check.is_ok()
        && counter_check.is_ok()
        && queue_check.as_ref().is_none_or(CheckStatus::is_ok);

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            counter: counter_check,
            hit_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.link_service.check_store().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

async fn check_counter(state: &AppState) -> CheckStatus {
    if state.metrics_service.counter_healthy().await {
        CheckStatus::ok("Counter reachable")
    } else {
        CheckStatus::error("Counter unreachable")
    }
}

fn check_hit_queue(state: &AppState) -> Option<CheckStatus> {
    let tx = state.redirect_service.hit_queue()?;

    Some(if tx.is_closed() {
        CheckStatus::error("Hit queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", tx.capacity()))
    })
}
