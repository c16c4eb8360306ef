//! API route configuration.

use crate::api::handlers::{
    code_metrics_handler, create_link_handler, list_links_handler, top_metrics_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET  /links`           - List links, newest first
/// - `POST /links`           - Create a link
/// - `GET  /metrics`         - Top 50 codes by hits
/// - `GET  /metrics/{code}`  - Hits for one code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/metrics", get(top_metrics_handler))
        .route("/metrics/{code}", get(code_metrics_handler))
}
