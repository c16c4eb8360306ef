//! Handlers for link creation and listing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link under a client-supplied code.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "code": "rust", "url": "https://rust-lang.org" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "shortLinkId": 1 }`.
///
/// # Errors
///
/// - 400 `{ "message": "Duplicated code" }` if the code exists in any letter case
/// - 400 `{ "message": "Validation failed", ... }` on a short code, bad URL or bad JSON
/// - 500 `{ "error": "Internal server error" }` on other failures
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(&payload.code, &payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link_id: link.id,
        }),
    ))
}

/// Lists every link, most recently created first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Each item is a [`Link`] serialized as
/// `{ "id", "code", "original_url", "created_at" }`.
pub async fn list_links_handler(State(state): State<AppState>) -> Result<Json<Vec<Link>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links))
}
