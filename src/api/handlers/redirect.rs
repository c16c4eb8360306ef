//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::code::CodePath;
use crate::application::services::RedirectOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code (at least 3 characters)
/// 2. Look the lowercased code up in the link store
/// 3. Record the hit (awaited or queued, per counting mode)
/// 4. Return 301 Moved Permanently
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist; the message echoes the
/// code as requested. Returns 500 if either store fails while counting is
/// awaited.
pub async fn redirect_handler(
    State(state): State<AppState>,
    path: Result<Path<CodePath>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(params) = path?;
    params.validate()?;

    match state.redirect_service.resolve(&params.code).await? {
        RedirectOutcome::Found { location } => Ok(permanent_redirect(&location)),
        RedirectOutcome::NotFound => Err(AppError::link_not_found(&params.code)),
    }
}

/// `axum::response::Redirect::permanent` answers 308; clients here expect 301.
fn permanent_redirect(location: &str) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}
