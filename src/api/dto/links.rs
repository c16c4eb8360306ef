//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Client-chosen short code; stored lowercased.
    #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
    pub code: String,

    /// Redirect target; must be an absolute URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response to a successful link creation.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    #[serde(rename = "shortLinkId")]
    pub short_link_id: i64,
}
