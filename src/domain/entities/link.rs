//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Minimum length of a short code, in characters.
pub const MIN_CODE_LEN: usize = 3;

/// Codes that collide with top-level routes and can never be redirected.
pub const RESERVED_CODES: &[&str] = &["health", "api"];

/// A stored short link.
///
/// `code` is always in canonical (lowercase) form once it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// Build it with [`NewLink::new`] so the code is normalized before it reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl NewLink {
    pub fn new(code: &str, original_url: impl Into<String>) -> Self {
        Self {
            code: normalize_code(code),
            original_url: original_url.into(),
        }
    }
}

/// Returns the canonical form of a short code.
///
/// Codes are case-insensitive; every lookup and insert goes through this.
pub fn normalize_code(code: &str) -> String {
    code.to_lowercase()
}

/// Returns true if `code`, in any letter case, is taken by a system route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&normalize_code(code).as_str())
}
