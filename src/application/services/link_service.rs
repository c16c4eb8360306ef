//! Link creation and listing service.

use std::sync::Arc;

use crate::domain::entities::{Link, MIN_CODE_LEN, NewLink, is_reserved_code};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Service for creating and listing short links.
///
/// Codes are supplied by the client and normalized to lowercase before they
/// reach the repository, so uniqueness is case-insensitive.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `url` under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `code` is shorter than [`MIN_CODE_LEN`] characters
    /// - `code` is reserved for a system route (see [`RESERVED_CODES`](crate::domain::entities::RESERVED_CODES))
    /// - `url` is not an absolute URL
    ///
    /// Returns [`AppError::DuplicateCode`] if the code exists in any letter case;
    /// the existing link is left untouched.
    pub async fn create_link(&self, code: &str, url: &str) -> Result<Link, AppError> {
        if code.chars().count() < MIN_CODE_LEN {
            return Err(AppError::validation(json!({
                "code": format!("must be at least {MIN_CODE_LEN} characters")
            })));
        }

        if is_reserved_code(code) {
            return Err(AppError::validation(json!({
                "code": "is reserved"
            })));
        }

        if let Err(e) = Url::parse(url) {
            return Err(AppError::validation(json!({
                "url": format!("invalid URL: {e}")
            })));
        }

        let link = self.link_repository.create(NewLink::new(code, url)).await?;
        tracing::info!(id = link.id, code = %link.code, "Short link created");

        Ok(link)
    }

    /// Lists every link, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Checks that the link store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(id, code.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_link_normalizes_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.code == "rust" && new_link.original_url == "https://rust-lang.org")
            .times(1)
            .returning(|new_link| Ok(create_test_link(1, &new_link.code, &new_link.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link("RUST", "https://rust-lang.org")
            .await
            .unwrap();

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "rust");
    }

    #[tokio::test]
    async fn test_create_link_rejects_short_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("go", "https://go.dev").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_link_rejects_reserved_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        for code in ["health", "Health", "API"] {
            let result = service.create_link(code, "https://example.com").await;
            assert!(matches!(result, Err(AppError::Validation { .. })), "{code}");
        }
    }

    #[tokio::test]
    async fn test_create_link_rejects_relative_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("docs", "/not/absolute").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_link_duplicate_propagates() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::DuplicateCode));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("Taken", "https://example.com").await;

        assert!(matches!(result, Err(AppError::DuplicateCode)));
    }

    #[tokio::test]
    async fn test_list_links_passes_through_order() {
        let mut mock_repo = MockLinkRepository::new();

        let links = vec![
            create_test_link(2, "newer", "https://example.com/2"),
            create_test_link(1, "older", "https://example.com/1"),
        ];

        mock_repo
            .expect_list_all()
            .times(1)
            .returning(move || Ok(links.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.list_links().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].code, "newer");
        assert_eq!(result[1].code, "older");
    }

    #[tokio::test]
    async fn test_list_links_empty() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_list_all().returning(|| Ok(vec![]));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.list_links().await.unwrap().is_empty());
    }
}
