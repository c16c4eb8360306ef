//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::{LinkService, MetricsService, RedirectService};
use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::MetricsCounter;
use crate::infrastructure::persistence::PgLinkRepository;

/// Services shared by every request.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub redirect_service: Arc<RedirectService<PgLinkRepository>>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    /// Wires services over the given store handles.
    ///
    /// With `hit_tx` set, redirects enqueue hits for the background worker
    /// instead of awaiting the counter; see
    /// [`CountingMode`](crate::application::services::CountingMode).
    pub fn new(
        pool: Arc<PgPool>,
        counter: Arc<dyn MetricsCounter>,
        hit_tx: Option<mpsc::Sender<HitEvent>>,
    ) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool));

        let redirect_service = match hit_tx {
            Some(tx) => RedirectService::detached(link_repository.clone(), tx),
            None => RedirectService::awaited(link_repository.clone(), counter.clone()),
        };

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            redirect_service: Arc::new(redirect_service),
            metrics_service: Arc::new(MetricsService::new(counter)),
        }
    }
}
