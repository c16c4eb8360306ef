//! Redirect resolution and hit counting.
//!
//! Resolving a code is a two-step saga over two independent stores:
//!
//! 1. Look the code up in the link store.
//! 2. Record a hit for the link's stored code in the metrics counter.
//!
//! No transaction spans both steps. [`CountingMode`] decides whether step 2
//! finishes before the redirect is returned.
//!
//! Emits `redirects_total{outcome}` and `hits_dropped_total` through the
//! `metrics` facade.

use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, warn};

use crate::domain::entities::normalize_code;
use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::{LinkRepository, MetricsCounter};
use crate::error::AppError;

/// How a hit is recorded relative to the redirect response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingMode {
    /// The increment is awaited before redirecting. A counter failure fails
    /// the request, so every redirect that was answered has been counted.
    #[default]
    Awaited,
    /// The hit is queued for the background worker and the redirect is
    /// answered immediately. Hits can be lost if the queue is full or the
    /// process stops before the worker applies them.
    Detached,
}

impl FromStr for CountingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "awaited" | "sync" => Ok(Self::Awaited),
            "detached" | "async" => Ok(Self::Detached),
            other => Err(format!(
                "unknown counting mode '{other}', expected 'awaited' or 'detached'"
            )),
        }
    }
}

/// Result of resolving a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The code exists; redirect permanently to `location`.
    Found { location: String },
    /// No link has this code. No hit was recorded.
    NotFound,
}

/// Where hits go.
enum HitSink {
    Counter(Arc<dyn MetricsCounter>),
    Queue(mpsc::Sender<HitEvent>),
}

/// Resolves short codes to destinations and counts hits.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
    sink: HitSink,
}

impl<L: LinkRepository> RedirectService<L> {
    /// Creates a service that awaits each increment before redirecting.
    pub fn awaited(link_repository: Arc<L>, counter: Arc<dyn MetricsCounter>) -> Self {
        Self {
            link_repository,
            sink: HitSink::Counter(counter),
        }
    }

    /// Creates a service that hands hits to the worker behind `hit_tx`.
    pub fn detached(link_repository: Arc<L>, hit_tx: mpsc::Sender<HitEvent>) -> Self {
        Self {
            link_repository,
            sink: HitSink::Queue(hit_tx),
        }
    }

    pub fn counting_mode(&self) -> CountingMode {
        match self.sink {
            HitSink::Counter(_) => CountingMode::Awaited,
            HitSink::Queue(_) => CountingMode::Detached,
        }
    }

    /// The hit queue, when counting is detached.
    pub fn hit_queue(&self) -> Option<&mpsc::Sender<HitEvent>> {
        match &self.sink {
            HitSink::Counter(_) => None,
            HitSink::Queue(tx) => Some(tx),
        }
    }

    /// Resolves `code` and records a hit if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the lookup fails.
    /// Returns [`AppError::Counter`] if the increment fails in
    /// [`CountingMode::Awaited`]; detached hits never fail the request.
    pub async fn resolve(&self, code: &str) -> Result<RedirectOutcome, AppError> {
        let code = normalize_code(code);

        let Some(link) = self.link_repository.find_by_code(&code).await? else {
            debug!(code = %code, "Redirect target not found");
            metrics::counter!("redirects_total", "outcome" => "not_found").increment(1);
            return Ok(RedirectOutcome::NotFound);
        };

        self.record_hit(&link.code).await?;
        metrics::counter!("redirects_total", "outcome" => "found").increment(1);

        Ok(RedirectOutcome::Found {
            location: link.original_url,
        })
    }

    async fn record_hit(&self, code: &str) -> Result<(), AppError> {
        match &self.sink {
            HitSink::Counter(counter) => {
                counter.increment(code).await?;
            }
            HitSink::Queue(tx) => match tx.try_send(HitEvent::new(code)) {
                Ok(()) => {}
                Err(TrySendError::Full(event)) => {
                    metrics::counter!("hits_dropped_total").increment(1);
                    warn!(code = %event.code, "Hit queue full, hit dropped");
                }
                Err(TrySendError::Closed(event)) => {
                    metrics::counter!("hits_dropped_total").increment(1);
                    error!(code = %event.code, "Hit queue closed, hit dropped");
                }
            },
        }
        Ok(())
    }
}
