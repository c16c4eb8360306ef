//! Ranked and per-code hit metrics.

use std::sync::Arc;

use crate::domain::entities::{MetricEntry, Score};
use crate::domain::repositories::MetricsCounter;
use crate::error::AppError;

/// Upper bound on the ranked metrics view.
pub const MAX_TOP_METRICS: usize = 50;

/// Read-only views over the metrics counter.
///
/// Never consults the link store: metrics may exist for codes without a link.
pub struct MetricsService {
    counter: Arc<dyn MetricsCounter>,
}

impl MetricsService {
    pub fn new(counter: Arc<dyn MetricsCounter>) -> Self {
        Self { counter }
    }

    /// Returns up to `limit` codes by hits descending, capped at [`MAX_TOP_METRICS`].
    ///
    /// The result is re-sorted here so the order does not depend on the
    /// backend; the sort is stable, keeping the backend's order for ties.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Counter`] if the counter backend fails.
    pub async fn top_metrics(&self, limit: usize) -> Result<Vec<MetricEntry>, AppError> {
        let limit = limit.min(MAX_TOP_METRICS);

        let mut entries = self.counter.top(limit).await?;
        entries.sort_by(|a, b| b.hits.cmp(&a.hits));
        entries.truncate(limit);

        Ok(entries)
    }

    /// Returns the hit count for `code` exactly as given.
    ///
    /// Codes are not normalized: callers pass the stored (lowercase) form.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entry))` if a counter exists, including one holding zero
    /// - `Ok(None)` if the code has never been counted
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Counter`] if the counter backend fails.
    pub async fn metrics_for(&self, code: &str) -> Result<Option<MetricEntry>, AppError> {
        let entry = match self.counter.score(code).await? {
            Score::Absent => None,
            Score::Zero => Some(MetricEntry::new(code, 0)),
            Score::Hits(hits) => Some(MetricEntry::new(code, hits)),
        };

        Ok(entry)
    }

    /// Checks if the counter backend is reachable.
    pub async fn counter_healthy(&self) -> bool {
        self.counter.health_check().await
    }
}
