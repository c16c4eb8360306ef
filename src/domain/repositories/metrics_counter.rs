//! Counter trait for per-code hit metrics.

use async_trait::async_trait;

use crate::domain::entities::{MetricEntry, Score};

/// Errors raised by a counter backend.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("counter connection error: {0}")]
    Connection(String),
    #[error("counter operation error: {0}")]
    Operation(String),
}

/// Result type for counter operations.
pub type CounterResult<T> = Result<T, CounterError>;

/// Incrementable, rankable hit counter keyed by short code.
///
/// The counter does not know about links: an entry may exist for a code that
/// has no link, and a link may have no entry until its first hit.
///
/// # Implementations
///
/// - [`crate::infrastructure::counter::RedisMetricsCounter`] - Redis sorted set
/// - [`crate::infrastructure::counter::MemoryMetricsCounter`] - In-process, non-durable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsCounter: Send + Sync {
    /// Adds exactly one hit to `code`, creating the entry at 1 if needed.
    ///
    /// Must be atomic with respect to concurrent increments of any code.
    async fn increment(&self, code: &str) -> CounterResult<()>;

    /// Looks up the current count for `code`, matched exactly.
    async fn score(&self, code: &str) -> CounterResult<Score>;

    /// Returns up to `n` entries by hits descending.
    ///
    /// Equal counts are ordered by code descending.
    async fn top(&self, n: usize) -> CounterResult<Vec<MetricEntry>>;

    /// Checks if the counter backend is reachable.
    async fn health_check(&self) -> bool;
}
