//! Redis sorted-set counter.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::{MetricEntry, Score, metric::hits_from_raw};
use crate::domain::repositories::{CounterError, CounterResult, MetricsCounter};

impl From<RedisError> for CounterError {
    fn from(e: RedisError) -> Self {
        CounterError::Operation(e.to_string())
    }
}

/// Hit counter stored in a single Redis sorted set.
///
/// Members are codes, scores are hit counts. `ZINCRBY` makes increments
/// atomic server-side, so concurrent redirects never lose updates. Uses a
/// shared `ConnectionManager`, cloned per operation.
pub struct RedisMetricsCounter {
    conn: ConnectionManager,
    key: String,
}

impl RedisMetricsCounter {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key` - Name of the sorted set holding the counters
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, key: impl Into<String>) -> CounterResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CounterError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CounterError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CounterError::Connection(format!("Redis PING failed: {}", e)))?;

        let key = key.into();
        info!(key = %key, "Connected to Redis");

        Ok(Self { conn: manager, key })
    }

    /// Name of the sorted set this counter writes to.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl MetricsCounter for RedisMetricsCounter {
    async fn increment(&self, code: &str) -> CounterResult<()> {
        let mut conn = self.conn.clone();
        let total: f64 = conn.zincr(&self.key, code, 1_i64).await?;
        debug!(code, total, "ZINCRBY");
        Ok(())
    }

    async fn score(&self, code: &str) -> CounterResult<Score> {
        let mut conn = self.conn.clone();
        let raw: Option<f64> = conn.zscore(&self.key, code).await?;
        Ok(Score::from_raw(raw))
    }

    async fn top(&self, n: usize) -> CounterResult<Vec<MetricEntry>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let stop = isize::try_from(n - 1).unwrap_or(isize::MAX);
        let mut conn = self.conn.clone();
        let rows: Vec<(String, f64)> = conn.zrevrange_withscores(&self.key, 0, stop).await?;

        Ok(rows
            .into_iter()
            .map(|(code, score)| MetricEntry::new(code, hits_from_raw(score)))
            .collect())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
