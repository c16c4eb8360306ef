//! In-process counter used when Redis is not configured.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::entities::{MetricEntry, Score};
use crate::domain::repositories::{CounterResult, MetricsCounter};

/// A counter kept in process memory.
///
/// Counts are lost on restart. Ranking orders ties by code descending, the
/// same order Redis returns for equal scores in `ZREVRANGE`.
#[derive(Debug, Default)]
pub struct MemoryMetricsCounter {
    hits: DashMap<String, u64>,
}

impl MemoryMetricsCounter {
    pub fn new() -> Self {
        debug!("Using in-memory metrics counter");
        Self::default()
    }
}

#[async_trait]
impl MetricsCounter for MemoryMetricsCounter {
    async fn increment(&self, code: &str) -> CounterResult<()> {
        // The entry guard holds the shard lock for the whole read-modify-write.
        *self.hits.entry(code.to_string()).or_insert(0) += 1;
        Ok(())
    }

    async fn score(&self, code: &str) -> CounterResult<Score> {
        Ok(match self.hits.get(code) {
            Some(count) => Score::from_count(*count),
            None => Score::Absent,
        })
    }

    async fn top(&self, n: usize) -> CounterResult<Vec<MetricEntry>> {
        let mut entries: Vec<MetricEntry> = self
            .hits
            .iter()
            .map(|entry| MetricEntry::new(entry.key().clone(), *entry.value()))
            .collect();

        entries.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| b.code.cmp(&a.code)));
        entries.truncate(n);

        Ok(entries)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
