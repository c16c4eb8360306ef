//! DTOs for metrics endpoints.

use serde::Serialize;

use crate::domain::entities::MetricEntry;

/// One row of `GET /api/metrics`.
#[derive(Debug, Serialize)]
pub struct MetricItem {
    pub code: String,
    pub hits: u64,
}

impl From<MetricEntry> for MetricItem {
    fn from(entry: MetricEntry) -> Self {
        Self {
            code: entry.code,
            hits: entry.hits,
        }
    }
}

/// Body of `GET /api/metrics/{code}`.
#[derive(Debug, Serialize)]
pub struct CodeMetricsResponse {
    pub code: String,
    pub clicks: u64,
}

impl From<MetricEntry> for CodeMetricsResponse {
    fn from(entry: MetricEntry) -> Self {
        Self {
            code: entry.code,
            clicks: entry.hits,
        }
    }
}
