//! Hit counter backends.
//!
//! Provides two [`MetricsCounter`](crate::domain::repositories::MetricsCounter)
//! implementations:
//! - [`RedisMetricsCounter`] - Production sorted-set counter
//! - [`MemoryMetricsCounter`] - In-process fallback when Redis is not configured

mod memory_counter;
mod redis_counter;

pub use memory_counter::MemoryMetricsCounter;
pub use redis_counter::RedisMetricsCounter;
