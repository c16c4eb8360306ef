//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated with
//! `mockall` for unit tests.
//!
//! - [`LinkRepository`] - Durable code → URL mapping
//! - [`MetricsCounter`] - Hit counts per code with ranked reads

pub mod link_repository;
pub mod metrics_counter;

pub use link_repository::LinkRepository;
pub use metrics_counter::{CounterError, CounterResult, MetricsCounter};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use metrics_counter::MockMetricsCounter;
