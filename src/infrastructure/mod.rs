//! Infrastructure layer for external integrations.
//!
//! Implements the storage traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`counter`] - Hit counters (Redis and in-memory)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod counter;
pub mod persistence;
