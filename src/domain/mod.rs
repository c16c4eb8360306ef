//! Domain layer: entities, storage contracts, and the detached hit pipeline.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`hit_event`] - Hit queued for detached counting
//! - [`hit_worker`] - Background worker applying queued hits
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; implementations of its traits live in [`crate::infrastructure`].

pub mod entities;
pub mod hit_event;
pub mod hit_worker;
pub mod repositories;
