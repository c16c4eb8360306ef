//! Application layer services implementing business logic.
//!
//! Services coordinate the storage traits and are what HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation and listing
//! - [`services::redirect_service::RedirectService`] - Code resolution and hit counting
//! - [`services::metrics_service::MetricsService`] - Ranked and per-code metrics

pub mod services;
