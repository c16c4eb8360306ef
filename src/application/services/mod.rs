//! Business logic services for the application layer.

pub mod link_service;
pub mod metrics_service;
pub mod redirect_service;

pub use link_service::LinkService;
pub use metrics_service::{MAX_TOP_METRICS, MetricsService};
pub use redirect_service::{CountingMode, RedirectOutcome, RedirectService};
