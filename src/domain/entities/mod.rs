//! Core domain entities.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Input for creating a link, with the code already normalized
//! - [`Score`] - Tri-state hit counter value for one code
//! - [`MetricEntry`] - One row of the ranked metrics view

pub mod link;
pub mod metric;

pub use link::{Link, MIN_CODE_LEN, NewLink, RESERVED_CODES, is_reserved_code, normalize_code};
pub use metric::{MetricEntry, Score};
