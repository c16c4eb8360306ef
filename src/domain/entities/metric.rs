//! Hit counter values as seen by the domain.

use serde::Serialize;

/// The stored hit count for a single code.
///
/// Counters are created implicitly on the first hit, so "no entry" is a
/// distinct state from "entry with zero hits".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// No counter exists for the code.
    Absent,
    /// A counter exists but holds zero.
    Zero,
    /// A counter exists with a positive count.
    Hits(u64),
}

impl Score {
    /// Builds a score from a raw counter value where `None` means "no entry".
    ///
    /// Sorted-set scores are floats; negative or fractional values never come
    /// from this service and are truncated toward zero.
    pub fn from_raw(raw: Option<f64>) -> Self {
        match raw {
            None => Self::Absent,
            Some(value) => Self::from_count(hits_from_raw(value)),
        }
    }

    /// Builds a score for an entry that is known to exist.
    pub fn from_count(count: u64) -> Self {
        if count == 0 { Self::Zero } else { Self::Hits(count) }
    }

    /// Returns the hit count, or `None` when no entry exists.
    pub fn hits(self) -> Option<u64> {
        match self {
            Self::Absent => None,
            Self::Zero => Some(0),
            Self::Hits(n) => Some(n),
        }
    }
}

/// Converts a sorted-set score to a hit count.
pub(crate) fn hits_from_raw(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

/// One row of the ranked metrics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricEntry {
    pub code: String,
    pub hits: u64,
}

impl MetricEntry {
    pub fn new(code: impl Into<String>, hits: u64) -> Self {
        Self {
            code: code.into(),
            hits,
        }
    }
}
