//! Hit event model for detached hit counting.

/// A hit waiting to be applied to the metrics counter.
///
/// Sent from the redirect path to [`crate::domain::hit_worker::run_hit_worker`]
/// when counting runs in [`CountingMode::Detached`](crate::application::services::CountingMode).
/// `code` is the link's stored code, never the raw request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitEvent {
    pub code: String,
}

impl HitEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_event_creation() {
        let event = HitEvent::new("rust");
        assert_eq!(event.code, "rust");
    }
}
