//! Short code path parameter.

use serde::Deserialize;
use validator::Validate;

/// The `{code}` segment of `/{code}` and `/api/metrics/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CodePath {
    #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_counts_characters() {
        let path = CodePath {
            code: "ёжик".to_string(),
        };
        assert!(path.validate().is_ok());

        let path = CodePath {
            code: "ab".to_string(),
        };
        assert!(path.validate().is_err());
    }
}
