//! Error handling for Dalform Core.
//!
//! Validation failures are *not* errors: they come back as
//! [`ValidationResult`](crate::domain::ValidationResult) values. This type
//! covers the few operations that genuinely cannot proceed, such as a
//! payload that is not JSON at all or a rule set that contradicts itself.

use thiserror::Error;

/// Root error type for Dalform Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DalformError {
    /// The payload text could not be parsed as JSON.
    #[error("Malformed payload at line {line}, column {column}: {reason}")]
    MalformedPayload {
        line: usize,
        column: usize,
        reason: String,
    },

    /// A custom rule set is self-contradictory.
    #[error("Invalid validation rules: {reason}")]
    InvalidRules { reason: String },
}

impl DalformError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedPayload { line, column, .. } => vec![
                format!("Check the JSON near line {line}, column {column}"),
                "Payloads look like: {\"title\": \"...\", \"description\": \"...\", \"tags\": [{\"id\": 1}]}".into(),
            ],
            Self::InvalidRules { reason } => vec![
                format!("Rule problem: {reason}"),
                "Check the [rules] section of your configuration".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedPayload { .. } => ErrorCategory::Input,
            Self::InvalidRules { .. } => ErrorCategory::Configuration,
        }
    }
}

impl From<serde_json::Error> for DalformError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
}

/// Convenient result type alias.
pub type DalformResult<T> = Result<T, DalformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_keeps_position() {
        let err: DalformError = serde_json::from_str::<serde_json::Value>("{\n  \"title\": }")
            .unwrap_err()
            .into();
        match err {
            DalformError::MalformedPayload { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn categories() {
        let rules = DalformError::InvalidRules { reason: "x".into() };
        assert_eq!(rules.category(), ErrorCategory::Configuration);
        assert!(!rules.suggestions().is_empty());
    }
}
