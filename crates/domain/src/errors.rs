//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LangSight
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LangSightError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LangSightError {
    /// Coarse category of this error, used to pick the response mapping
    /// for a failed identification request.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidInput(_) => FailureKind::Validation,
            Self::Inference(_) => FailureKind::Inference,
            Self::Config(_) | Self::ModelLoad(_) | Self::Internal(_) => FailureKind::Internal,
        }
    }

    /// Message payload without the variant prefix added by `Display`.
    ///
    /// Request handlers echo validation reasons verbatim, so they need the
    /// raw message rather than the formatted error string.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg)
            | Self::ModelLoad(msg)
            | Self::InvalidInput(msg)
            | Self::Inference(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// Failure category for a handled request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Validation,
    Inference,
    Internal,
}

crate::impl_domain_status_conversions!(FailureKind {
    Validation => "validation",
    Inference => "inference",
    Internal => "internal"
});

/// Result type alias for LangSight operations
pub type Result<T> = std::result::Result<T, LangSightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(LangSightError::InvalidInput("empty".into()).kind(), FailureKind::Validation);
        assert_eq!(LangSightError::Inference("failed".into()).kind(), FailureKind::Inference);
        assert_eq!(LangSightError::Config("missing".into()).kind(), FailureKind::Internal);
        assert_eq!(LangSightError::ModelLoad("corrupt".into()).kind(), FailureKind::Internal);
        assert_eq!(LangSightError::Internal("boom".into()).kind(), FailureKind::Internal);
    }

    #[test]
    fn test_message_strips_variant_prefix() {
        let err = LangSightError::InvalidInput("input text is empty".to_string());
        assert_eq!(err.message(), "input text is empty");
        assert_eq!(err.to_string(), "Invalid input: input text is empty");
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(
            LangSightError::ModelLoad("artifact not found".to_string()).to_string(),
            "Model load error: artifact not found"
        );
        assert_eq!(
            LangSightError::Inference("language prediction failed".to_string()).to_string(),
            "Inference error: language prediction failed"
        );
    }

    #[test]
    fn test_failure_kind_labels() {
        assert_eq!(FailureKind::Validation.to_string(), "validation");
        assert_eq!(FailureKind::Inference.to_string(), "inference");
        assert_eq!(FailureKind::Internal.to_string(), "internal");
    }

    #[test]
    fn test_error_serialization() {
        let err = LangSightError::Inference("language prediction failed".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Inference\""));
        assert!(json.contains("\"message\":\"language prediction failed\""));
    }
}
