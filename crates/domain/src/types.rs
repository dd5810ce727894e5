//! Common data types used throughout the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a language identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Language code as emitted by the model (e.g. "IT", "EN")
    pub language_code: String,

    /// Confidence score (0.0 to 1.0)
    pub confidence: f64,
}

/// Service health as reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    ModelNotLoaded,
}

crate::impl_domain_status_conversions!(HealthStatus {
    Ok => "ok",
    ModelNotLoaded => "model_not_loaded"
});

/// One entry in the request audit log
///
/// Every handled identification request produces exactly one entry,
/// success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub timestamp: DateTime<Utc>,

    /// First 100 characters of the submitted text, trimmed. Never the
    /// full input.
    pub text_preview: String,

    pub outcome: RequestOutcome,
}

/// Outcome recorded for a handled request
///
/// The confidence is only representable on the success arm, so an entry
/// can never carry a score for a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RequestOutcome {
    Success { language_code: String, confidence: f64 },
    Failure { error: String },
}

impl RequestLogEntry {
    /// Entry for a request that produced a prediction
    pub fn success(text_preview: impl Into<String>, prediction: &Prediction) -> Self {
        Self {
            timestamp: Utc::now(),
            text_preview: text_preview.into(),
            outcome: RequestOutcome::Success {
                language_code: prediction.language_code.clone(),
                confidence: prediction.confidence,
            },
        }
    }

    /// Entry for a request that failed
    pub fn failure(text_preview: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            text_preview: text_preview.into(),
            outcome: RequestOutcome::Failure { error: error.into() },
        }
    }

    /// Whether this entry records a successful identification
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(serde_json::to_string(&HealthStatus::Ok).unwrap(), "\"ok\"");
        assert_eq!(
            serde_json::to_string(&HealthStatus::ModelNotLoaded).unwrap(),
            "\"model_not_loaded\""
        );
    }

    #[test]
    fn test_health_status_conversions() {
        assert_eq!(HealthStatus::Ok.to_string(), "ok");
        assert_eq!(HealthStatus::ModelNotLoaded.to_string(), "model_not_loaded");
        assert_eq!(HealthStatus::from_str("OK").unwrap(), HealthStatus::Ok);
        assert_eq!(
            HealthStatus::from_str("model_not_loaded").unwrap(),
            HealthStatus::ModelNotLoaded
        );
        assert!(HealthStatus::from_str("degraded").is_err());
    }

    #[test]
    fn test_success_entry_carries_prediction() {
        let prediction = Prediction { language_code: "IT".to_string(), confidence: 0.98 };
        let entry = RequestLogEntry::success("Questo è un esempio.", &prediction);

        assert!(entry.is_success());
        assert_eq!(entry.text_preview, "Questo è un esempio.");
        match entry.outcome {
            RequestOutcome::Success { language_code, confidence } => {
                assert_eq!(language_code, "IT");
                assert!((confidence - 0.98).abs() < f64::EPSILON);
            }
            RequestOutcome::Failure { .. } => panic!("expected success outcome"),
        }
    }

    #[test]
    fn test_failure_entry_has_no_confidence() {
        let entry = RequestLogEntry::failure("", "input text is empty");

        assert!(!entry.is_success());
        match entry.outcome {
            RequestOutcome::Failure { error } => assert_eq!(error, "input text is empty"),
            RequestOutcome::Success { .. } => panic!("expected failure outcome"),
        }
    }

    #[test]
    fn test_entry_timestamp_is_recent() {
        let before = Utc::now();
        let entry = RequestLogEntry::failure("x", "err");
        let after = Utc::now();

        assert!(entry.timestamp >= before);
        assert!(entry.timestamp <= after);
    }
}
