//! Prediction service - core business logic

use std::sync::Arc;

use langsight_domain::constants::{
    DEFAULT_CONFIDENCE, EMPTY_INPUT_MESSAGE, INFERENCE_FAILURE_MESSAGE, MAX_CONFIDENCE,
    MIN_CONFIDENCE,
};
use langsight_domain::{LangSightError, Prediction, Result};
use tracing::{error, warn};

use super::ports::LanguageModel;

/// Prediction service for turning raw text into language predictions
pub struct PredictionService {
    model: Arc<dyn LanguageModel>,
}

impl PredictionService {
    /// Create a new prediction service
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Validate the input, run inference, and derive a confidence score
    ///
    /// Fails with `InvalidInput` when the trimmed text is empty and with a
    /// generic `Inference` error when the model fails; the model's own error
    /// is logged here and never surfaced to callers.
    pub async fn predict(&self, text: &str) -> Result<Prediction> {
        if text.trim().is_empty() {
            return Err(LangSightError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let language_code = match self.model.predict_label(text).await {
            Ok(label) => label,
            Err(err) => {
                error!(error = %err, "model inference failed");
                return Err(LangSightError::Inference(INFERENCE_FAILURE_MESSAGE.to_string()));
            }
        };

        let confidence = self.derive_confidence(text, &language_code).await;

        Ok(Prediction { language_code, confidence })
    }

    /// Confidence score for the predicted label
    ///
    /// Uses the model's probability distribution when available and falls
    /// back to `DEFAULT_CONFIDENCE` in every other case: capability absent,
    /// distribution call failed, or the label missing from the distribution.
    /// Never fails the request.
    async fn derive_confidence(&self, text: &str, language_code: &str) -> f64 {
        if !self.model.supports_distribution() {
            return DEFAULT_CONFIDENCE;
        }

        match self.model.predict_distribution(text).await {
            Ok(distribution) => match distribution.get(language_code) {
                Some(score) => score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
                None => {
                    warn!(language_code, "predicted label missing from distribution");
                    DEFAULT_CONFIDENCE
                }
            },
            Err(err) => {
                warn!(error = %err, "confidence derivation failed, using default");
                DEFAULT_CONFIDENCE
            }
        }
    }
}
