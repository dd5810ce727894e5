//! N-gram language model - infrastructure adapter for the model port
//!
//! Wraps a [`ModelArtifact`] loaded from disk and scores text by summing
//! per-n-gram log-likelihoods. The artifact is loaded exactly once at
//! startup and never mutated, so prediction calls are safe to run
//! concurrently without synchronization.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use langsight_core::LanguageModel;
use langsight_domain::{LangSightError, Result};

use super::artifact::ModelArtifact;

/// Language model backed by a character n-gram artifact
#[derive(Debug)]
pub struct NgramLanguageModel {
    artifact: ModelArtifact,
    /// Capability flag, detected once at load time
    supports_distribution: bool,
}

impl NgramLanguageModel {
    /// Load and validate a model artifact from disk
    ///
    /// # Errors
    /// Returns `LangSightError::ModelLoad` if:
    /// - the path does not exist
    /// - the file cannot be read or deserialized
    /// - the artifact violates a structural invariant
    ///
    /// All of these are fatal at startup: the process must not serve
    /// requests without a usable model.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LangSightError::ModelLoad(format!(
                "model artifact not found: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            LangSightError::ModelLoad(format!(
                "failed to read model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        let artifact: ModelArtifact = serde_json::from_str(&contents).map_err(|e| {
            LangSightError::ModelLoad(format!(
                "failed to deserialize model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        artifact.validate()?;

        let supports_distribution = artifact.calibration.is_some();
        tracing::info!(
            path = %path.display(),
            labels = artifact.labels.len(),
            ngram_size = artifact.ngram_size,
            supports_distribution,
            "model artifact loaded"
        );

        Ok(Self { artifact, supports_distribution })
    }

    /// Per-label scores for a text: prior plus summed n-gram weights
    ///
    /// N-grams absent from the weight table contribute `oov_log_prob` to
    /// every label, so unseen text still scores rather than erroring.
    fn scores(&self, text: &str) -> Vec<f64> {
        let normalized = normalize(text);
        let chars: Vec<char> = normalized.chars().collect();

        let mut scores = self.artifact.class_priors.clone();
        if chars.len() < self.artifact.ngram_size {
            return scores;
        }

        for window in chars.windows(self.artifact.ngram_size) {
            let gram: String = window.iter().collect();
            match self.artifact.weights.get(&gram) {
                Some(row) => {
                    for (score, weight) in scores.iter_mut().zip(row) {
                        *score += weight;
                    }
                }
                None => {
                    for score in scores.iter_mut() {
                        *score += self.artifact.oov_log_prob;
                    }
                }
            }
        }

        scores
    }
}

#[async_trait]
impl LanguageModel for NgramLanguageModel {
    async fn predict_label(&self, text: &str) -> Result<String> {
        let scores = self.scores(text);
        let best = argmax(&scores).ok_or_else(|| {
            LangSightError::Inference("model produced no label scores".to_string())
        })?;

        self.artifact.labels.get(best).cloned().ok_or_else(|| {
            LangSightError::Inference(format!("label index {} out of range", best))
        })
    }

    async fn predict_distribution(&self, text: &str) -> Result<HashMap<String, f64>> {
        let Some(calibration) = &self.artifact.calibration else {
            return Err(LangSightError::Inference(
                "model artifact does not expose a probability distribution".to_string(),
            ));
        };

        let probabilities = softmax(&self.scores(text), calibration.temperature);

        Ok(self.artifact.labels.iter().cloned().zip(probabilities).collect())
    }

    fn supports_distribution(&self) -> bool {
        self.supports_distribution
    }

    fn is_loaded(&self) -> bool {
        // Construction only succeeds with a validated artifact; a failed
        // load aborts startup instead of producing an unusable handle.
        true
    }
}

/// Lowercase the text and pad it with single spaces
///
/// Padding lets edge n-grams (word starts and ends) participate in
/// scoring the same way they did during training.
fn normalize(text: &str) -> String {
    format!(" {} ", text.trim().to_lowercase())
}

/// Index of the highest score; ties resolve to the first label
fn argmax(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Temperature softmax over raw scores
///
/// Shifted by the maximum before exponentiation so large log scores
/// cannot overflow.
fn softmax(scores: &[f64], temperature: f64) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let scaled: Vec<f64> = scores.iter().map(|s| s / temperature).collect();
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scaled.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}
