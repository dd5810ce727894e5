//! Serialized form of the trained language classifier
//!
//! The artifact is a character n-gram multinomial scorer: per-language log
//! priors plus a table of per-n-gram log-likelihood rows. An optional
//! calibration block marks artifacts that can produce a probability
//! distribution; its presence is the capability check performed once at
//! load time.

use std::collections::HashMap;

use langsight_domain::{LangSightError, Result};
use serde::{Deserialize, Serialize};

/// Artifact format version this build understands
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Largest n-gram window the scorer accepts
pub const MAX_NGRAM_SIZE: usize = 8;

/// Deserialized model artifact
///
/// Immutable after load. All vectors are aligned with `labels`: entry `i`
/// of `class_priors` and of every `weights` row belongs to `labels[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,

    /// Character window width used during training
    pub ngram_size: usize,

    /// Language codes in scoring order (e.g. "IT", "EN")
    pub labels: Vec<String>,

    /// Natural-log class priors, aligned with `labels`
    pub class_priors: Vec<f64>,

    /// Per-n-gram log-likelihood rows, each aligned with `labels`
    pub weights: HashMap<String, Vec<f64>>,

    /// Log-likelihood applied to n-grams absent from `weights`
    pub oov_log_prob: f64,

    /// Present iff the artifact supports probability queries
    #[serde(default)]
    pub calibration: Option<Calibration>,
}

/// Probability calibration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calibration {
    /// Softmax temperature; higher values flatten the distribution
    pub temperature: f64,
}

impl ModelArtifact {
    /// Check the structural invariants of a freshly deserialized artifact
    ///
    /// Violations are `ModelLoad` errors: a malformed artifact must abort
    /// startup rather than produce garbage predictions later.
    pub fn validate(&self) -> Result<()> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(LangSightError::ModelLoad(format!(
                "unsupported model format version: {} (expected {})",
                self.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }

        if self.labels.is_empty() {
            return Err(LangSightError::ModelLoad(
                "model artifact declares no labels".to_string(),
            ));
        }

        if self.ngram_size == 0 || self.ngram_size > MAX_NGRAM_SIZE {
            return Err(LangSightError::ModelLoad(format!(
                "ngram_size {} outside supported range 1..={}",
                self.ngram_size, MAX_NGRAM_SIZE
            )));
        }

        if self.class_priors.len() != self.labels.len() {
            return Err(LangSightError::ModelLoad(format!(
                "class_priors has {} entries for {} labels",
                self.class_priors.len(),
                self.labels.len()
            )));
        }

        if !self.class_priors.iter().all(|p| p.is_finite()) {
            return Err(LangSightError::ModelLoad(
                "class_priors contains non-finite values".to_string(),
            ));
        }

        for (gram, row) in &self.weights {
            if row.len() != self.labels.len() {
                return Err(LangSightError::ModelLoad(format!(
                    "weight row for {:?} has {} entries for {} labels",
                    gram,
                    row.len(),
                    self.labels.len()
                )));
            }
            if !row.iter().all(|w| w.is_finite()) {
                return Err(LangSightError::ModelLoad(format!(
                    "weight row for {:?} contains non-finite values",
                    gram
                )));
            }
        }

        if !self.oov_log_prob.is_finite() {
            return Err(LangSightError::ModelLoad(
                "oov_log_prob is not finite".to_string(),
            ));
        }

        if let Some(calibration) = &self.calibration {
            if !calibration.temperature.is_finite() || calibration.temperature <= 0.0 {
                return Err(LangSightError::ModelLoad(format!(
                    "calibration temperature must be a positive finite number, got {}",
                    calibration.temperature
                )));
            }
        }

        Ok(())
    }
}
