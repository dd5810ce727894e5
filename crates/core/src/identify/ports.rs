//! Port interfaces for language identification

use std::collections::HashMap;

use async_trait::async_trait;
use langsight_domain::{RequestLogEntry, Result};

/// Trait for a loaded language identification model
///
/// Implementations wrap a trained artifact that was loaded once at startup
/// and is immutable afterwards, so calls may run concurrently without
/// synchronization.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Predict the language code for a text
    ///
    /// Returns `LangSightError::Inference` on any internal model failure.
    async fn predict_label(&self, text: &str) -> Result<String>;

    /// Per-language probability distribution for a text
    ///
    /// Optional capability. Only meaningful when [`supports_distribution`]
    /// returns true; returns an error otherwise.
    ///
    /// [`supports_distribution`]: LanguageModel::supports_distribution
    async fn predict_distribution(&self, text: &str) -> Result<HashMap<String, f64>>;

    /// Whether the artifact exposes a probability distribution
    ///
    /// Detected once at load time and cached, never re-inspected per request.
    fn supports_distribution(&self) -> bool;

    /// Whether the model is usable for inference
    ///
    /// Must not run inference. Used by the health endpoint.
    fn is_loaded(&self) -> bool;
}

/// Trait for recording handled identification requests
#[async_trait]
pub trait RequestLog: Send + Sync {
    /// Append one entry to the request log
    ///
    /// Callers treat a failure here as non-fatal: a request must never fail
    /// because its log entry could not be written.
    async fn record(&self, entry: RequestLogEntry) -> Result<()>;
}
