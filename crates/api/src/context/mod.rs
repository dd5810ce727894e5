//! Application context - dependency injection container

use std::sync::Arc;

use langsight_core::{LanguageModel, PredictionService, RequestLog};
use langsight_domain::{Config, HealthStatus, Result};
use langsight_infra::model::NgramLanguageModel;
use langsight_infra::request_log::FileRequestLog;

/// Application context - holds all services and dependencies
///
/// Built once at startup, then shared read-only across request handlers.
/// The model handle is immutable after load, so concurrent requests need
/// no synchronization beyond the log sink's own serialization.
pub struct AppContext {
    pub config: Config,
    pub model: Arc<dyn LanguageModel>,
    pub predictor: Arc<PredictionService>,
    pub request_log: Arc<dyn RequestLog>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").field("config", &self.config).finish_non_exhaustive()
    }
}

impl AppContext {
    /// Create a new application context with default configuration
    pub fn new() -> Result<Self> {
        Self::new_with_config(Config::default())
    }

    /// Create a new application context with custom configuration
    ///
    /// Loads the model artifact and opens the request log sink. Both are
    /// fatal on failure: the process must not accept requests without a
    /// usable model or a writable request log.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let model: Arc<dyn LanguageModel> =
            Arc::new(NgramLanguageModel::load(&config.model.path)?);
        let request_log: Arc<dyn RequestLog> =
            Arc::new(FileRequestLog::open(&config.request_log.path)?);

        Ok(Self::with_components(config, model, request_log))
    }

    /// Assemble a context from pre-built components
    ///
    /// Primarily for tests, which substitute stub models and recording
    /// log sinks for the file-backed implementations.
    pub fn with_components(
        config: Config,
        model: Arc<dyn LanguageModel>,
        request_log: Arc<dyn RequestLog>,
    ) -> Self {
        let predictor = Arc::new(PredictionService::new(Arc::clone(&model)));

        Self { config, model, predictor, request_log }
    }

    /// Current service health
    ///
    /// Pure function of whether the model handle is usable; never runs
    /// inference, so it is cheap enough to poll frequently.
    pub fn health_status(&self) -> HealthStatus {
        if self.model.is_loaded() {
            HealthStatus::Ok
        } else {
            HealthStatus::ModelNotLoaded
        }
    }
}
