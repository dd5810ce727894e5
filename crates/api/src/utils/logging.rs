//! Tracing setup and logging helpers

use std::time::Duration;

use langsight_domain::LangSightError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the process-wide tracing subscriber
///
/// Defaults to `info` and honors `RUST_LOG` overrides. Call once at
/// startup, before anything logs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Log the outcome of a handled HTTP request with structured fields.
///
/// # Parameters
/// * `route` - Logical route identifier (e.g. `"identify-language"`).
/// * `elapsed` - Duration the request handling took.
/// * `success` - Whether the request produced a prediction.
///
/// Callers must not forward request text here; the privacy-truncated
/// preview belongs to the request log sink only.
#[inline]
pub fn log_request_execution(route: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(route, duration_ms, "request_success");
    } else {
        warn!(route, duration_ms, "request_failure");
    }
}

/// Convert a `LangSightError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &LangSightError) -> &'static str {
    match error {
        LangSightError::Config(_) => "config",
        LangSightError::ModelLoad(_) => "model_load",
        LangSightError::InvalidInput(_) => "invalid_input",
        LangSightError::Inference(_) => "inference",
        LangSightError::Internal(_) => "internal",
    }
}
