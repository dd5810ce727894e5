//! Shared fixtures for the HTTP endpoint tests
//!
//! Provides a configurable stub model, a request log that records entries
//! in memory, and helpers for driving the router with `tower::oneshot`.

// Each test binary compiles its own copy and uses a different subset.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use langsight_app::{router, AppContext};
use langsight_core::{LanguageModel, RequestLog};
use langsight_domain::{Config, LangSightError, RequestLogEntry, Result as DomainResult};
use tower::ServiceExt;

/// Stub language model with configurable label, distribution, and failures
pub struct StubModel {
    label: String,
    distribution: Option<HashMap<String, f64>>,
    fail_label: bool,
    loaded: bool,
}

impl StubModel {
    /// Model that predicts `label` without a probability distribution
    pub fn label_only(label: &str) -> Self {
        Self { label: label.to_string(), distribution: None, fail_label: false, loaded: true }
    }

    /// Calibrated model that predicts `label` with the given distribution
    pub fn with_distribution(label: &str, distribution: HashMap<String, f64>) -> Self {
        Self {
            label: label.to_string(),
            distribution: Some(distribution),
            fail_label: false,
            loaded: true,
        }
    }

    /// Model whose inference call always fails internally
    pub fn failing() -> Self {
        Self { label: String::new(), distribution: None, fail_label: true, loaded: true }
    }

    /// Model that reports itself as unusable
    pub fn unloaded() -> Self {
        Self { label: String::new(), distribution: None, fail_label: false, loaded: false }
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn predict_label(&self, _text: &str) -> DomainResult<String> {
        if self.fail_label {
            return Err(LangSightError::Inference(
                "segfault in native scorer at 0xdeadbeef".to_string(),
            ));
        }
        Ok(self.label.clone())
    }

    async fn predict_distribution(&self, _text: &str) -> DomainResult<HashMap<String, f64>> {
        self.distribution.clone().ok_or_else(|| {
            LangSightError::Inference("model does not expose a distribution".to_string())
        })
    }

    fn supports_distribution(&self) -> bool {
        self.distribution.is_some()
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Request log that records entries in memory instead of a file
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<RequestLogEntry>>,
}

impl RecordingLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<RequestLogEntry> {
        self.entries.lock().expect("log mutex poisoned").clone()
    }
}

#[async_trait]
impl RequestLog for RecordingLog {
    async fn record(&self, entry: RequestLogEntry) -> DomainResult<()> {
        self.entries.lock().expect("log mutex poisoned").push(entry);
        Ok(())
    }
}

/// Request log whose writes always fail, for best-effort logging tests
pub struct FailingLog;

#[async_trait]
impl RequestLog for FailingLog {
    async fn record(&self, _entry: RequestLogEntry) -> DomainResult<()> {
        Err(LangSightError::Internal("sink unavailable".to_string()))
    }
}

/// Router wired to the given stubs with the default configuration
pub fn test_router(model: StubModel, log: Arc<dyn RequestLog>) -> Router {
    let context = AppContext::with_components(Config::default(), Arc::new(model), log);
    router(Arc::new(context))
}

/// POST a JSON body to `/identify-language` and return the raw response
pub async fn post_identify(app: Router, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/identify-language")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    app.oneshot(request).await.expect("router call failed")
}

/// GET `/health` and return the raw response
pub async fn get_health(app: Router) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("failed to build request");

    app.oneshot(request).await.expect("router call failed")
}

/// Deserialize a response body as JSON, asserting the expected status
pub async fn json_body(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}
