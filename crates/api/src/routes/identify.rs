//! Language identification endpoint

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use langsight_domain::constants::{
    INFERENCE_FAILURE_MESSAGE, INTERNAL_ERROR_MESSAGE, PREVIEW_MAX_CHARS,
};
use langsight_domain::{FailureKind, LangSightError, RequestLogEntry};
use serde::Deserialize;
use tracing::error;

use super::ErrorBody;
use crate::context::AppContext;
use crate::utils::logging::{error_label, log_request_execution};

/// Request body for `POST /identify-language`
#[derive(Debug, Deserialize)]
pub struct IdentifyRequest {
    pub text: String,
}

/// Identify the language of a text
///
/// Success returns the predicted language code and a confidence score.
/// Validation and inference failures map to 400, anything unclassified
/// to 500. Every handled request - success or failure - is recorded in
/// the request log before the response is returned.
pub async fn identify_language(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<IdentifyRequest>,
) -> Response {
    let start = Instant::now();

    // Computed once, reused for success and failure logging. Empty input
    // still gets a (empty) preview.
    let preview = text_preview(&request.text);

    let result = context.predictor.predict(&request.text).await;

    let entry = match &result {
        Ok(prediction) => RequestLogEntry::success(preview, prediction),
        Err(err) => RequestLogEntry::failure(preview, err.message()),
    };
    if let Err(err) = context.request_log.record(entry).await {
        // Logging failures must not fail the request.
        error!(error = %err, "failed to record request log entry");
    }

    log_request_execution("identify-language", start.elapsed(), result.is_ok());

    match result {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(err) => failure_response(&err).into_response(),
    }
}

/// First 100 characters of the raw input, trimmed
///
/// Character-based so multi-byte input is never split mid-glyph.
fn text_preview(text: &str) -> String {
    text.chars().take(PREVIEW_MAX_CHARS).collect::<String>().trim().to_string()
}

/// Map a failed identification to its transport-level outcome
///
/// Validation reasons are echoed to the caller; inference and internal
/// failures get generic messages so model internals never leak into
/// response bodies.
fn failure_response(err: &LangSightError) -> (StatusCode, Json<ErrorBody>) {
    let (status, message) = match err.kind() {
        FailureKind::Validation => (StatusCode::BAD_REQUEST, err.message().to_string()),
        FailureKind::Inference => {
            (StatusCode::BAD_REQUEST, INFERENCE_FAILURE_MESSAGE.to_string())
        }
        FailureKind::Internal => {
            error!(
                error = %err,
                kind = error_label(err),
                "unclassified failure while handling request"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
        }
    };

    (status, Json(ErrorBody { error: message }))
}
