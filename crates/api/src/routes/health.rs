//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use langsight_domain::HealthStatus;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;

/// Response body for `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

/// Report whether the model handle is usable
///
/// Always answers 200; the body distinguishes a usable model from an
/// unusable one. Performs no inference call.
pub async fn health(State(context): State<Arc<AppContext>>) -> Json<HealthResponse> {
    Json(HealthResponse { status: context.health_status() })
}
