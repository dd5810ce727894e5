//! HTTP routes - the external surface of the service

mod health;
mod identify;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

pub use health::*;
pub use identify::*;

use crate::context::AppContext;

/// Uniform JSON body for every failure response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build the service router with all routes attached
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/identify-language", post(identify_language))
        .route("/health", get(health))
        .with_state(context)
}
