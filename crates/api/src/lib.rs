//! # LangSight API
//!
//! HTTP application layer - routes and process entry point.
//!
//! This crate contains:
//! - axum routes (the external HTTP surface)
//! - Application context (dependency injection)
//! - Tracing setup and logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain outcomes to transport-level responses

pub mod context;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use routes::router;
