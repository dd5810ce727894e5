//! # LangSight Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The prediction pipeline (validation, inference, confidence)
//!
//! ## Architecture Principles
//! - Only depends on `langsight-domain`
//! - No file, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod identify;

// Re-export specific items to avoid ambiguity
pub use identify::ports::{LanguageModel, RequestLog};
pub use identify::PredictionService;
