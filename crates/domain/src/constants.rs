//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Request handling
pub const PREVIEW_MAX_CHARS: usize = 100;

// Confidence derivation
pub const DEFAULT_CONFIDENCE: f64 = 1.0;
pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 1.0;

// User-facing error messages
pub const EMPTY_INPUT_MESSAGE: &str = "input text is empty";
pub const INFERENCE_FAILURE_MESSAGE: &str = "language prediction failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
