//! Language model artifact loading and inference
//!
//! The trained classifier is consumed as an opaque artifact: a JSON file
//! holding character n-gram log-likelihoods per language. Loading happens
//! once at startup and the loaded model is immutable afterwards.

pub mod artifact;
pub mod ngram;

// Re-export commonly used items
pub use artifact::{Calibration, ModelArtifact};
pub use ngram::NgramLanguageModel;
