//! # LangSight Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Model artifact loading and n-gram inference
//! - The append-only request log sink
//! - Configuration loading (environment and files)
//!
//! ## Architecture
//! - Implements traits defined in `langsight-core`
//! - Depends on `langsight-domain` and `langsight-core`
//! - Contains all "impure" code (file I/O, parsing)

pub mod config;
pub mod model;
pub mod request_log;

// Re-export commonly used items
pub use model::*;
pub use request_log::*;
