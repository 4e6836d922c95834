//! Touchmap Common Utilities
//!
//! Shared infrastructure for all touchmap crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading and default thresholds

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
