//! Error types for dialog-core
//!
//! This module defines the error type returned by every dialog operation and
//! the result alias used throughout the crate.

pub mod dialog_errors;

// Re-export main error types
pub use dialog_errors::{DialogError, DialogResult};
