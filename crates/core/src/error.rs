//! Error types for the relnotes domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Classification itself
//! never fails; these cover the I/O edges around it.

use std::path::PathBuf;

use thiserror::Error;

/// The top-level error type for relnotes operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Issue input ---
    #[error("Failed to load issues from {path}: {reason}")]
    Issues { path: PathBuf, reason: String },

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
