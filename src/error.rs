//! # Error Types
//!
//! This module defines error types used throughout the blossom library.

use thiserror::Error;

/// Main error type for blossom operations
#[derive(Debug, Error)]
pub enum BlossomError {
    /// Requested image size is zero, negative, or too large to allocate
    #[error("Invalid size: {size} (size must be greater than 0 and fit an RGBA buffer)")]
    InvalidSize { size: i64 },

    /// Seed input could not be turned into an integer seed
    #[error("Invalid seed '{input}': {reason}")]
    InvalidSeed { input: String, reason: String },

    /// Image encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Malformed configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
