/*!
 * Error types for the subtidy application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The arrangement pipeline itself never fails on data shape; malformed blocks
 * are dropped during parsing. These types cover the resource-level failures
 * around it.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Input file is not in a supported subtitle format
    #[error("Unsupported subtitle format: {path}")]
    UnsupportedFormat {
        /// Path of the offending file
        path: String,
    },

    /// A timestamp range line could not be interpreted
    #[error("Invalid timestamp range: {line}")]
    InvalidTimestamp {
        /// The offending line
        line: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
