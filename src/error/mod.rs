//! Error handling for the household registry.

use std::io;
use thiserror::Error;

/// Specialized error type for registry operations
#[derive(Debug, Error)]
pub enum WiratanError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error reading or writing delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A household record failed validation before classification
    #[error("invalid household record: {0}")]
    InvalidRecord(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, WiratanError>;
