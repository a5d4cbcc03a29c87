//! Core error type for ssa-core operations
//!
//! Provides the main `CoreError` enum for failures that abort a call.
//! Problems the codec can recover from are never reported here: they are
//! collected as [`ParseIssue`](crate::parser::ParseIssue)s next to a
//! best-effort result instead.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Fatal only for caller misuse and unrepresentable output
//! - Keep enough context in the message to locate the offending value

use thiserror::Error;

/// Main error type for ssa-core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Wrong combination of arguments to a time conversion
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Frame rate that cannot describe a video stream
    #[error("Framerate must be a positive number ({0})")]
    InvalidFrameRate(f64),

    /// Timestamp text or captured groups that cannot be converted
    #[error("Invalid time format '{time}': {reason}")]
    InvalidTime { time: String, reason: String },

    /// Field value that cannot be expressed in the text format
    #[error("Field '{field}' cannot be written: {reason}")]
    UnrepresentableField { field: String, reason: String },

    /// Input text does not look like any supported subtitle format
    #[error("Unrecognized subtitle format")]
    UnknownFormat,
}

impl CoreError {
    /// Create time error from invalid input
    pub fn invalid_time<T: std::fmt::Display>(time: T, reason: &str) -> Self {
        Self::InvalidTime {
            time: time.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create error for a field that would break the line grammar
    pub fn unrepresentable<T: std::fmt::Display>(field: T, reason: &str) -> Self {
        Self::UnrepresentableField {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if error was caused by how the API was called rather than by input data
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidArguments(_) | Self::InvalidFrameRate(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
