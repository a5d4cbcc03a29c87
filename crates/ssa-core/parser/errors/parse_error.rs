//! Field-level parse error type
//!
//! Contains the `ParseError` enum returned by the typed field parsers
//! (timestamps, colors, numbers, alignment codes). The section parsers never
//! let these escape a document parse: each one is downgraded to a
//! [`ParseIssue`](super::ParseIssue) and the field falls back to its default.
//! Callers using the field parsers directly see them as ordinary errors.

use thiserror::Error;

/// Error produced by a single field coercion: an invalid time, color,
/// numeric or alignment value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Timestamp that matches none of the accepted clock patterns
    #[error("Invalid time format '{time}': {reason}")]
    InvalidTimeFormat { time: String, reason: String },

    /// Color literal that is neither `&H` hex nor a decimal integer
    #[error("Invalid color format '{color}': {reason}")]
    InvalidColorFormat { color: String, reason: String },

    /// Integer, float or boolean field that does not parse
    #[error("Invalid numeric value '{value}': {reason}")]
    InvalidNumericValue { value: String, reason: String },

    /// Alignment code unknown to both style schema versions
    #[error("Invalid alignment code {value}")]
    InvalidAlignment { value: i64 },
}

impl ParseError {
    /// Create numeric error for `value`
    pub fn numeric<T: std::fmt::Display>(value: T, reason: &str) -> Self {
        Self::InvalidNumericValue {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create color error for `color`
    pub fn color<T: std::fmt::Display>(color: T, reason: &str) -> Self {
        Self::InvalidColorFormat {
            color: color.to_string(),
            reason: reason.to_string(),
        }
    }
}
