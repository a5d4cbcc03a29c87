//! Result types carrying a value together with collected issues
//!
//! Reading and writing never fail on malformed or out-of-range content;
//! they return a best-effort value alongside the issues they recovered from.

use super::{
    parse_error::ParseError,
    parse_issue::{IssueSeverity, ParseIssue},
};
use crate::ScriptVersion;

/// Result type for single field coercions
pub type ParseResult<T> = Result<T, ParseError>;

/// Common queries over a collected issue list
pub trait IssueReport {
    /// Issues in the order they were found
    fn issues(&self) -> &[ParseIssue];

    /// Number of issues with the given severity
    fn count_by_severity(&self, severity: IssueSeverity) -> usize {
        self.issues()
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    /// Check for any issue at warning level or above
    fn has_warnings(&self) -> bool {
        self.issues()
            .iter()
            .any(|issue| issue.severity >= IssueSeverity::Warning)
    }
}

/// Value produced alongside recoverable issues
#[derive(Debug, Clone, PartialEq)]
pub struct WithIssues<T> {
    /// Best-effort result
    pub value: T,

    /// Issues in the order they were found
    pub issues: Vec<ParseIssue>,
}

impl<T> WithIssues<T> {
    /// Wrap a value with no issues
    pub const fn ok(value: T) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    /// Discard the issues
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> IssueReport for WithIssues<T> {
    fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }
}

/// Parsed document with the schema version it was written in
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// Best-effort result
    pub value: T,

    /// Version declared by `ScriptType`, or inferred from the styles section name
    pub version: ScriptVersion,

    /// Issues in the order they were found
    pub issues: Vec<ParseIssue>,
}

impl<T> Parsed<T> {
    /// Discard version and issues
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> IssueReport for Parsed<T> {
    fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }
}
