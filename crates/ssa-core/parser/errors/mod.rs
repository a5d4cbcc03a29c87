//! Parser error types
//!
//! # Error Philosophy
//!
//! - Prefer recovery over failure: malformed content becomes an issue
//! - Keep the line number on every issue tied to input
//! - Field parsers report precise errors; section parsers downgrade them
//!
//! # Module Organization
//!
//! - `parse_error` - Field coercion errors
//! - `parse_issue` - Recoverable issues and warnings
//! - `parse_result` - Values paired with their issues

pub mod parse_error;
pub mod parse_issue;
pub mod parse_result;

pub use parse_error::ParseError;
pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};
pub use parse_result::{IssueReport, ParseResult, Parsed, WithIssues};
