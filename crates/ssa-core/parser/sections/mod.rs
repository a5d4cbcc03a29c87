//! Section-specific line parsers
//!
//! The top-level reader owns the section state machine and hands each line
//! to the parser of the section it belongs to. Each parser is responsible
//! for:
//! - Its `Format:` line and the field mapping derived from it
//! - Coercing row fields to typed values, falling back to defaults
//! - Reporting every recovery as a [`ParseIssue`](crate::parser::ParseIssue)

pub mod attachments;
pub mod events;
pub mod key_value;
pub mod styles;

pub use attachments::AttachmentsParser;
pub use events::EventsParser;
pub use key_value::KeyValueParser;
pub use styles::StylesParser;

use crate::{
    parser::{IssueCategory, IssueLog, ParseError, ParseIssue},
    utils::normalize_field_value,
};

/// Split a `Format:` line body into trimmed field names
#[must_use]
pub fn parse_format_line(data: &str) -> Vec<String> {
    data.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Split a data row into at most `arity` fields
///
/// Every field is trimmed except the last declared one, which takes the rest
/// of the row verbatim: further commas and leading spaces of event text
/// survive. A short row has no such field and is trimmed throughout.
#[must_use]
pub fn split_row(data: &str, arity: usize) -> Vec<&str> {
    let arity = arity.max(1);
    let mut fields: Vec<&str> = data.trim_start().splitn(arity, ',').collect();
    let trimmed = if fields.len() == arity { arity - 1 } else { fields.len() };
    for field in &mut fields[..trimmed] {
        *field = normalize_field_value(*field);
    }
    fields
}

/// Report a row with fewer fields than its `Format:` line declares
pub(crate) fn report_short_row(
    kind: &str,
    found: usize,
    expected: usize,
    line: usize,
    issues: &mut IssueLog,
) {
    issues.push(
        ParseIssue::warning(
            IssueCategory::Format,
            format!("{kind} row has {found} fields, expected {expected}"),
            line,
        )
        .with_suggestion("Missing trailing fields use their default values".to_string()),
    );
}

/// Report a field that failed to coerce and kept its default
pub(crate) fn report_field_error(
    kind: IssueCategory,
    field: &str,
    error: &ParseError,
    line: usize,
    issues: &mut IssueLog,
) {
    let category = match error {
        ParseError::InvalidColorFormat { .. } => IssueCategory::Color,
        ParseError::InvalidTimeFormat { .. } => IssueCategory::Timing,
        _ => kind,
    };
    issues.push(ParseIssue::warning(
        category,
        format!("{field}: {error}, using default"),
        line,
    ));
}
