//! MPL2 reader
//!
//! One subtitle per line: `[start][end] text`, times in deciseconds. A `|`
//! separates lines of text and a leading `/` marks a line as italic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    ast::{Document, Event},
    parser::{IssueCategory, IssueLog, ParseIssue, Parsed},
    ScriptVersion,
};

/// `[start][end] text`, times may be negative
pub static MPL2_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(-?\d+)\]\[(-?\d+)\](.*)$").expect("static pattern"));

const MS_PER_DECISECOND: i64 = 100;

/// Parse MPL2 text
///
/// Lines that are not in `[start][end] text` form are skipped and noted
/// as info issues.
#[must_use]
pub fn parse(text: &str) -> Parsed<Document> {
    let mut doc = Document::default();
    let mut issues = IssueLog::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(event) => doc.events.push(event),
            None => issues.push(ParseIssue::info(
                IssueCategory::Format,
                format!("Ignoring line not in [start][end] form: {line}"),
                index + 1,
            )),
        }
    }

    Parsed {
        value: doc,
        version: ScriptVersion::AssV4,
        issues: issues.into_vec(),
    }
}

fn parse_line(line: &str) -> Option<Event> {
    let captures = MPL2_LINE.captures(line)?;
    let start = captures[1].parse::<i64>().ok()?.checked_mul(MS_PER_DECISECOND)?;
    let end = captures[2].parse::<i64>().ok()?.checked_mul(MS_PER_DECISECOND)?;

    Some(Event {
        start,
        end,
        text: convert_text(&captures[3]),
        ..Event::default()
    })
}

/// Translate `|` line breaks and `/` italics into override tags
fn convert_text(text: &str) -> String {
    text.split('|')
        .map(|part| {
            let part = part.trim();
            part.strip_prefix('/').map_or_else(
                || part.to_string(),
                |italic| format!(r"{{\i1}}{}{{\i0}}", italic.trim()),
            )
        })
        .collect::<Vec<_>>()
        .join(r"\N")
}
