//! `Key: Value` sections: `[Script Info]` and `[Aegisub Project Garbage]`

use crate::{
    parser::{IssueCategory, IssueLog, ParseIssue},
    utils::OrderedMap,
    ScriptVersion,
};

/// Parser for metadata lines
///
/// The separator is the first colon; whitespace after it is optional, so
/// `Title:My Title` and `Title: My Title` are the same pair. Duplicate keys
/// keep their first position and take the last value.
#[derive(Debug, Clone, Copy)]
pub struct KeyValueParser {
    /// Recognize `ScriptType` and keep it out of `target`
    script_info: bool,
}

impl KeyValueParser {
    /// Parser for `[Script Info]`
    #[must_use]
    pub const fn script_info() -> Self {
        Self { script_info: true }
    }

    /// Parser for `[Aegisub Project Garbage]`
    #[must_use]
    pub const fn aegisub_project() -> Self {
        Self { script_info: false }
    }

    /// Parse one non-empty, non-comment line
    ///
    /// Returns the declared schema version when the line is `ScriptType`.
    pub fn parse_line(
        self,
        line: &str,
        line_number: usize,
        target: &mut OrderedMap<String, String>,
        issues: &mut IssueLog,
    ) -> Option<ScriptVersion> {
        let Some((key, value)) = split_key_value(line) else {
            issues.push(ParseIssue::warning(
                IssueCategory::Structure,
                format!("Ignoring line without ':' separator: {line}"),
                line_number,
            ));
            return None;
        };

        if self.script_info && key.eq_ignore_ascii_case("ScriptType") {
            let version = ScriptVersion::from_header(value);
            if version.is_none() {
                issues.push(ParseIssue::warning(
                    IssueCategory::Structure,
                    format!("Unknown ScriptType '{value}'"),
                    line_number,
                ));
            }
            return version;
        }

        target.insert(key.to_string(), value.to_string());
        None
    }
}

/// Split on the first colon, trimming the key and the value
#[must_use]
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}
