//! `[Fonts]` and `[Graphics]` sections
//!
//! Each attachment starts with a `fontname:` or `filename:` line followed by
//! its encoded data lines. Data is kept as written; decoding is left to
//! callers that need the files.

use crate::{
    parser::{IssueCategory, IssueLog, ParseIssue},
    utils::OrderedMap,
};

/// Parser collecting encoded attachment lines by file name
pub struct AttachmentsParser {
    /// `fontname` or `filename`
    header_key: &'static str,
    current: Option<String>,
}

impl AttachmentsParser {
    /// Header key introducing a file in `[Fonts]`
    pub const FONTS_KEY: &'static str = "fontname";
    /// Header key introducing a file in `[Graphics]`
    pub const GRAPHICS_KEY: &'static str = "filename";

    #[must_use]
    pub const fn new(header_key: &'static str) -> Self {
        Self {
            header_key,
            current: None,
        }
    }

    /// Parse one non-empty line of the section
    pub fn parse_line(
        &mut self,
        line: &str,
        line_number: usize,
        target: &mut OrderedMap<String, Vec<String>>,
        issues: &mut IssueLog,
    ) {
        if let Some(file_name) = self.file_header(line) {
            if target.contains_key(file_name) {
                issues.push(ParseIssue::warning(
                    IssueCategory::Structure,
                    format!("Attachment '{file_name}' appears twice, appending data"),
                    line_number,
                ));
            }
            target.entry(file_name.to_string()).or_default();
            self.current = Some(file_name.to_string());
            return;
        }

        match self.current.as_ref().and_then(|name| target.get_mut(name)) {
            Some(data) => data.push(line.to_string()),
            None => issues.push(ParseIssue::warning(
                IssueCategory::Structure,
                format!("Ignoring attachment data before any '{}:' line", self.header_key),
                line_number,
            )),
        }
    }

    fn file_header<'l>(&self, line: &'l str) -> Option<&'l str> {
        let (key, name) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(self.header_key)
            .then_some(name.trim())
            .filter(|name| !name.is_empty())
    }
}
