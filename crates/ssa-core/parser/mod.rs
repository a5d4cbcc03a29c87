//! SubStation script reader
//!
//! Reads `.ssa` and `.ass` text into an owned [`Document`]. The reader is a
//! line-driven state machine: a `[Section]` header selects the state, and
//! each following line goes to the parser for that section. Malformed input
//! never aborts a parse; every recovery is recorded as a [`ParseIssue`].
//!
//! # Example
//!
//! ```rust
//! use ssa_core::{parser, ScriptVersion};
//!
//! let script_text = r"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello, World!
//! ";
//!
//! let parsed = parser::parse(script_text);
//! assert_eq!(parsed.version, ScriptVersion::AssV4);
//! assert_eq!(parsed.value.info["Title"], "Example");
//! assert_eq!(parsed.value.events[0].text, "Hello, World!");
//! assert!(parsed.issues.is_empty());
//! ```

pub mod errors;
pub mod fields;
pub mod sections;

pub use errors::{
    IssueCategory, IssueReport, IssueSeverity, ParseError, ParseIssue, ParseResult, Parsed,
    WithIssues,
};

use crate::{ast::Document, ScriptVersion};
use sections::{AttachmentsParser, EventsParser, KeyValueParser, StylesParser};

/// Issue collector that logs every issue as it is recorded
#[derive(Debug, Default)]
pub struct IssueLog {
    issues: Vec<ParseIssue>,
}

impl IssueLog {
    /// Record an issue and emit it through `tracing`
    pub fn push(&mut self, issue: ParseIssue) {
        issue.log();
        self.issues.push(issue);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ParseIssue> {
        self.issues
    }
}

/// Sections the reader knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionType {
    ScriptInfo,
    AegisubProject,
    /// Style table; the name tells which schema version wrote it
    Styles(ScriptVersion),
    Events,
    Fonts,
    Graphics,
}

impl SectionType {
    /// Look up a section by its header name, case-insensitively
    #[must_use]
    pub fn from_header(name: &str) -> Option<Self> {
        const NAMES: [(&str, SectionType); 7] = [
            ("Script Info", SectionType::ScriptInfo),
            ("Aegisub Project Garbage", SectionType::AegisubProject),
            ("V4+ Styles", SectionType::Styles(ScriptVersion::AssV4)),
            ("V4 Styles", SectionType::Styles(ScriptVersion::SsaV4)),
            ("Events", SectionType::Events),
            ("Fonts", SectionType::Fonts),
            ("Graphics", SectionType::Graphics),
        ];
        let name = name.trim();
        NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, section)| section)
    }
}

/// Name inside a `[Section]` header line
#[must_use]
pub fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Reader states, one per section kind plus the two outside states
enum State {
    /// Before the first header
    Outside,
    ScriptInfo,
    AegisubProject,
    Styles(StylesParser),
    Events(EventsParser),
    Fonts(AttachmentsParser),
    Graphics(AttachmentsParser),
    /// Inside an unknown section, discarding lines
    Skip,
}

/// Line-driven reader building a [`Document`]
struct Reader {
    doc: Document,
    state: State,
    /// Version from `ScriptType`
    declared: Option<ScriptVersion>,
    /// Version implied by the styles section name
    implied: Option<ScriptVersion>,
    issues: IssueLog,
}

impl Reader {
    fn new() -> Self {
        Self {
            doc: Document::empty(),
            state: State::Outside,
            declared: None,
            implied: None,
            issues: IssueLog::default(),
        }
    }

    fn version(&self) -> ScriptVersion {
        self.declared.or(self.implied).unwrap_or_default()
    }

    fn enter(&mut self, name: &str, line_number: usize) {
        let Some(section) = SectionType::from_header(name) else {
            tracing::debug!(section = name, line = line_number, "skipping unknown section");
            self.issues.push(ParseIssue::info(
                IssueCategory::Structure,
                format!("Skipping unknown section [{name}]"),
                line_number,
            ));
            self.state = State::Skip;
            return;
        };

        tracing::debug!(?section, line = line_number, "entering section");
        self.state = match section {
            SectionType::ScriptInfo => State::ScriptInfo,
            SectionType::AegisubProject => State::AegisubProject,
            SectionType::Styles(version) => {
                if let Some(declared) = self.declared.filter(|declared| *declared != version) {
                    self.issues.push(ParseIssue::info(
                        IssueCategory::Structure,
                        format!("[{name}] in a {declared} script, reading styles as {declared}"),
                        line_number,
                    ));
                }
                self.implied = Some(version);
                State::Styles(StylesParser::new(self.version()))
            }
            SectionType::Events => State::Events(EventsParser::new(self.version())),
            SectionType::Fonts => State::Fonts(AttachmentsParser::new(AttachmentsParser::FONTS_KEY)),
            SectionType::Graphics => {
                State::Graphics(AttachmentsParser::new(AttachmentsParser::GRAPHICS_KEY))
            }
        };
    }

    fn line(&mut self, raw: &str, line_number: usize) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        // encoded attachment data may itself look like `[...]`
        let attachment = matches!(self.state, State::Fonts(_) | State::Graphics(_));
        if let Some(name) = section_header(line) {
            if !attachment || SectionType::from_header(name).is_some() {
                self.enter(name, line_number);
                return;
            }
        }

        if line.starts_with(';') && !attachment {
            return;
        }

        match &mut self.state {
            State::Outside => self.issues.push(ParseIssue::warning(
                IssueCategory::Structure,
                format!("Ignoring line outside of any section: {line}"),
                line_number,
            )),
            State::Skip => {}
            State::ScriptInfo => {
                if let Some(version) = KeyValueParser::script_info().parse_line(
                    line,
                    line_number,
                    &mut self.doc.info,
                    &mut self.issues,
                ) {
                    self.declared = Some(version);
                }
            }
            State::AegisubProject => {
                KeyValueParser::aegisub_project().parse_line(
                    line,
                    line_number,
                    &mut self.doc.aegisub_project,
                    &mut self.issues,
                );
            }
            State::Styles(parser) => {
                parser.parse_line(line, line_number, &mut self.doc, &mut self.issues);
            }
            State::Events(parser) => {
                parser.parse_line(line, line_number, &mut self.doc, &mut self.issues);
            }
            State::Fonts(parser) => {
                parser.parse_line(line, line_number, &mut self.doc.fonts, &mut self.issues);
            }
            State::Graphics(parser) => {
                parser.parse_line(line, line_number, &mut self.doc.graphics, &mut self.issues);
            }
        }
    }

    fn finish(self) -> Parsed<Document> {
        let version = self.version();
        Parsed {
            value: self.doc,
            version,
            issues: self.issues.into_vec(),
        }
    }
}

/// Parse SubStation text into a document
///
/// Never fails: unknown sections, malformed rows and invalid field values
/// are recovered from and reported in [`Parsed::issues`]. A leading byte
/// order mark is ignored.
#[must_use]
pub fn parse(text: &str) -> Parsed<Document> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = Reader::new();
    for (index, line) in text.lines().enumerate() {
        reader.line(line, index + 1);
    }
    let parsed = reader.finish();
    tracing::debug!(
        version = %parsed.version,
        styles = parsed.value.styles.len(),
        events = parsed.value.events.len(),
        issues = parsed.issues.len(),
        "parsed script"
    );
    parsed
}
