//! SubStation script writer
//!
//! Serializes a [`Document`] as v4.00+ (`.ass`) or v4.00 (`.ssa`) text.
//! Timestamps are written with centisecond precision and clamped to the
//! range the format can express; the stored millisecond values are never
//! modified.
//!
//! # Example
//!
//! ```rust
//! use ssa_core::{ast::Event, writer::{serialize, WriteOptions}, Document};
//!
//! let mut doc = Document::default();
//! doc.push(Event { start: 1004, end: 2005, text: "Hi".to_string(), ..Event::default() });
//!
//! let out = serialize(&doc, &WriteOptions::default())?;
//! assert!(out.value.contains("Dialogue: 0,0:00:01.00,0:00:02.01,Default,,0,0,0,,Hi\n"));
//! # Ok::<(), ssa_core::CoreError>(())
//! ```

use crate::{
    ast::{color_to_ass_rgba, color_to_ssa_rgb, Color, Document, Event, Style},
    parser::{
        sections::{events::event_format, styles::style_format, AttachmentsParser},
        IssueCategory, IssueLog, ParseIssue, WithIssues,
    },
    time::{ms_to_components, Times},
    utils::{is_single_line, CoreError, OrderedMap, Result},
    ScriptVersion,
};

/// Largest time the `H:MM:SS.cc` form can hold: 9:59:59.99
pub const MAX_REPRESENTABLE_TIME: i64 = 10 * 3_600_000 - 10;

/// Header comment written when none is configured
pub const DEFAULT_HEADER_COMMENT: &str = "Script generated by ssa-core";

/// Serialization settings
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Schema to write: field lists, color encoding and alignment codes
    pub version: ScriptVersion,
    /// `; ` comment lines at the top of `[Script Info]`, one per text line
    pub header_comment: Option<String>,
}

impl WriteOptions {
    /// Options for a given schema with the default header comment
    #[must_use]
    pub fn for_version(version: ScriptVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            version: ScriptVersion::AssV4,
            header_comment: Some(DEFAULT_HEADER_COMMENT.to_string()),
        }
    }
}

/// Format milliseconds as `H:MM:SS.cc`
///
/// Negative values become zero and values above
/// [`MAX_REPRESENTABLE_TIME`] become that maximum. The result is rounded
/// half up to the nearest 10 ms, so 4 ms writes `.00` and 5 ms writes `.01`.
#[must_use]
pub fn ms_to_timestamp(ms: i64) -> String {
    let ms = ms.clamp(0, MAX_REPRESENTABLE_TIME);
    let rounded = (ms + 5) - (ms + 5) % 10;
    let Times { h, m, s, ms } = ms_to_components(rounded);
    format!("{h}:{m:02}:{s:02}.{:02}", ms / 10)
}

/// Serialize `doc` as SubStation text
///
/// Timestamps above [`MAX_REPRESENTABLE_TIME`] are clamped and reported as
/// warnings; negative timestamps are written as zero without an issue.
///
/// # Errors
///
/// Returns [`CoreError::UnrepresentableField`] when a value would break the
/// line grammar: line breaks in any field, a `:` in a metadata key, or a
/// comma in a style name, font name, or any event field except the text.
pub fn serialize(doc: &Document, options: &WriteOptions) -> Result<WithIssues<String>> {
    let mut writer = Writer::new(options.version);

    writer.script_info(doc, options.header_comment.as_deref())?;
    if !doc.aegisub_project.is_empty() {
        writer.key_values("Aegisub Project Garbage", &doc.aegisub_project)?;
    }
    writer.styles(&doc.styles)?;
    if !doc.fonts.is_empty() {
        writer.attachments("Fonts", AttachmentsParser::FONTS_KEY, &doc.fonts)?;
    }
    if !doc.graphics.is_empty() {
        writer.attachments("Graphics", AttachmentsParser::GRAPHICS_KEY, &doc.graphics)?;
    }
    writer.events(&doc.events)?;

    tracing::debug!(
        version = %options.version,
        lines = writer.line,
        issues = writer.issues.len(),
        "serialized script"
    );
    Ok(WithIssues {
        value: writer.out,
        issues: writer.issues.into_vec(),
    })
}

/// Output buffer that tracks the current line for issue reports
struct Writer {
    version: ScriptVersion,
    out: String,
    /// Number of lines written so far
    line: usize,
    issues: IssueLog,
}

impl Writer {
    fn new(version: ScriptVersion) -> Self {
        Self {
            version,
            out: String::new(),
            line: 0,
            issues: IssueLog::default(),
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
        self.line += 1;
    }

    fn blank(&mut self) {
        self.line("");
    }

    fn header(&mut self, name: &str) {
        self.line(&format!("[{name}]"));
    }

    fn script_info(&mut self, doc: &Document, comment: Option<&str>) -> Result<()> {
        self.header("Script Info");
        for comment_line in comment.iter().flat_map(|text| text.lines()) {
            self.line(&format!("; {comment_line}"));
        }
        for (key, value) in &doc.info {
            if key.eq_ignore_ascii_case("ScriptType") {
                continue;
            }
            self.key_value(key, value)?;
        }
        self.line(&format!("ScriptType: {}", self.version.header()));
        self.blank();
        Ok(())
    }

    fn key_values(&mut self, section: &str, pairs: &OrderedMap<String, String>) -> Result<()> {
        self.header(section);
        for (key, value) in pairs {
            self.key_value(key, value)?;
        }
        self.blank();
        Ok(())
    }

    fn key_value(&mut self, key: &str, value: &str) -> Result<()> {
        if key.trim().is_empty() || key.contains(':') || !is_single_line(key) {
            return Err(CoreError::unrepresentable(
                key,
                "metadata keys must be non-empty single-line text without ':'",
            ));
        }
        single_line(key, value)?;
        self.line(&format!("{key}: {value}"));
        Ok(())
    }

    fn styles(&mut self, styles: &OrderedMap<String, Style>) -> Result<()> {
        let format = style_format(self.version);
        self.header(self.version.styles_section());
        self.line(&format!("Format: {}", format.join(", ")));
        for (name, style) in styles {
            no_comma("Style name", name)?;
            no_comma("Fontname", &style.fontname)?;
            let fields: Vec<String> = format
                .iter()
                .map(|field| self.style_field(field, name, style))
                .collect();
            self.line(&format!("Style: {}", fields.join(",")));
        }
        self.blank();
        Ok(())
    }

    fn style_field(&self, field: &str, name: &str, style: &Style) -> String {
        match field {
            "Name" => name.to_string(),
            "Fontname" => style.fontname.clone(),
            "Fontsize" => real(style.fontsize),
            "PrimaryColour" => self.color(style.primary_color),
            "SecondaryColour" => self.color(style.secondary_color),
            "OutlineColour" | "TertiaryColour" => self.color(style.outline_color),
            "BackColour" => self.color(style.back_color),
            "Bold" => flag(style.bold),
            "Italic" => flag(style.italic),
            "Underline" => flag(style.underline),
            "StrikeOut" => flag(style.strikeout),
            "ScaleX" => real(style.scale_x),
            "ScaleY" => real(style.scale_y),
            "Spacing" => real(style.spacing),
            "Angle" => real(style.angle),
            "BorderStyle" => style.border_style.to_string(),
            "Outline" => real(style.outline),
            "Shadow" => real(style.shadow),
            "Alignment" => style.alignment.to_code(self.version).to_string(),
            "MarginL" => style.margin_l.to_string(),
            "MarginR" => style.margin_r.to_string(),
            "MarginV" => style.margin_v.to_string(),
            "AlphaLevel" => style.alpha_level.to_string(),
            "Encoding" => style.encoding.to_string(),
            _ => String::new(),
        }
    }

    fn color(&self, color: Color) -> String {
        if self.version.is_legacy() {
            color_to_ssa_rgb(color).to_string()
        } else {
            color_to_ass_rgba(color)
        }
    }

    fn attachments(
        &mut self,
        section: &str,
        key: &str,
        files: &OrderedMap<String, Vec<String>>,
    ) -> Result<()> {
        self.header(section);
        for (file_name, data) in files {
            single_line(key, file_name)?;
            self.line(&format!("{key}: {file_name}"));
            for data_line in data {
                single_line(file_name, data_line)?;
                self.line(data_line);
            }
        }
        self.blank();
        Ok(())
    }

    fn events(&mut self, events: &[Event]) -> Result<()> {
        let format = event_format(self.version);
        self.header("Events");
        self.line(&format!("Format: {}", format.join(", ")));
        for event in events {
            no_comma("Event style", &event.style)?;
            no_comma("Event name", &event.name)?;
            no_comma("Event effect", &event.effect)?;
            single_line("Event text", &event.text)?;

            let fields: Vec<String> = format
                .iter()
                .map(|field| self.event_field(field, event))
                .collect();
            self.line(&format!("{}: {}", event.event_type, fields.join(",")));
        }
        Ok(())
    }

    fn event_field(&mut self, field: &str, event: &Event) -> String {
        match field {
            "Layer" => event.layer.to_string(),
            "Marked" => format!("Marked={}", u8::from(event.marked)),
            "Start" => self.timestamp(event.start),
            "End" => self.timestamp(event.end),
            "Style" => event.style.clone(),
            "Name" => event.name.clone(),
            "MarginL" => event.margin_l.to_string(),
            "MarginR" => event.margin_r.to_string(),
            "MarginV" => event.margin_v.to_string(),
            "Effect" => event.effect.clone(),
            "Text" => event.text.clone(),
            _ => String::new(),
        }
    }

    /// Timestamp for the line being built, warning when it overflows
    fn timestamp(&mut self, ms: i64) -> String {
        if ms > MAX_REPRESENTABLE_TIME {
            self.issues.push(ParseIssue::warning(
                IssueCategory::Timing,
                format!(
                    "Overflow in SubStation timestamp, clamping {ms} ms to {MAX_REPRESENTABLE_TIME} ms"
                ),
                self.line + 1,
            ));
        }
        ms_to_timestamp(ms)
    }
}

/// Whole numbers keep one decimal (`20.0`), others use the shortest exact form
fn real(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// `-1` for true, `0` for false
fn flag(value: bool) -> String {
    let text = if value { "-1" } else { "0" };
    text.to_string()
}

fn single_line(field: &str, value: &str) -> Result<()> {
    if is_single_line(value) {
        Ok(())
    } else {
        Err(CoreError::unrepresentable(field, "contains a line break"))
    }
}

fn no_comma(field: &str, value: &str) -> Result<()> {
    single_line(field, value)?;
    if value.contains(',') {
        return Err(CoreError::unrepresentable(field, "contains a comma"));
    }
    Ok(())
}
