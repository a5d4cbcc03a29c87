//! Styles section parser for `[V4 Styles]` and `[V4+ Styles]`
//!
//! Field names in the `Format:` line are matched case-insensitively and their
//! order is authoritative. Rows before any `Format:` line use the built-in
//! field list of the active schema version.

use crate::{
    ast::{Document, Style},
    parser::{
        fields::{parse_alignment, parse_bool, parse_color, parse_float, parse_int},
        sections::{parse_format_line, report_field_error, report_short_row, split_row},
        IssueCategory, IssueLog, ParseIssue, ParseResult,
    },
    utils::normalize_field_value,
    ScriptVersion,
};

/// v4.00+ style fields, in the order written
pub const ASS_STYLE_FORMAT: [&str; 23] = [
    "Name",
    "Fontname",
    "Fontsize",
    "PrimaryColour",
    "SecondaryColour",
    "OutlineColour",
    "BackColour",
    "Bold",
    "Italic",
    "Underline",
    "StrikeOut",
    "ScaleX",
    "ScaleY",
    "Spacing",
    "Angle",
    "BorderStyle",
    "Outline",
    "Shadow",
    "Alignment",
    "MarginL",
    "MarginR",
    "MarginV",
    "Encoding",
];

/// v4.00 style fields, in the order written
pub const SSA_STYLE_FORMAT: [&str; 18] = [
    "Name",
    "Fontname",
    "Fontsize",
    "PrimaryColour",
    "SecondaryColour",
    "TertiaryColour",
    "BackColour",
    "Bold",
    "Italic",
    "BorderStyle",
    "Outline",
    "Shadow",
    "Alignment",
    "MarginL",
    "MarginR",
    "MarginV",
    "AlphaLevel",
    "Encoding",
];

/// Built-in field list for `version`
#[must_use]
pub fn style_format(version: ScriptVersion) -> &'static [&'static str] {
    if version.is_legacy() {
        &SSA_STYLE_FORMAT
    } else {
        &ASS_STYLE_FORMAT
    }
}

/// Known style columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleField {
    Name,
    Fontname,
    Fontsize,
    PrimaryColour,
    SecondaryColour,
    OutlineColour,
    BackColour,
    Bold,
    Italic,
    Underline,
    StrikeOut,
    ScaleX,
    ScaleY,
    Spacing,
    Angle,
    BorderStyle,
    Outline,
    Shadow,
    Alignment,
    MarginL,
    MarginR,
    MarginV,
    AlphaLevel,
    Encoding,
    /// Column this codec does not know; its values are ignored
    Unknown,
}

impl StyleField {
    fn from_name(name: &str) -> Self {
        const NAMES: [(&str, StyleField); 25] = [
            ("Name", StyleField::Name),
            ("Fontname", StyleField::Fontname),
            ("Fontsize", StyleField::Fontsize),
            ("PrimaryColour", StyleField::PrimaryColour),
            ("SecondaryColour", StyleField::SecondaryColour),
            ("OutlineColour", StyleField::OutlineColour),
            ("TertiaryColour", StyleField::OutlineColour),
            ("BackColour", StyleField::BackColour),
            ("Bold", StyleField::Bold),
            ("Italic", StyleField::Italic),
            ("Underline", StyleField::Underline),
            ("StrikeOut", StyleField::StrikeOut),
            ("ScaleX", StyleField::ScaleX),
            ("ScaleY", StyleField::ScaleY),
            ("Spacing", StyleField::Spacing),
            ("Angle", StyleField::Angle),
            ("BorderStyle", StyleField::BorderStyle),
            ("Outline", StyleField::Outline),
            ("Shadow", StyleField::Shadow),
            ("Alignment", StyleField::Alignment),
            ("MarginL", StyleField::MarginL),
            ("MarginR", StyleField::MarginR),
            ("MarginV", StyleField::MarginV),
            ("AlphaLevel", StyleField::AlphaLevel),
            ("Encoding", StyleField::Encoding),
        ];
        NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map_or(Self::Unknown, |&(_, field)| field)
    }
}

/// Parser for style table rows
pub struct StylesParser {
    version: ScriptVersion,
    format: Option<Vec<(String, StyleField)>>,
}

impl StylesParser {
    /// Create parser interpreting alignment codes in the scheme of `version`
    #[must_use]
    pub const fn new(version: ScriptVersion) -> Self {
        Self {
            version,
            format: None,
        }
    }

    /// Parse one non-empty, non-comment line of the section
    pub fn parse_line(
        &mut self,
        line: &str,
        line_number: usize,
        doc: &mut Document,
        issues: &mut IssueLog,
    ) {
        let Some((keyword, data)) = line.split_once(':') else {
            issues.push(ParseIssue::warning(
                IssueCategory::Style,
                format!("Ignoring line without keyword: {line}"),
                line_number,
            ));
            return;
        };

        match keyword.trim() {
            k if k.eq_ignore_ascii_case("Format") => {
                self.set_format(&parse_format_line(data), line_number, issues);
            }
            k if k.eq_ignore_ascii_case("Style") => {
                if let Some((name, style)) = self.parse_style(data, line_number, issues) {
                    if doc.styles.insert(name.clone(), style).is_some() {
                        issues.push(ParseIssue::warning(
                            IssueCategory::Style,
                            format!("Style '{name}' redefined, keeping the last definition"),
                            line_number,
                        ));
                    }
                }
            }
            other => issues.push(ParseIssue::warning(
                IssueCategory::Style,
                format!("Ignoring unknown style line type '{other}'"),
                line_number,
            )),
        }
    }

    fn set_format(&mut self, names: &[String], line_number: usize, issues: &mut IssueLog) {
        let format: Vec<_> = names
            .iter()
            .map(|name| (name.clone(), StyleField::from_name(name)))
            .collect();

        for (name, _) in format
            .iter()
            .filter(|(_, field)| *field == StyleField::Unknown)
        {
            issues.push(ParseIssue::info(
                IssueCategory::Format,
                format!("Ignoring unknown style field '{name}'"),
                line_number,
            ));
        }
        self.format = Some(format);
    }

    fn parse_style(
        &mut self,
        data: &str,
        line_number: usize,
        issues: &mut IssueLog,
    ) -> Option<(String, Style)> {
        if self.format.is_none() {
            issues.push(ParseIssue::info(
                IssueCategory::Format,
                format!("No Format line for styles, assuming {} fields", self.version),
                line_number,
            ));
            let names: Vec<String> = style_format(self.version)
                .iter()
                .map(ToString::to_string)
                .collect();
            self.set_format(&names, line_number, issues);
        }
        let format = self.format.as_deref()?;

        let values = split_row(data, format.len());
        if values.len() < format.len() {
            report_short_row("Style", values.len(), format.len(), line_number, issues);
        }

        let mut name = None;
        let mut style = Style::default();
        for ((column, field), value) in format.iter().zip(values) {
            let value = normalize_field_value(value);
            if *field == StyleField::Name {
                name = Some(value.to_string());
                continue;
            }
            if let Err(err) = self.apply(*field, value, &mut style, line_number, issues) {
                report_field_error(IssueCategory::Style, column, &err, line_number, issues);
            }
        }

        if name.is_none() {
            issues.push(ParseIssue::error(
                IssueCategory::Style,
                "Dropping style row without a Name field".to_string(),
                line_number,
            ));
        }
        name.map(|name| (name, style))
    }

    fn apply(
        &self,
        field: StyleField,
        value: &str,
        style: &mut Style,
        line_number: usize,
        issues: &mut IssueLog,
    ) -> ParseResult<()> {
        match field {
            StyleField::Name | StyleField::Unknown => {}
            StyleField::Fontname => style.fontname = value.to_string(),
            StyleField::Fontsize => style.fontsize = parse_float(value)?,
            StyleField::PrimaryColour => style.primary_color = parse_color(value)?,
            StyleField::SecondaryColour => style.secondary_color = parse_color(value)?,
            StyleField::OutlineColour => style.outline_color = parse_color(value)?,
            StyleField::BackColour => style.back_color = parse_color(value)?,
            StyleField::Bold => style.bold = parse_bool(value)?,
            StyleField::Italic => style.italic = parse_bool(value)?,
            StyleField::Underline => style.underline = parse_bool(value)?,
            StyleField::StrikeOut => style.strikeout = parse_bool(value)?,
            StyleField::ScaleX => style.scale_x = parse_float(value)?,
            StyleField::ScaleY => style.scale_y = parse_float(value)?,
            StyleField::Spacing => style.spacing = parse_float(value)?,
            StyleField::Angle => style.angle = parse_float(value)?,
            StyleField::BorderStyle => style.border_style = parse_int(value)?,
            StyleField::Outline => style.outline = parse_float(value)?,
            StyleField::Shadow => style.shadow = parse_float(value)?,
            StyleField::Alignment => {
                let resolved = parse_alignment(value, self.version)?;
                if resolved.scheme != self.version {
                    issues.push(ParseIssue::info(
                        IssueCategory::Style,
                        format!(
                            "Alignment {value} is not a {} code, read as {} {}",
                            self.version, resolved.scheme, resolved.alignment
                        ),
                        line_number,
                    ));
                }
                style.alignment = resolved.alignment;
            }
            StyleField::MarginL => style.margin_l = parse_int(value)?,
            StyleField::MarginR => style.margin_r = parse_int(value)?,
            StyleField::MarginV => style.margin_v = parse_int(value)?,
            StyleField::AlphaLevel => style.alpha_level = parse_int(value)?,
            StyleField::Encoding => style.encoding = parse_int(value)?,
        }
        Ok(())
    }
}
