//! Events section parser for `[Events]`
//!
//! Rows start with `Dialogue:` or `Comment:`. The last declared field takes
//! the rest of the row verbatim, commas and leading spaces included.

use crate::{
    ast::{Document, Event, EventType},
    parser::{
        fields::{parse_int, parse_marked, parse_time},
        sections::{parse_format_line, report_field_error, report_short_row, split_row},
        IssueCategory, IssueLog, ParseIssue, ParseResult,
    },
    utils::normalize_field_value,
    ScriptVersion,
};

/// v4.00+ event fields, in the order written
pub const ASS_EVENT_FORMAT: [&str; 10] = [
    "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

/// v4.00 event fields, in the order written
pub const SSA_EVENT_FORMAT: [&str; 10] = [
    "Marked", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

/// Built-in field list for `version`
#[must_use]
pub fn event_format(version: ScriptVersion) -> &'static [&'static str] {
    if version.is_legacy() {
        &SSA_EVENT_FORMAT
    } else {
        &ASS_EVENT_FORMAT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventField {
    Layer,
    Marked,
    Start,
    End,
    Style,
    Name,
    MarginL,
    MarginR,
    MarginV,
    Effect,
    Text,
    Unknown,
}

impl EventField {
    fn from_name(name: &str) -> Self {
        const NAMES: [(&str, EventField); 12] = [
            ("Layer", EventField::Layer),
            ("Marked", EventField::Marked),
            ("Start", EventField::Start),
            ("End", EventField::End),
            ("Style", EventField::Style),
            ("Name", EventField::Name),
            ("Actor", EventField::Name),
            ("MarginL", EventField::MarginL),
            ("MarginR", EventField::MarginR),
            ("MarginV", EventField::MarginV),
            ("Effect", EventField::Effect),
            ("Text", EventField::Text),
        ];
        NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map_or(Self::Unknown, |&(_, field)| field)
    }
}

/// Parser for event rows
pub struct EventsParser {
    version: ScriptVersion,
    format: Option<Vec<(String, EventField)>>,
}

impl EventsParser {
    /// Create parser using the built-in field list of `version` until a `Format:` line
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
                IssueCategory::Event,
                format!("Ignoring line without keyword: {line}"),
                line_number,
            ));
            return;
        };
        let keyword = keyword.trim();

        if keyword.eq_ignore_ascii_case("Format") {
            self.set_format(&parse_format_line(data), line_number, issues);
            return;
        }

        match EventType::from_keyword(keyword) {
            Some(event_type) => {
                let event = self.parse_event(event_type, data, line_number, issues);
                doc.events.push(event);
            }
            None => issues.push(ParseIssue::warning(
                IssueCategory::Event,
                format!("Ignoring unknown event type '{keyword}'"),
                line_number,
            )),
        }
    }

    fn set_format(&mut self, names: &[String], line_number: usize, issues: &mut IssueLog) {
        let format: Vec<_> = names
            .iter()
            .map(|name| (name.clone(), EventField::from_name(name)))
            .collect();

        for (name, _) in format
            .iter()
            .filter(|(_, field)| *field == EventField::Unknown)
        {
            issues.push(ParseIssue::info(
                IssueCategory::Format,
                format!("Ignoring unknown event field '{name}'"),
                line_number,
            ));
        }
        self.format = Some(format);
    }

    fn parse_event(
        &mut self,
        event_type: EventType,
        data: &str,
        line_number: usize,
        issues: &mut IssueLog,
    ) -> Event {
        if self.format.is_none() {
            issues.push(ParseIssue::info(
                IssueCategory::Format,
                format!("No Format line for events, assuming {} fields", self.version),
                line_number,
            ));
            let names: Vec<String> = event_format(self.version)
                .iter()
                .map(ToString::to_string)
                .collect();
            self.set_format(&names, line_number, issues);
        }

        let mut event = Event {
            event_type,
            ..Event::default()
        };
        let Some(format) = self.format.as_deref() else {
            return event;
        };

        let values = split_row(data, format.len());
        if values.len() < format.len() {
            report_short_row("Event", values.len(), format.len(), line_number, issues);
        }

        for ((column, field), value) in format.iter().zip(values) {
            let value = match field {
                EventField::Text => value,
                _ => normalize_field_value(value),
            };
            if let Err(err) = apply(*field, value, &mut event) {
                report_field_error(IssueCategory::Event, column, &err, line_number, issues);
            }
        }
        event
    }
}

fn apply(field: EventField, value: &str, event: &mut Event) -> ParseResult<()> {
    match field {
        EventField::Unknown => {}
        EventField::Layer => event.layer = parse_int(value)?,
        EventField::Marked => event.marked = parse_marked(value)?,
        EventField::Start => event.start = parse_time(value)?,
        EventField::End => event.end = parse_time(value)?,
        EventField::Style => event.style = value.to_string(),
        EventField::Name => event.name = value.to_string(),
        EventField::MarginL => event.margin_l = parse_int(value)?,
        EventField::MarginR => event.margin_r = parse_int(value)?,
        EventField::MarginV => event.margin_v = parse_int(value)?,
        EventField::Effect => event.effect = value.to_string(),
        EventField::Text => event.text = value.to_string(),
    }
    Ok(())
}
