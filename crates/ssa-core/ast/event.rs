//! Event record for dialogue and comment lines

use core::fmt;

/// Leading keyword of an `[Events]` row
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventType {
    /// Displayed subtitle
    #[default]
    Dialogue,
    /// Kept in the script but never displayed
    Comment,
}

impl EventType {
    /// Match a row keyword, case-insensitively
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("Dialogue") {
            Some(Self::Dialogue)
        } else if keyword.eq_ignore_ascii_case("Comment") {
            Some(Self::Comment)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One subtitle line
///
/// Times are milliseconds and may be negative or exceed the range the text
/// format can express; the writer clamps them on output only.
///
/// # Examples
///
/// ```rust
/// use ssa_core::ast::{Event, EventType};
///
/// let event = Event {
///     start: 1000,
///     end: 2500,
///     text: "Hello".to_string(),
///     ..Event::default()
/// };
/// assert_eq!(event.event_type, EventType::Dialogue);
/// assert_eq!(event.duration(), 1500);
/// assert_eq!(event.style, "Default");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    /// Z-order, v4.00+ only
    pub layer: i32,
    /// v4.00 only
    pub marked: bool,
    pub start: i64,
    pub end: i64,
    /// Name of the style in the style table
    pub style: String,
    /// Actor name
    pub name: String,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    pub effect: String,
    /// Text with override tags, `\N` for hard line breaks
    pub text: String,
}

impl Event {
    /// Check if this event is displayed
    #[must_use]
    pub const fn is_dialogue(&self) -> bool {
        matches!(self.event_type, EventType::Dialogue)
    }

    /// `end - start` in milliseconds
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Default for Event {
    fn default() -> Self {
        Self {
            event_type: EventType::Dialogue,
            layer: 0,
            marked: false,
            start: 0,
            end: 10_000,
            style: "Default".to_string(),
            name: String::new(),
            margin_l: 0,
            margin_r: 0,
            margin_v: 0,
            effect: String::new(),
            text: String::new(),
        }
    }
}
