//! Owned in-memory subtitle document

use super::{Event, Style};
use crate::{
    formats,
    parser::{Parsed, WithIssues},
    utils::{OrderedMap, Result},
    writer::{self, WriteOptions},
};

/// Script metadata, style table and event list
///
/// `info` and `aegisub_project` keep unknown keys as opaque strings in
/// insertion order. `fonts` and `graphics` hold embedded attachments as
/// their encoded lines, keyed by file name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// `[Script Info]` pairs, excluding `ScriptType`
    pub info: OrderedMap<String, String>,
    /// `[Aegisub Project Garbage]` pairs
    pub aegisub_project: OrderedMap<String, String>,
    pub styles: OrderedMap<String, Style>,
    pub events: Vec<Event>,
    pub fonts: OrderedMap<String, Vec<String>>,
    pub graphics: OrderedMap<String, Vec<String>>,
}

impl Document {
    /// Document with no metadata, styles or events
    #[must_use]
    pub fn empty() -> Self {
        Self {
            info: OrderedMap::default(),
            aegisub_project: OrderedMap::default(),
            styles: OrderedMap::default(),
            events: Vec::new(),
            fonts: OrderedMap::default(),
            graphics: OrderedMap::default(),
        }
    }

    /// Parse text in any supported format
    ///
    /// # Example
    ///
    /// ```rust
    /// use ssa_core::Document;
    ///
    /// let parsed = Document::from_string("[123][456] Line 1")?;
    /// assert_eq!(parsed.value.events[0].start, 12_300);
    /// # Ok::<(), ssa_core::CoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownFormat`](crate::CoreError::UnknownFormat)
    /// if the text is not recognized.
    pub fn from_string(text: &str) -> Result<Parsed<Self>> {
        formats::parse(text)
    }

    /// Serialize as a SubStation script
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnrepresentableField`](crate::CoreError::UnrepresentableField)
    /// when a field cannot be placed in the line grammar.
    pub fn to_substation(&self, options: &WriteOptions) -> Result<WithIssues<String>> {
        writer::serialize(self, options)
    }

    /// Compare metadata, styles and events field by field
    ///
    /// Map order, the Aegisub project block and attachments are ignored.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.info == other.info && self.styles == other.styles && self.events == other.events
    }

    /// Append an event
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for Document {
    /// Document with the metadata and style new scripts start with
    fn default() -> Self {
        let mut doc = Self::empty();
        for (key, value) in [
            ("WrapStyle", "0"),
            ("ScaledBorderAndShadow", "yes"),
            ("Collisions", "Normal"),
        ] {
            doc.info.insert(key.to_string(), value.to_string());
        }
        doc.styles.insert("Default".to_string(), Style::default());
        doc
    }
}
