//! Input format detection
//!
//! SubStation scripts are recognized by a known `[Section]` header, MPL2
//! files by a `[start][end]` line. Detection looks at whole lines only, so
//! a bracketed word inside event text never decides the format.

pub mod mpl2;

use core::fmt;

use crate::{
    ast::Document,
    parser::{self, section_header, Parsed, SectionType},
    utils::{CoreError, Result},
};

/// Supported input formats
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `.ssa` / `.ass`
    Substation,
    /// `[start][end] text` lines
    Mpl2,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substation => write!(f, "substation"),
            Self::Mpl2 => write!(f, "mpl2"),
        }
    }
}

/// Guess the format of `text`
///
/// A SubStation section header anywhere wins over MPL2 lines.
#[must_use]
pub fn detect(text: &str) -> Option<Format> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines = || text.lines().map(str::trim);

    if lines().any(|line| section_header(line).and_then(SectionType::from_header).is_some()) {
        Some(Format::Substation)
    } else if lines().any(|line| mpl2::MPL2_LINE.is_match(line)) {
        Some(Format::Mpl2)
    } else {
        None
    }
}

/// Detect the format of `text` and parse it
///
/// # Errors
///
/// Returns [`CoreError::UnknownFormat`] when [`detect`] finds nothing.
pub fn parse(text: &str) -> Result<Parsed<Document>> {
    let format = detect(text).ok_or(CoreError::UnknownFormat)?;
    tracing::debug!(%format, "detected subtitle format");
    Ok(match format {
        Format::Substation => parser::parse(text),
        Format::Mpl2 => mpl2::parse(text),
    })
}
