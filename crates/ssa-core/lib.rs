//! # ssa-core
//!
//! Reader and writer for SubStation Alpha scripts (`.ssa`, schema v4.00)
//! and Advanced SubStation Alpha scripts (`.ass`, schema v4.00+), plus the
//! millisecond time engine subtitle tools build on.
//!
//! ## Features
//!
//! - **Lenient parsing**: malformed lines become [`parser::ParseIssue`]s
//!   instead of errors
//! - **Both schemas**: reads either dialect and writes either dialect
//! - **Frame conversion**: constant frame rates and explicit timestamp
//!   tables via [`time::Timestamps`]
//! - **Format detection**: SubStation and MPL2 input through
//!   [`formats::parse`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ssa_core::{writer::WriteOptions, Document, ScriptVersion};
//!
//! let script_text = r"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! ";
//!
//! let parsed = Document::from_string(script_text)?;
//! assert_eq!(parsed.version, ScriptVersion::AssV4);
//! assert_eq!(parsed.value.events[0].end, 5000);
//!
//! let ssa = parsed.value.to_substation(&WriteOptions::for_version(ScriptVersion::SsaV4))?;
//! assert!(ssa.value.contains("[V4 Styles]"));
//! # Ok::<(), ssa_core::CoreError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

use core::fmt;

pub mod ast;
pub mod formats;
pub mod parser;
pub mod time;
pub mod utils;
pub mod writer;

pub use ast::{Document, Event, Style};
pub use parser::{ParseError, ParseIssue};
pub use utils::{CoreError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SubStation schema versions
///
/// The version decides the style field list, the alignment numbering and
/// how colors are written.
///
/// # Examples
///
/// ```rust
/// use ssa_core::ScriptVersion;
///
/// let version = ScriptVersion::from_header("v4.00+").unwrap();
/// assert_eq!(version, ScriptVersion::AssV4);
/// assert!(ScriptVersion::SsaV4.is_legacy());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptVersion {
    /// SSA v4.00 (`.ssa`)
    SsaV4,
    /// ASS v4.00+ (`.ass`)
    #[default]
    AssV4,
}

impl ScriptVersion {
    /// Parse a `ScriptType` value
    ///
    /// Surrounding whitespace and letter case are ignored.
    ///
    /// ```rust
    /// use ssa_core::ScriptVersion;
    ///
    /// assert_eq!(ScriptVersion::from_header("v4.00"), Some(ScriptVersion::SsaV4));
    /// assert_eq!(ScriptVersion::from_header(" V4.00+ "), Some(ScriptVersion::AssV4));
    /// assert_eq!(ScriptVersion::from_header("invalid"), None);
    /// ```
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        if header.eq_ignore_ascii_case("v4.00") {
            Some(Self::SsaV4)
        } else if header.eq_ignore_ascii_case("v4.00+") {
            Some(Self::AssV4)
        } else {
            None
        }
    }

    /// `ScriptType` value written for this version
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::SsaV4 => "v4.00",
            Self::AssV4 => "v4.00+",
        }
    }

    /// Name of the styles section, without brackets
    #[must_use]
    pub const fn styles_section(self) -> &'static str {
        match self {
            Self::SsaV4 => "V4 Styles",
            Self::AssV4 => "V4+ Styles",
        }
    }

    /// Whether this is the legacy SSA schema
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::SsaV4)
    }

    /// The other schema
    #[must_use]
    pub const fn other_scheme(self) -> Self {
        match self {
            Self::SsaV4 => Self::AssV4,
            Self::AssV4 => Self::SsaV4,
        }
    }
}

impl fmt::Display for ScriptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
