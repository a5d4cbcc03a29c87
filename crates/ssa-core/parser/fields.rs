//! Typed coercion of single row fields
//!
//! Every function takes the raw field text (already trimmed by the section
//! parsers) and either produces a typed value or a [`ParseError`]. Where a
//! field has several accepted literal forms, the forms are tried in a fixed
//! order and the first one that matches wins.

use crate::{
    ast::Alignment,
    parser::{ParseError, ParseResult},
    time::parse_timestamp,
    ScriptVersion,
};

pub use crate::ast::rgba_to_color as parse_color;

/// Integer literal forms: plain integers, then decimals rounded to the nearest integer
const INT_PARSERS: &[fn(&str) -> Option<i64>] = &[int_literal, rounded_real_literal];

fn int_literal(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

fn rounded_real_literal(text: &str) -> Option<i64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.abs() < i64::MAX as f64)
        .map(|value| value.round() as i64)
}

/// Parse an integer field such as a margin, layer or encoding
///
/// Leading zeros are accepted (`0000` is a common margin literal).
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumericValue`] if no literal form matches or
/// the value does not fit an `i32`.
pub fn parse_int(text: &str) -> ParseResult<i32> {
    let value = parse_wide_int(text)?;
    i32::try_from(value).map_err(|_| ParseError::numeric(text, "out of range"))
}

fn parse_wide_int(text: &str) -> ParseResult<i64> {
    INT_PARSERS
        .iter()
        .find_map(|parser| parser(text))
        .ok_or_else(|| ParseError::numeric(text, "expected integer"))
}

/// Parse a real field such as a font size or scale
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumericValue`] for non-numbers, NaN and infinities.
pub fn parse_float(text: &str) -> ParseResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::numeric(text, "expected number"))
}

/// Parse a SubStation boolean: `-1` is true, `0` false, any other integer true
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumericValue`] if the text is not an integer.
pub fn parse_bool(text: &str) -> ParseResult<bool> {
    parse_wide_int(text).map(|value| value != 0)
}

/// Parse the v4.00 `Marked` field, written as `Marked=0`
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumericValue`] if the flag is not an integer.
pub fn parse_marked(text: &str) -> ParseResult<bool> {
    let flag = text
        .split_once('=')
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case("Marked"))
        .map_or(text, |(_, value)| value.trim());
    parse_bool(flag)
}

/// Parse a start or end timestamp
///
/// # Errors
///
/// Returns [`ParseError::InvalidTimeFormat`] if neither clock pattern matches.
pub fn parse_time(text: &str) -> ParseResult<i64> {
    parse_timestamp(text).map_err(|_| ParseError::InvalidTimeFormat {
        time: text.to_string(),
        reason: "expected H:MM:SS.cc".to_string(),
    })
}

/// Alignment code resolved against a schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAlignment {
    pub alignment: Alignment,
    /// Scheme that recognized the code, differs from the requested one on fallback
    pub scheme: ScriptVersion,
}

/// Parse an alignment code in the scheme of `version`
///
/// A code unknown to that scheme but valid in the other one is accepted
/// through the other scheme; the returned `scheme` tells which.
///
/// # Errors
///
/// Returns [`ParseError::InvalidAlignment`] if the code is valid in neither
/// scheme, or [`ParseError::InvalidNumericValue`] if it is not an integer.
pub fn parse_alignment(text: &str, version: ScriptVersion) -> ParseResult<ResolvedAlignment> {
    let code = parse_wide_int(text)?;
    [version, version.other_scheme()]
        .into_iter()
        .find_map(|scheme| {
            Alignment::from_code(code, scheme)
                .map(|alignment| ResolvedAlignment { alignment, scheme })
        })
        .ok_or(ParseError::InvalidAlignment { value: code })
}
