//! Color values and their two SubStation encodings
//!
//! v4.00+ scripts write `&HAABBGGRR` hex literals. v4.00 scripts write the
//! same channels as a decimal integer `BBGGRR` without alpha. Some tools mix
//! the two, so reading probes the literal form instead of trusting the
//! declared version.

use core::fmt;

use crate::parser::{ParseError, ParseResult};

/// RGBA color with SubStation alpha semantics (0 is opaque, 255 transparent)
///
/// # Example
///
/// ```rust
/// use ssa_core::ast::{color_to_ass_rgba, rgba_to_color, Color};
///
/// let color = rgba_to_color("&HAABBCCDD")?;
/// assert_eq!(color, Color::with_alpha(0xDD, 0xCC, 0xBB, 0xAA));
/// assert_eq!(color_to_ass_rgba(color), "&HAABBCCDD");
/// # Ok::<(), ssa_core::parser::ParseError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    /// Opaque color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0 }
    }

    #[must_use]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack an `AABBGGRR` word
    #[must_use]
    pub const fn from_abgr(value: u32) -> Self {
        let [r, g, b, a] = value.to_le_bytes();
        Self { r, g, b, a }
    }

    /// Pack into an `AABBGGRR` word
    #[must_use]
    pub const fn to_abgr(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_to_ass_rgba(*self))
    }
}

/// A literal form probe: `None` when the text is not in this form
type ColorParser = fn(&str) -> Option<ParseResult<Color>>;

/// Literal forms tried in order, first claim wins
const COLOR_PARSERS: &[ColorParser] = &[parse_hex_abgr, parse_decimal_bgr];

/// `&HAABBGGRR`, `&HBBGGRR` and the trailing-ampersand variants
fn parse_hex_abgr(text: &str) -> Option<ParseResult<Color>> {
    let digits = text
        .strip_prefix("&H")
        .or_else(|| text.strip_prefix("&h"))?;
    let digits = digits.strip_suffix('&').unwrap_or(digits);

    if digits.is_empty() || digits.len() > 8 {
        return Some(Err(ParseError::color(text, "expected 1 to 8 hex digits")));
    }
    Some(
        u32::from_str_radix(digits, 16)
            .map(Color::from_abgr)
            .map_err(|_| ParseError::color(text, "invalid hex digits")),
    )
}

/// Decimal `BBGGRR`; anything above 24 bits is discarded, so alpha is 0
fn parse_decimal_bgr(text: &str) -> Option<ParseResult<Color>> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        text.parse::<i64>()
            .map(|value| Color::from_abgr((value & 0x00FF_FFFF) as u32))
            .map_err(|_| ParseError::color(text, "decimal value out of range")),
    )
}

/// Decode a color literal in either encoding
///
/// # Errors
///
/// Returns [`ParseError::InvalidColorFormat`] when the text is in neither
/// form or its digits are invalid.
pub fn rgba_to_color(text: &str) -> ParseResult<Color> {
    let text = text.trim();
    COLOR_PARSERS
        .iter()
        .find_map(|parser| parser(text))
        .unwrap_or_else(|| Err(ParseError::color(text, "expected &H hex or decimal")))
}

/// Encode as the v4.00+ `&HAABBGGRR` literal
#[must_use]
pub fn color_to_ass_rgba(color: Color) -> String {
    format!(
        "&H{:02X}{:02X}{:02X}{:02X}",
        color.a, color.b, color.g, color.r
    )
}

/// Encode as the v4.00 decimal `BBGGRR` value; alpha is dropped
#[must_use]
pub const fn color_to_ssa_rgb(color: Color) -> u32 {
    ((color.b as u32) << 16) | ((color.g as u32) << 8) | color.r as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literals() {
        assert_eq!(
            rgba_to_color("&HAABBCCDD").unwrap(),
            Color::with_alpha(0xDD, 0xCC, 0xBB, 0xAA)
        );
        assert_eq!(rgba_to_color("&H000000FF").unwrap(), Color::RED);
        assert_eq!(rgba_to_color("&h00ffffff").unwrap(), Color::WHITE);
        assert_eq!(rgba_to_color("&H000000FF&").unwrap(), Color::RED);
    }

    #[test]
    fn short_hex_has_no_alpha() {
        assert_eq!(rgba_to_color("&HFFFFFF").unwrap(), Color::WHITE);
        assert_eq!(rgba_to_color("&H00FFFF").unwrap(), Color::new(255, 255, 0));
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(rgba_to_color("16777215").unwrap(), Color::WHITE);
        assert_eq!(rgba_to_color("255").unwrap(), Color::RED);
        assert_eq!(rgba_to_color("0").unwrap(), Color::BLACK);
        // alpha bits above 24 are ignored in the legacy form
        assert_eq!(rgba_to_color("4294967295").unwrap(), Color::WHITE);
    }

    #[test]
    fn invalid_literals() {
        assert!(matches!(
            rgba_to_color("white"),
            Err(ParseError::InvalidColorFormat { .. })
        ));
        assert!(rgba_to_color("&HZZZZ").is_err());
        assert!(rgba_to_color("&H").is_err());
        assert!(rgba_to_color("&H1122334455").is_err());
        assert!(rgba_to_color("").is_err());
    }

    #[test]
    fn encodings() {
        let color = Color::with_alpha(0xDD, 0xCC, 0xBB, 0xAA);
        assert_eq!(color_to_ass_rgba(color), "&HAABBCCDD");
        assert_eq!(color_to_ssa_rgb(color), 0x00BB_CCDD);
        assert_eq!(color_to_ssa_rgb(Color::WHITE), 16_777_215);
        assert_eq!(color.to_string(), "&HAABBCCDD");
    }

    #[test]
    fn round_trips() {
        let solid = Color::new(1, 2, 3);
        let transparent = Color::with_alpha(1, 2, 3, 4);

        assert_eq!(
            rgba_to_color(&color_to_ssa_rgb(solid).to_string()).unwrap(),
            solid
        );
        assert_eq!(rgba_to_color(&color_to_ass_rgba(solid)).unwrap(), solid);
        assert_eq!(
            rgba_to_color(&color_to_ass_rgba(transparent)).unwrap(),
            transparent
        );
        assert_eq!(Color::from_abgr(transparent.to_abgr()), transparent);
    }
}
