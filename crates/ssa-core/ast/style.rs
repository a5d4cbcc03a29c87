//! Style record shared by the v4.00 and v4.00+ style tables

use super::{Alignment, Color};

/// Style definition from a `[V4 Styles]` or `[V4+ Styles]` section
///
/// Holds the union of both schemas. v4.00 rows have no underline,
/// strikeout, scale, spacing or angle columns; v4.00+ rows have no
/// `AlphaLevel`. Fields missing from a row keep their default.
///
/// # Examples
///
/// ```rust
/// use ssa_core::ast::{Alignment, Style};
///
/// let style = Style {
///     bold: true,
///     alignment: Alignment::TopLeft,
///     ..Style::default()
/// };
///
/// assert_eq!(style.fontname, "Arial");
/// assert_eq!(style.fontsize, 20.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fontname: String,
    pub fontsize: f64,

    /// Fill color
    pub primary_color: Color,
    /// Karaoke pre-highlight color
    pub secondary_color: Color,
    /// `OutlineColour` in v4.00+, `TertiaryColour` in v4.00
    pub outline_color: Color,
    /// Shadow color
    pub back_color: Color,

    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,

    /// Horizontal scale percentage
    pub scale_x: f64,
    /// Vertical scale percentage
    pub scale_y: f64,
    /// Extra letter spacing in pixels
    pub spacing: f64,
    /// Rotation in degrees
    pub angle: f64,

    /// 1 for outline and shadow, 3 for opaque box
    pub border_style: i32,
    pub outline: f64,
    pub shadow: f64,

    pub alignment: Alignment,

    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,

    /// v4.00 only; unused by renderers
    pub alpha_level: i32,
    /// Font character set
    pub encoding: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fontname: "Arial".to_string(),
            fontsize: 20.0,
            primary_color: Color::WHITE,
            secondary_color: Color::RED,
            outline_color: Color::BLACK,
            back_color: Color::BLACK,
            bold: false,
            italic: false,
            underline: false,
            strikeout: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline: 2.0,
            shadow: 2.0,
            alignment: Alignment::DEFAULT,
            margin_l: 10,
            margin_r: 10,
            margin_v: 10,
            alpha_level: 0,
            encoding: 1,
        }
    }
}
