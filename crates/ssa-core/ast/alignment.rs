//! Screen anchor positions and their two numbering schemes
//!
//! v4.00+ styles use numeric keypad layout (1 bottom-left to 9 top-right).
//! v4.00 styles use the legacy SubStation scheme: 1-3 bottom, 5-7 top,
//! 9-11 middle, with 4 and 8 unused.

use core::fmt;

use crate::ScriptVersion;

/// Anchor position of a subtitle on screen
///
/// Discriminants are keypad codes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    BottomLeft = 1,
    #[default]
    BottomCenter = 2,
    BottomRight = 3,
    MiddleLeft = 4,
    MiddleCenter = 5,
    MiddleRight = 6,
    TopLeft = 7,
    TopCenter = 8,
    TopRight = 9,
}

/// `(legacy code, anchor)` pairs for the v4.00 scheme
const SSA_CODES: [(u8, Alignment); 9] = [
    (1, Alignment::BottomLeft),
    (2, Alignment::BottomCenter),
    (3, Alignment::BottomRight),
    (5, Alignment::TopLeft),
    (6, Alignment::TopCenter),
    (7, Alignment::TopRight),
    (9, Alignment::MiddleLeft),
    (10, Alignment::MiddleCenter),
    (11, Alignment::MiddleRight),
];

impl Alignment {
    /// Anchor used when a code is invalid in both schemes
    pub const DEFAULT: Self = Self::BottomCenter;

    pub const ALL: [Self; 9] = [
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
    ];

    /// Anchor for a v4.00+ keypad code
    #[must_use]
    pub const fn from_keypad(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::BottomLeft),
            2 => Some(Self::BottomCenter),
            3 => Some(Self::BottomRight),
            4 => Some(Self::MiddleLeft),
            5 => Some(Self::MiddleCenter),
            6 => Some(Self::MiddleRight),
            7 => Some(Self::TopLeft),
            8 => Some(Self::TopCenter),
            9 => Some(Self::TopRight),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_keypad(self) -> u8 {
        self as u8
    }

    /// Anchor for a legacy v4.00 code
    #[must_use]
    pub fn from_ssa(code: i64) -> Option<Self> {
        SSA_CODES
            .iter()
            .find(|(ssa, _)| i64::from(*ssa) == code)
            .map(|&(_, alignment)| alignment)
    }

    #[must_use]
    pub fn to_ssa(self) -> u8 {
        SSA_CODES
            .iter()
            .find(|(_, alignment)| *alignment == self)
            .map_or(2, |&(ssa, _)| ssa)
    }

    /// Anchor for `code` in the scheme of `version`
    #[must_use]
    pub fn from_code(code: i64, version: ScriptVersion) -> Option<Self> {
        if version.is_legacy() {
            Self::from_ssa(code)
        } else {
            Self::from_keypad(code)
        }
    }

    /// Code for this anchor in the scheme of `version`
    #[must_use]
    pub fn to_code(self, version: ScriptVersion) -> u8 {
        if version.is_legacy() {
            self.to_ssa()
        } else {
            self.to_keypad()
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::MiddleLeft => "middle-left",
            Self::MiddleCenter => "middle-center",
            Self::MiddleRight => "middle-right",
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
        };
        f.write_str(name)
    }
}
