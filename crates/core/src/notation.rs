//! Notation tags - the closed set of color literal encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A textual encoding of a color.
///
/// Every recognizer produces exactly one of these tags, and every formatter
/// renders exactly one. Tags are serialized kebab-case so hosts see the
/// same names the scan configuration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotationTag {
    /// `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    Hex,
    /// `0xRRGGBB` or `0xAARRGGBB` (alpha first, Android convention)
    HexLiteral,
    /// `(r, g, b)` with integer channels
    RgbTuple,
    /// `(r, g, b, a)` with integer channels
    RgbaTuple,
    /// `rgb(r, g, b)`
    CssRgb,
    /// `rgba(r, g, b, a)` - alpha as 0-1 float or 0-255 integer
    CssRgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
}

impl NotationTag {
    /// Whether the notation's textual form always carries an explicit
    /// alpha component. The hex notations are excluded: their digit
    /// count decides alpha per rendering, under the same tag.
    pub fn has_alpha(&self) -> bool {
        matches!(
            self,
            NotationTag::RgbaTuple | NotationTag::CssRgba | NotationTag::Hsla
        )
    }

    /// The alpha-carrying sibling of this notation (self if it already
    /// carries alpha). Used when a non-opaque color must not lose its
    /// alpha in an alpha-less target.
    pub fn with_alpha(&self) -> NotationTag {
        match self {
            NotationTag::RgbTuple => NotationTag::RgbaTuple,
            NotationTag::CssRgb => NotationTag::CssRgba,
            NotationTag::Hsl => NotationTag::Hsla,
            other => *other,
        }
    }

    /// The alpha-less sibling of this notation (self if it has none).
    pub fn without_alpha(&self) -> NotationTag {
        match self {
            NotationTag::RgbaTuple => NotationTag::RgbTuple,
            NotationTag::CssRgba => NotationTag::CssRgb,
            NotationTag::Hsla => NotationTag::Hsl,
            other => *other,
        }
    }
}

impl fmt::Display for NotationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotationTag::Hex => "hex",
            NotationTag::HexLiteral => "hex-literal",
            NotationTag::RgbTuple => "rgb-tuple",
            NotationTag::RgbaTuple => "rgba-tuple",
            NotationTag::CssRgb => "css-rgb",
            NotationTag::CssRgba => "css-rgba",
            NotationTag::Hsl => "hsl",
            NotationTag::Hsla => "hsla",
        };
        f.write_str(name)
    }
}
