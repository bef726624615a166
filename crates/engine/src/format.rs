//! Formatters - render a canonical color back into a notation.
//!
//! The inverse of the recognizers. With no explicit target the match's
//! own notation is re-rendered (normalizing shorthand hex, tuple spacing,
//! and case); with a target the notation converts while the color is
//! preserved exactly.

use serde::{Deserialize, Serialize};

use huescan_core::NotationTag;

use crate::color::Color;
use crate::matches::Match;

/// Digit case for hex renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// Whether a rendering carries the alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaPolicy {
    /// Alpha-carrying notations always include it; alpha-less notations
    /// include it only when the color is not fully opaque, upgrading to
    /// the alpha-carrying sibling so color information is never lost.
    #[default]
    Auto,
    Always,
    Never,
}

/// How to render a color back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    pub notation: NotationTag,
    pub alpha: AlphaPolicy,
    pub hex_case: HexCase,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            notation: NotationTag::Hex,
            alpha: AlphaPolicy::Auto,
            hex_case: HexCase::Upper,
        }
    }
}

impl FormatSpec {
    pub fn notation(notation: NotationTag) -> Self {
        FormatSpec {
            notation,
            ..FormatSpec::default()
        }
    }
}

/// Render a match's color. `spec` omitted re-renders in the match's own
/// notation. Named-entry and palette-entry matches span only their value
/// text, so the surrounding key/bracket syntax is untouched by
/// construction.
pub fn render(m: &Match, spec: Option<&FormatSpec>) -> String {
    match spec {
        Some(spec) => render_color(m.color, spec),
        None => render_color(m.color, &FormatSpec::notation(m.notation)),
    }
}

/// Render a color according to `spec`.
pub fn render_color(color: Color, spec: &FormatSpec) -> String {
    let include_alpha = match spec.alpha {
        AlphaPolicy::Always => true,
        AlphaPolicy::Never => false,
        AlphaPolicy::Auto => spec.notation.has_alpha() || !color.is_opaque(),
    };
    let notation = if include_alpha {
        spec.notation.with_alpha()
    } else {
        spec.notation.without_alpha()
    };
    let uppercase = spec.hex_case == HexCase::Upper;

    match notation {
        NotationTag::Hex => format!("#{}", color.to_hex(include_alpha, uppercase)),
        NotationTag::HexLiteral => {
            let word = if include_alpha {
                color.to_argb()
            } else {
                color.to_argb() & 0x00FF_FFFF
            };
            let digits = if include_alpha { 8 } else { 6 };
            if uppercase {
                format!("0x{:0width$X}", word, width = digits)
            } else {
                format!("0x{:0width$x}", word, width = digits)
            }
        }
        NotationTag::RgbTuple => {
            format!("({}, {}, {})", color.r, color.g, color.b)
        }
        NotationTag::RgbaTuple => {
            format!("({}, {}, {}, {})", color.r, color.g, color.b, color.a)
        }
        NotationTag::CssRgb => {
            format!("rgb({}, {}, {})", color.r, color.g, color.b)
        }
        NotationTag::CssRgba => {
            format!(
                "rgba({}, {}, {}, {})",
                color.r,
                color.g,
                color.b,
                css_alpha(color.a)
            )
        }
        NotationTag::Hsl => {
            let (h, s, l) = color.to_hsl();
            format!("hsl({}, {}%, {}%)", h.round(), s.round(), l.round())
        }
        NotationTag::Hsla => {
            let (h, s, l) = color.to_hsl();
            format!(
                "hsla({}, {}%, {}%, {})",
                h.round(),
                s.round(),
                l.round(),
                css_alpha(color.a)
            )
        }
    }
}

/// CSS alpha: 0-1, at most two decimals, no trailing zeros.
fn css_alpha(a: u8) -> String {
    match a {
        255 => "1".to_string(),
        0 => "0".to_string(),
        _ => {
            let v = (a as f32 / 255.0 * 100.0).round() / 100.0;
            format!("{}", v)
        }
    }
}
