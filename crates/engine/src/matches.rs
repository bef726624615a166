//! Match records - the scanner's output.

use serde::{Deserialize, Serialize};

use huescan_core::{NotationTag, Span};

use crate::color::Color;

/// Where a recognized literal sat in the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    /// A bare literal with no recognized surrounding structure
    Standalone,
    /// The value of a `key = value` / `"key": value` pair
    NamedEntry,
    /// An element of a bracketed list
    PaletteEntry,
}

/// A recognized color literal.
///
/// The span covers exactly the value text - for named entries and palette
/// elements the surrounding key, quotes, brackets and commas are excluded,
/// so a replacement never disturbs the host language's syntax.
///
/// Created during a scan, consumed by the formatter and replacement
/// engine, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub span: Span,
    pub color: Color,
    /// Notation of the value text itself
    pub notation: NotationTag,
    pub kind: MatchKind,
    /// Key name for named entries (display/rename context, not part of
    /// the color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let m = Match {
            span: Span::new(6, 13, 0),
            color: Color::rgb(44, 62, 80),
            notation: NotationTag::Hex,
            kind: MatchKind::NamedEntry,
            key: Some("bg".to_string()),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["notation"], "hex");
        assert_eq!(json["kind"], "named-entry");
        assert_eq!(json["key"], "bg");
        assert_eq!(json["span"]["start"], 6);
    }

    #[test]
    fn test_key_omitted_when_standalone() {
        let m = Match {
            span: Span::new(0, 7, 0),
            color: Color::rgb(255, 85, 0),
            notation: NotationTag::Hex,
            kind: MatchKind::Standalone,
            key: None,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("\"key\""));
    }
}
