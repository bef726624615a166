//! Hex notation recognizers: `#RRGGBB` strings and `0xAARRGGBB` literals.

use huescan_core::NotationTag;

use crate::color::Color;
use crate::recognize::ValueMatch;

/// Match `#` followed by exactly 3, 4, 6 or 8 hex digits at `pos`.
///
/// The digit run is maximal: `#12345` has five digits and fails outright
/// rather than matching a four-digit prefix. A trailing identifier
/// character (`#1f77b4x`) also fails - that text is a word, not a color.
pub fn try_match_hex(text: &str, pos: usize) -> Option<ValueMatch> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'#') {
        return None;
    }

    let digits_start = pos + 1;
    let mut end = digits_start;
    while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
        end += 1;
    }

    let len = end - digits_start;
    if !matches!(len, 3 | 4 | 6 | 8) {
        return None;
    }
    if is_ident_byte(bytes.get(end)) {
        return None;
    }

    let color = Color::from_hex(&text[digits_start..end])?;
    Some(ValueMatch {
        start: pos,
        end,
        color,
        tag: NotationTag::Hex,
    })
}

/// Match `0x` followed by exactly 6 (RRGGBB) or 8 (AARRGGBB) hex digits.
///
/// Eight digits put alpha FIRST - the Android/Compose packing - unlike
/// 8-digit `#` hex, which is CSS RRGGBBAA.
pub fn try_match_hex_literal(text: &str, pos: usize) -> Option<ValueMatch> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'0') {
        return None;
    }
    if !matches!(bytes.get(pos + 1), Some(&b'x') | Some(&b'X')) {
        return None;
    }
    // Word boundary: "10x123456" is not a color literal
    if pos > 0 && is_ident_byte(bytes.get(pos - 1)) {
        return None;
    }

    let digits_start = pos + 2;
    let mut end = digits_start;
    while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
        end += 1;
    }

    let len = end - digits_start;
    if !matches!(len, 6 | 8) {
        return None;
    }
    if is_ident_byte(bytes.get(end)) {
        return None;
    }

    let word = u32::from_str_radix(&text[digits_start..end], 16).ok()?;
    let color = if len == 8 {
        Color::from_argb(word)
    } else {
        Color::from_rgb_u32(word)
    };
    Some(ValueMatch {
        start: pos,
        end,
        color,
        tag: NotationTag::HexLiteral,
    })
}

fn is_ident_byte(b: Option<&u8>) -> bool {
    matches!(b, Some(b) if b.is_ascii_alphanumeric() || *b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_6() {
        let m = try_match_hex("#FF5500", 0).unwrap();
        assert_eq!(m.color, Color::rgb(255, 85, 0));
        assert_eq!((m.start, m.end), (0, 7));
        assert_eq!(m.tag, NotationTag::Hex);
    }

    #[test]
    fn test_hex_3() {
        let m = try_match_hex("#fff", 0).unwrap();
        assert_eq!(m.color, Color::rgb(255, 255, 255));
        assert_eq!((m.start, m.end), (0, 4));
    }

    #[test]
    fn test_hex_8_alpha_last() {
        let m = try_match_hex("#FF550080", 0).unwrap();
        assert_eq!(m.color, Color::rgba(255, 85, 0, 128));
    }

    #[test]
    fn test_hex_mid_text() {
        let text = "color: #AA33BB;";
        let m = try_match_hex(text, 7).unwrap();
        assert_eq!((m.start, m.end), (7, 14));
        assert_eq!(m.color, Color::rgb(0xAA, 0x33, 0xBB));
    }

    #[test]
    fn test_hex_wrong_digit_count() {
        assert!(try_match_hex("#12345", 0).is_none());
        assert!(try_match_hex("#1234567", 0).is_none());
        assert!(try_match_hex("#12", 0).is_none());
        assert!(try_match_hex("#", 0).is_none());
    }

    #[test]
    fn test_hex_trailing_word_char() {
        assert!(try_match_hex("#1f77b4x", 0).is_none());
        assert!(try_match_hex("#fff_suffix", 0).is_none());
    }

    #[test]
    fn test_hex_comment_is_not_color() {
        // "# Blue" - a comment, not a literal
        assert!(try_match_hex("# Blue", 0).is_none());
    }

    #[test]
    fn test_hex_literal_6() {
        let m = try_match_hex_literal("0x2196F3", 0).unwrap();
        assert_eq!(m.color, Color::rgb(0x21, 0x96, 0xF3));
        assert_eq!((m.start, m.end), (0, 8));
        assert_eq!(m.tag, NotationTag::HexLiteral);
    }

    #[test]
    fn test_hex_literal_8_alpha_first() {
        let m = try_match_hex_literal("0xFF6200EE", 0).unwrap();
        assert_eq!(m.color, Color::rgba(0x62, 0x00, 0xEE, 0xFF));
    }

    #[test]
    fn test_hex_literal_semi_transparent() {
        let m = try_match_hex_literal("0x80000000", 0).unwrap();
        assert_eq!(m.color, Color::rgba(0, 0, 0, 0x80));
    }

    #[test]
    fn test_hex_literal_word_boundary() {
        assert!(try_match_hex_literal("10x123456", 1).is_none());
        assert!(try_match_hex_literal("0x123456zz", 0).is_none());
    }

    #[test]
    fn test_hex_literal_wrong_digit_count() {
        assert!(try_match_hex_literal("0x123", 0).is_none());
        assert!(try_match_hex_literal("0x1234567", 0).is_none());
    }
}
