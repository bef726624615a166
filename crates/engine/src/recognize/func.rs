//! CSS function recognizers: `rgb()`, `rgba()`, `hsl()`, `hsla()`.

use huescan_core::NotationTag;

use crate::color::Color;
use crate::recognize::ValueMatch;

/// Match a CSS color function starting at `pos`.
///
/// `rgb(r, g, b)` / `rgba(r, g, b, a)` take integer channels in [0, 255];
/// the rgba/hsla alpha accepts a 0-1 float (rounded to 0-255) or a 0-255
/// integer. `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` take hue in degrees
/// and percent-suffixed saturation/lightness. Function names are
/// case-insensitive; the opening paren must follow the name directly.
pub fn try_match_func(
    text: &str,
    pos: usize,
    allow_css: bool,
    allow_hsl: bool,
) -> Option<ValueMatch> {
    let bytes = text.as_bytes();

    // Word boundary: "foorgb(" is not a color function
    if pos > 0 {
        let prev = bytes[pos - 1];
        if prev.is_ascii_alphanumeric() || prev == b'_' {
            return None;
        }
    }

    let mut name_end = pos;
    while name_end < bytes.len() && name_end - pos < 4 && bytes[name_end].is_ascii_alphabetic() {
        name_end += 1;
    }
    let name = text[pos..name_end].to_ascii_lowercase();
    if bytes.get(name_end) != Some(&b'(') {
        return None;
    }

    let args_start = name_end + 1;
    match name.as_str() {
        "rgb" if allow_css => {
            let (channels, end) = parse_int_args(bytes, text, args_start, 3)?;
            Some(ValueMatch {
                start: pos,
                end,
                color: Color::rgb(channels[0], channels[1], channels[2]),
                tag: NotationTag::CssRgb,
            })
        }
        "rgba" if allow_css => {
            let (channels, alpha, end) = parse_int_args_with_alpha(bytes, text, args_start)?;
            Some(ValueMatch {
                start: pos,
                end,
                color: Color::rgba(channels[0], channels[1], channels[2], alpha),
                tag: NotationTag::CssRgba,
            })
        }
        "hsl" if allow_hsl => {
            let (h, s, l, end) = parse_hsl_args(bytes, text, args_start, false).map(
                |(h, s, l, _a, end)| (h, s, l, end),
            )?;
            Some(ValueMatch {
                start: pos,
                end,
                color: Color::from_hsl(h, s, l),
                tag: NotationTag::Hsl,
            })
        }
        "hsla" if allow_hsl => {
            let (h, s, l, a, end) = parse_hsl_args(bytes, text, args_start, true)?;
            let mut color = Color::from_hsl(h, s, l);
            color.a = a;
            Some(ValueMatch {
                start: pos,
                end,
                color,
                tag: NotationTag::Hsla,
            })
        }
        _ => None,
    }
}

/// Exactly `count` comma-separated integers in [0, 255], then `)`.
/// Returns the channels and the offset one past the closing paren.
fn parse_int_args(
    bytes: &[u8],
    text: &str,
    mut cursor: usize,
    count: usize,
) -> Option<(Vec<u8>, usize)> {
    let mut channels = Vec::with_capacity(count);
    for i in 0..count {
        skip_ws(bytes, &mut cursor);
        channels.push(parse_int_channel(bytes, text, &mut cursor)?);
        skip_ws(bytes, &mut cursor);
        let expected = if i + 1 == count { b')' } else { b',' };
        if bytes.get(cursor) != Some(&expected) {
            return None;
        }
        cursor += 1;
    }
    Some((channels, cursor))
}

/// `r, g, b, a)` where alpha is a 0-1 float or 0-255 integer.
fn parse_int_args_with_alpha(
    bytes: &[u8],
    text: &str,
    mut cursor: usize,
) -> Option<([u8; 3], u8, usize)> {
    let mut channels = [0u8; 3];
    for channel in channels.iter_mut() {
        skip_ws(bytes, &mut cursor);
        *channel = parse_int_channel(bytes, text, &mut cursor)?;
        skip_ws(bytes, &mut cursor);
        if bytes.get(cursor) != Some(&b',') {
            return None;
        }
        cursor += 1;
    }
    skip_ws(bytes, &mut cursor);
    let alpha = parse_alpha(bytes, text, &mut cursor)?;
    skip_ws(bytes, &mut cursor);
    if bytes.get(cursor) != Some(&b')') {
        return None;
    }
    Some((channels, alpha, cursor + 1))
}

/// `h, s%, l%[, a])`. Hue wraps into [0, 360); saturation and lightness
/// must sit in [0, 100].
fn parse_hsl_args(
    bytes: &[u8],
    text: &str,
    mut cursor: usize,
    with_alpha: bool,
) -> Option<(f32, f32, f32, u8, usize)> {
    skip_ws(bytes, &mut cursor);
    let h = parse_number(bytes, text, &mut cursor)?;
    skip_ws(bytes, &mut cursor);
    if bytes.get(cursor) != Some(&b',') {
        return None;
    }
    cursor += 1;

    let mut percents = [0.0f32; 2];
    for (i, percent) in percents.iter_mut().enumerate() {
        skip_ws(bytes, &mut cursor);
        let value = parse_number(bytes, text, &mut cursor)?;
        if bytes.get(cursor) != Some(&b'%') {
            return None;
        }
        cursor += 1;
        if !(0.0..=100.0).contains(&value) {
            return None;
        }
        *percent = value;
        skip_ws(bytes, &mut cursor);
        let expected = if i == 0 || with_alpha { b',' } else { b')' };
        if bytes.get(cursor) != Some(&expected) {
            return None;
        }
        cursor += 1;
    }

    let mut alpha = 255u8;
    if with_alpha {
        skip_ws(bytes, &mut cursor);
        alpha = parse_alpha(bytes, text, &mut cursor)?;
        skip_ws(bytes, &mut cursor);
        if bytes.get(cursor) != Some(&b')') {
            return None;
        }
        cursor += 1;
    }

    Some((h, percents[0], percents[1], alpha, cursor))
}

fn skip_ws(bytes: &[u8], cursor: &mut usize) {
    while matches!(bytes.get(*cursor), Some(&b' ') | Some(&b'\t')) {
        *cursor += 1;
    }
}

/// Base-10 integer channel in [0, 255]; u8 parsing enforces the range.
fn parse_int_channel(bytes: &[u8], text: &str, cursor: &mut usize) -> Option<u8> {
    let start = *cursor;
    while *cursor < bytes.len() && bytes[*cursor].is_ascii_digit() {
        *cursor += 1;
    }
    if *cursor == start || *cursor - start > 3 || bytes.get(*cursor) == Some(&b'.') {
        return None;
    }
    text[start..*cursor].parse::<u8>().ok()
}

/// Unsigned decimal number, optional fraction.
fn parse_number(bytes: &[u8], text: &str, cursor: &mut usize) -> Option<f32> {
    let start = *cursor;
    while *cursor < bytes.len() && bytes[*cursor].is_ascii_digit() {
        *cursor += 1;
    }
    if bytes.get(*cursor) == Some(&b'.') {
        *cursor += 1;
        while *cursor < bytes.len() && bytes[*cursor].is_ascii_digit() {
            *cursor += 1;
        }
    }
    if *cursor == start {
        return None;
    }
    text[start..*cursor].parse::<f32>().ok()
}

/// Alpha component: `0.5` style 0-1 floats round into 0-255; a bare `0`
/// or `1` reads as the CSS float convention; anything larger is a 0-255
/// integer.
fn parse_alpha(bytes: &[u8], text: &str, cursor: &mut usize) -> Option<u8> {
    let start = *cursor;
    let value = parse_number(bytes, text, cursor)?;
    let token = &text[start..*cursor];
    if token.contains('.') || value <= 1.0 {
        if value > 1.0 {
            return None;
        }
        Some((value * 255.0).round() as u8)
    } else if value <= 255.0 && token.len() <= 3 {
        Some(value as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rgb() {
        let m = try_match_func("rgb(52, 152, 219)", 0, true, true).unwrap();
        assert_eq!(m.color, Color::rgb(52, 152, 219));
        assert_eq!(m.tag, NotationTag::CssRgb);
        assert_eq!((m.start, m.end), (0, 17));
    }

    #[test]
    fn test_css_rgba_float_alpha() {
        let m = try_match_func("rgba(255, 255, 255, 0.5)", 0, true, true).unwrap();
        assert_eq!(m.color, Color::rgba(255, 255, 255, 128));
        assert_eq!(m.tag, NotationTag::CssRgba);
    }

    #[test]
    fn test_css_rgba_int_alpha() {
        let m = try_match_func("rgba(0, 0, 0, 200)", 0, true, true).unwrap();
        assert_eq!(m.color, Color::rgba(0, 0, 0, 200));
    }

    #[test]
    fn test_css_rgba_alpha_one_is_opaque() {
        let m = try_match_func("rgba(0, 0, 0, 1)", 0, true, true).unwrap();
        assert_eq!(m.color.a, 255);
    }

    #[test]
    fn test_css_rgba_alpha_zero() {
        let m = try_match_func("rgba(0, 0, 0, 0)", 0, true, true).unwrap();
        assert_eq!(m.color.a, 0);
    }

    #[test]
    fn test_case_insensitive_name() {
        assert!(try_match_func("RGB(1, 2, 3)", 0, true, true).is_some());
        assert!(try_match_func("Rgba(1, 2, 3, 0.5)", 0, true, true).is_some());
    }

    #[test]
    fn test_hsl() {
        let m = try_match_func("hsl(0, 100%, 50%)", 0, true, true).unwrap();
        assert_eq!(m.color, Color::rgb(255, 0, 0));
        assert_eq!(m.tag, NotationTag::Hsl);
    }

    #[test]
    fn test_hsl_sample_values() {
        // 'hsl(204, 70%, 53%)' from the fixture corpus
        let m = try_match_func("hsl(204, 70%, 53%)", 0, true, true).unwrap();
        assert_eq!(m.tag, NotationTag::Hsl);
        assert!(m.color.b > m.color.r); // a blue
    }

    #[test]
    fn test_hsla() {
        let m = try_match_func("hsla(0, 0%, 50%, 0.5)", 0, true, true).unwrap();
        assert_eq!(m.tag, NotationTag::Hsla);
        assert_eq!(m.color.a, 128);
        assert_eq!((m.color.r, m.color.g, m.color.b), (128, 128, 128));
    }

    #[test]
    fn test_percent_required() {
        assert!(try_match_func("hsl(204, 70, 53)", 0, true, true).is_none());
    }

    #[test]
    fn test_percent_out_of_range() {
        assert!(try_match_func("hsl(204, 170%, 53%)", 0, true, true).is_none());
    }

    #[test]
    fn test_channel_out_of_range() {
        assert!(try_match_func("rgb(300, 0, 0)", 0, true, true).is_none());
    }

    #[test]
    fn test_word_boundary() {
        assert!(try_match_func("foorgb(1, 2, 3)", 3, true, true).is_none());
    }

    #[test]
    fn test_space_before_paren_fails() {
        assert!(try_match_func("rgb (1, 2, 3)", 0, true, true).is_none());
    }

    #[test]
    fn test_toggles() {
        assert!(try_match_func("rgb(1, 2, 3)", 0, false, true).is_none());
        assert!(try_match_func("hsl(0, 0%, 0%)", 0, true, false).is_none());
    }

    #[test]
    fn test_unbalanced() {
        assert!(try_match_func("rgb(1, 2, 3", 0, true, true).is_none());
    }
}
