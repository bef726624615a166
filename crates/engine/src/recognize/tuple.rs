//! Parenthesized integer tuple recognizer: `(r, g, b)` and `(r, g, b, a)`.

use huescan_core::NotationTag;

use crate::color::Color;
use crate::recognize::ValueMatch;

/// Match a parenthesized sequence of exactly 3 or 4 comma-separated
/// integers in [0, 255] starting at `pos`.
///
/// Whitespace (including newlines, for tuples wrapped by a formatter) is
/// allowed around components. Signs, decimals and out-of-range values
/// fail the recognizer - components are never clamped.
pub fn try_match_tuple(
    text: &str,
    pos: usize,
    allow_rgb: bool,
    allow_rgba: bool,
) -> Option<ValueMatch> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'(') {
        return None;
    }

    let mut cursor = pos + 1;
    let mut components: Vec<u8> = Vec::with_capacity(4);

    loop {
        skip_ws(bytes, &mut cursor);
        let value = parse_channel(bytes, &mut cursor)?;
        components.push(value);
        skip_ws(bytes, &mut cursor);

        match bytes.get(cursor) {
            Some(&b',') => {
                if components.len() == 4 {
                    return None; // five components is not a color
                }
                cursor += 1;
            }
            Some(&b')') => {
                cursor += 1;
                break;
            }
            _ => return None,
        }
    }

    let (color, tag) = match components.as_slice() {
        [r, g, b] if allow_rgb => (Color::rgb(*r, *g, *b), NotationTag::RgbTuple),
        [r, g, b, a] if allow_rgba => (Color::rgba(*r, *g, *b, *a), NotationTag::RgbaTuple),
        _ => return None,
    };

    Some(ValueMatch {
        start: pos,
        end: cursor,
        color,
        tag,
    })
}

fn skip_ws(bytes: &[u8], cursor: &mut usize) {
    while matches!(bytes.get(*cursor), Some(&b' ') | Some(&b'\t') | Some(&b'\n') | Some(&b'\r')) {
        *cursor += 1;
    }
}

/// Parse a base-10 channel value. At most three digits; u8 parsing
/// rejects anything above 255.
fn parse_channel(bytes: &[u8], cursor: &mut usize) -> Option<u8> {
    let start = *cursor;
    while *cursor < bytes.len() && bytes[*cursor].is_ascii_digit() {
        *cursor += 1;
    }
    let run = &bytes[start..*cursor];
    if run.is_empty() || run.len() > 3 {
        return None;
    }
    // A decimal point means a float tuple - not a recognized notation
    if bytes.get(*cursor) == Some(&b'.') {
        return None;
    }
    std::str::from_utf8(run).ok()?.parse::<u8>().ok()
}
