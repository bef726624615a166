//! Named key-value recognizer: `key = value`, `"key": value`.
//!
//! The key is carried on the match as display/rename context; the span
//! covers only the value text, so replacement never touches the key or
//! the host language's quoting.

use crate::recognize::{self, ValueMatch};
use crate::scan::ScanOptions;

pub struct NamedMatch {
    pub value: ValueMatch,
    pub key: String,
}

/// Match a `key = value` / `key: value` pair whose value is a recognized
/// color literal (optionally quoted), starting at the key.
pub fn try_match_named(text: &str, pos: usize, opts: &ScanOptions) -> Option<NamedMatch> {
    let bytes = text.as_bytes();

    let (key, after_key) = parse_key(text, pos)?;

    let mut cursor = after_key;
    skip_inline_ws(bytes, &mut cursor);

    // Separator: '=' (assignment) or ':' (mapping). '==' is a comparison.
    match bytes.get(cursor) {
        Some(&b'=') => {
            if bytes.get(cursor + 1) == Some(&b'=') {
                return None;
            }
            cursor += 1;
        }
        Some(&b':') => cursor += 1,
        _ => return None,
    }
    skip_inline_ws(bytes, &mut cursor);

    let value = match bytes.get(cursor) {
        Some(&b'"') | Some(&b'\'') => recognize::quoted_value(text, cursor, opts)?,
        _ => recognize::try_value(text, cursor, opts)?,
    };

    Some(NamedMatch { value, key })
}

/// Parse a bare identifier or a single/double-quoted key at `pos`.
/// Returns the key text (quotes stripped) and the offset past it.
fn parse_key(text: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();

    match *bytes.get(pos)? {
        b'"' | b'\'' => {
            let quote = bytes[pos];
            let mut end = pos + 1;
            while end < bytes.len() {
                match bytes[end] {
                    b if b == quote => {
                        if end == pos + 1 {
                            return None; // empty key
                        }
                        return Some((text[pos + 1..end].to_string(), end + 1));
                    }
                    b'\n' => return None,
                    _ => end += 1,
                }
            }
            None
        }
        b if b.is_ascii_alphabetic() || b == b'_' => {
            // Word boundary: don't start a key mid-identifier
            if pos > 0 {
                let prev = bytes[pos - 1];
                if prev.is_ascii_alphanumeric() || prev == b'_' {
                    return None;
                }
            }
            let mut end = pos + 1;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            Some((text[pos..end].to_string(), end))
        }
        _ => None,
    }
}

fn skip_inline_ws(bytes: &[u8], cursor: &mut usize) {
    while matches!(bytes.get(*cursor), Some(&b' ') | Some(&b'\t')) {
        *cursor += 1;
    }
}
