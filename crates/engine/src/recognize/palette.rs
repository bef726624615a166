//! Palette list recognizer: color literals inside a bracketed list.
//!
//! `["#1f77b4", "#ff7f0e"]` yields one match per element, each with its
//! own span, never one match for the whole list. Non-literal content
//! between elements (commas, whitespace, comments) is skipped.

use crate::recognize::{self, ValueMatch};
use crate::scan::ScanOptions;

/// Scan window cap for one list. An unterminated bracket fails fast
/// instead of walking the rest of the buffer.
const MAX_PALETTE_SPAN: usize = 64 * 1024;

pub struct PaletteMatches {
    /// Offset one past the closing bracket (where the scanner resumes),
    /// or the first uncollected element when the entry cap was hit.
    pub end: usize,
    pub elements: Vec<ValueMatch>,
}

/// Match a `[...]` list starting at `pos`, collecting every color literal
/// element. Nested brackets are tracked so an inner list doesn't
/// terminate the outer one. Returns `None` for an unterminated or
/// oversized list - the plain recognizers then claim elements
/// individually at later positions.
pub fn try_match_palette(text: &str, pos: usize, opts: &ScanOptions) -> Option<PaletteMatches> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'[') {
        return None;
    }

    let mut elements = Vec::new();
    let mut depth = 1usize;
    let mut cursor = pos + 1;

    while cursor < bytes.len() {
        if cursor - pos > MAX_PALETTE_SPAN {
            return None;
        }
        match bytes[cursor] {
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(PaletteMatches {
                        end: cursor + 1,
                        elements,
                    });
                }
                cursor += 1;
            }
            b'[' => {
                depth += 1;
                cursor += 1;
            }
            b'"' | b'\'' => {
                if let Some(vm) = recognize::quoted_value(text, cursor, opts) {
                    if elements.len() == opts.max_palette_entries {
                        // Resume at the uncollected element so the plain
                        // recognizers still find it
                        return Some(PaletteMatches { end: vm.start, elements });
                    }
                    // vm.end is inside the quotes; step past the closer
                    cursor = vm.end + 1;
                    elements.push(vm);
                } else {
                    // Skip the whole string so its contents can't match
                    cursor = skip_string(bytes, cursor);
                }
            }
            _ => {
                if let Some(vm) = recognize::try_value(text, cursor, opts) {
                    if elements.len() == opts.max_palette_entries {
                        return Some(PaletteMatches { end: vm.start, elements });
                    }
                    cursor = vm.end;
                    elements.push(vm);
                } else {
                    cursor += 1;
                }
            }
        }
    }

    None // unterminated
}

/// Advance past a quoted string (or just the quote, if unterminated on
/// this line).
fn skip_string(bytes: &[u8], pos: usize) -> usize {
    let quote = bytes[pos];
    let mut cursor = pos + 1;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b if b == quote => return cursor + 1,
            b'\n' => return cursor,
            _ => cursor += 1,
        }
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use huescan_core::NotationTag;

    fn opts() -> ScanOptions {
        ScanOptions::default()
    }

    #[test]
    fn test_two_quoted_hex_elements() {
        let text = "[\"#1f77b4\", \"#ff7f0e\"]";
        let p = try_match_palette(text, 0, &opts()).unwrap();
        assert_eq!(p.elements.len(), 2);
        assert_eq!(&text[p.elements[0].start..p.elements[0].end], "#1f77b4");
        assert_eq!(&text[p.elements[1].start..p.elements[1].end], "#ff7f0e");
        assert_eq!(p.end, text.len());
    }

    #[test]
    fn test_tuple_elements() {
        let text = "[(102, 126, 234), (118, 75, 162)]";
        let p = try_match_palette(text, 0, &opts()).unwrap();
        assert_eq!(p.elements.len(), 2);
        assert_eq!(p.elements[0].tag, NotationTag::RgbTuple);
        assert_eq!(p.elements[0].color, Color::rgb(102, 126, 234));
    }

    #[test]
    fn test_multiline_with_comments() {
        let text = "[\n    \"#1f77b4\",  # Blue\n    \"#ff7f0e\",  # Orange\n]";
        let p = try_match_palette(text, 0, &opts()).unwrap();
        assert_eq!(p.elements.len(), 2);
    }

    #[test]
    fn test_nested_list() {
        let text = "[[\"#ff0000\"], [\"#00ff00\"]]";
        let p = try_match_palette(text, 0, &opts()).unwrap();
        assert_eq!(p.elements.len(), 2);
        assert_eq!(p.end, text.len());
    }

    #[test]
    fn test_non_color_strings_skipped() {
        let text = "[\"alpha\", \"#ff0000\", \"omega\"]";
        let p = try_match_palette(text, 0, &opts()).unwrap();
        assert_eq!(p.elements.len(), 1);
        assert_eq!(p.elements[0].color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_empty_list() {
        let p = try_match_palette("[]", 0, &opts()).unwrap();
        assert!(p.elements.is_empty());
        assert_eq!(p.end, 2);
    }

    #[test]
    fn test_unterminated_fails() {
        assert!(try_match_palette("[\"#ff0000\", \"#00ff00\"", 0, &opts()).is_none());
    }

    #[test]
    fn test_entry_cap() {
        let mut opts = opts();
        opts.max_palette_entries = 2;
        let text = "[\"#ff0000\", \"#00ff00\", \"#0000ff\"]";
        let p = try_match_palette(text, 0, &opts).unwrap();
        assert_eq!(p.elements.len(), 2);
        // Resumes at the uncollected element rather than past the bracket
        assert_eq!(p.end, text.find("#0000ff").unwrap());
    }
}
