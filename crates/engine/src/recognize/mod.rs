//! Format recognizers - one per notation, each a pure function over the
//! snapshot text.
//!
//! Every recognizer either claims an exact byte range starting at the
//! probed position or declines; malformed and out-of-range literals are
//! declined, never clamped, never an error. The scanner owns the priority
//! order and position advancement.

pub mod func;
pub mod hex;
pub mod named;
pub mod palette;
pub mod tuple;

use huescan_core::NotationTag;

use crate::color::Color;
use crate::scan::ScanOptions;

/// A recognized value literal: the exact byte range consumed, the color
/// it denotes, and the notation it was written in. Line assignment and
/// match-kind context are layered on by the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMatch {
    pub start: usize,
    pub end: usize,
    pub color: Color,
    pub tag: NotationTag,
}

/// Try the value notations at `pos` in priority order: hex, hex literal,
/// tuple, CSS/HSL function. Named pairs and palette lists are structural
/// recognizers layered above these and are dispatched by the scanner.
pub fn try_value(text: &str, pos: usize, opts: &ScanOptions) -> Option<ValueMatch> {
    if opts.hex {
        if let Some(vm) = hex::try_match_hex(text, pos) {
            return Some(vm);
        }
    }
    if opts.hex_literal {
        if let Some(vm) = hex::try_match_hex_literal(text, pos) {
            return Some(vm);
        }
    }
    if opts.rgb_tuple || opts.rgba_tuple {
        if let Some(vm) = tuple::try_match_tuple(text, pos, opts.rgb_tuple, opts.rgba_tuple) {
            return Some(vm);
        }
    }
    if opts.css_func || opts.hsl_func {
        if let Some(vm) = func::try_match_func(text, pos, opts.css_func, opts.hsl_func) {
            return Some(vm);
        }
    }
    None
}

/// A value literal wrapped in single or double quotes at `pos`. The
/// returned span excludes the quotes; the closing quote must directly
/// follow the literal.
pub(crate) fn quoted_value(text: &str, pos: usize, opts: &ScanOptions) -> Option<ValueMatch> {
    let bytes = text.as_bytes();
    let quote = *bytes.get(pos)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let vm = try_value(text, pos + 1, opts)?;
    if bytes.get(vm.end) != Some(&quote) {
        return None;
    }
    Some(vm)
}
