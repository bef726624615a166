//! Literal scanner - walks a snapshot and yields non-overlapping matches.
//!
//! The scanner tries recognizers at each candidate position left to
//! right. Once a recognizer claims a span, scanning resumes immediately
//! after it; on failure the position advances by one byte. Candidate
//! positions are pruned by leading byte before any recognizer runs, so
//! most of the buffer is skipped with a single byte compare.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use huescan_core::Span;

use crate::matches::{Match, MatchKind};
use crate::recognize::{self, ValueMatch};

/// Which notations a scan recognizes. All enabled by default; hosts can
/// switch individual notations off (e.g. palette lists in very large
/// buffers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub hex: bool,
    pub hex_literal: bool,
    pub rgb_tuple: bool,
    pub rgba_tuple: bool,
    pub css_func: bool,
    pub hsl_func: bool,
    pub named_map: bool,
    pub palette_list: bool,
    /// Cap on elements collected from a single palette list.
    pub max_palette_entries: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            hex: true,
            hex_literal: true,
            rgb_tuple: true,
            rgba_tuple: true,
            css_func: true,
            hsl_func: true,
            named_map: true,
            palette_list: true,
            max_palette_entries: 1024,
        }
    }
}

/// Lazy iterator over the matches in one snapshot, ascending by span
/// start. Restartable by constructing a new scanner over the same text.
pub struct Scanner<'a> {
    text: &'a str,
    opts: ScanOptions,
    pos: usize,
    line: usize,
    pending: VecDeque<Match>,
}

/// Scan a whole snapshot.
pub fn scan<'a>(text: &'a str, opts: &ScanOptions) -> Scanner<'a> {
    Scanner {
        text,
        opts: opts.clone(),
        pos: 0,
        line: 0,
        pending: VecDeque::new(),
    }
}

/// Cursor mode: the single match whose span contains `offset` (half-open
/// containment), or `None` when the cursor sits outside any literal.
pub fn match_at(text: &str, offset: usize, opts: &ScanOptions) -> Option<Match> {
    for m in scan(text, opts) {
        if m.span.contains(offset) {
            log::debug!("cursor literal at [{}, {})", m.span.start, m.span.end);
            return Some(m);
        }
        if m.span.start > offset {
            break;
        }
    }
    None
}

impl<'a> Scanner<'a> {
    /// Advance the cursor to `target`, keeping the line count in step.
    fn advance_to(&mut self, target: usize) {
        let skipped = &self.text.as_bytes()[self.pos..target];
        self.line += skipped.iter().filter(|&&b| b == b'\n').count();
        self.pos = target;
    }

    fn value_match(&self, vm: &ValueMatch, kind: MatchKind, key: Option<String>) -> Match {
        Match {
            span: Span::new(vm.start, vm.end, self.line),
            color: vm.color,
            notation: vm.tag,
            kind,
            key,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        if let Some(m) = self.pending.pop_front() {
            return Some(m);
        }

        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            match b {
                b'\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                b'#' if self.opts.hex => {
                    if let Some(vm) = recognize::hex::try_match_hex(self.text, self.pos) {
                        let m = self.value_match(&vm, MatchKind::Standalone, None);
                        self.advance_to(vm.end);
                        return Some(m);
                    }
                    self.pos += 1;
                }
                b'0' if self.opts.hex_literal => {
                    if let Some(vm) = recognize::hex::try_match_hex_literal(self.text, self.pos) {
                        let m = self.value_match(&vm, MatchKind::Standalone, None);
                        self.advance_to(vm.end);
                        return Some(m);
                    }
                    self.pos += 1;
                }
                b'(' if self.opts.rgb_tuple || self.opts.rgba_tuple => {
                    if let Some(vm) = recognize::tuple::try_match_tuple(
                        self.text,
                        self.pos,
                        self.opts.rgb_tuple,
                        self.opts.rgba_tuple,
                    ) {
                        let m = self.value_match(&vm, MatchKind::Standalone, None);
                        self.advance_to(vm.end);
                        return Some(m);
                    }
                    self.pos += 1;
                }
                b'[' if self.opts.palette_list => {
                    if let Some(p) =
                        recognize::palette::try_match_palette(self.text, self.pos, &self.opts)
                    {
                        for vm in &p.elements {
                            self.advance_to(vm.start);
                            let m = self.value_match(vm, MatchKind::PaletteEntry, None);
                            self.pending.push_back(m);
                        }
                        self.advance_to(p.end);
                        if let Some(m) = self.pending.pop_front() {
                            return Some(m);
                        }
                        // Empty list: skipped wholesale
                    } else {
                        self.pos += 1;
                    }
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                    if (self.opts.css_func || self.opts.hsl_func)
                        && matches!(b, b'r' | b'R' | b'h' | b'H')
                    {
                        if let Some(vm) = recognize::func::try_match_func(
                            self.text,
                            self.pos,
                            self.opts.css_func,
                            self.opts.hsl_func,
                        ) {
                            let m = self.value_match(&vm, MatchKind::Standalone, None);
                            self.advance_to(vm.end);
                            return Some(m);
                        }
                    }
                    if self.opts.named_map {
                        if let Some(nm) =
                            recognize::named::try_match_named(self.text, self.pos, &self.opts)
                        {
                            let m =
                                self.value_match(&nm.value, MatchKind::NamedEntry, Some(nm.key));
                            self.advance_to(nm.value.end);
                            return Some(m);
                        }
                    }
                    self.pos += 1;
                }
                b'"' | b'\'' if self.opts.named_map => {
                    if let Some(nm) =
                        recognize::named::try_match_named(self.text, self.pos, &self.opts)
                    {
                        let m = self.value_match(&nm.value, MatchKind::NamedEntry, Some(nm.key));
                        self.advance_to(nm.value.end);
                        return Some(m);
                    }
                    self.pos += 1;
                }
                _ => {
                    self.pos += 1;
                }
            }
        }
        None
    }
}
