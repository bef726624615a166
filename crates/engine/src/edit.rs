//! Replacement engine - turns matches into exact text edits.
//!
//! An edit replaces one span with a rendered string and leaves every
//! other byte untouched. Batch application happens right-to-left so
//! earlier edits never shift the offsets of later ones, and is bound to
//! the snapshot fingerprint captured at scan time - a buffer that changed
//! in between is rejected, never patched at wrong offsets.

use serde::{Deserialize, Serialize};

use huescan_core::{EditError, Fingerprint, Span};

use crate::matches::Match;

/// One text edit: replace the bytes of `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edit {
    pub span: Span,
    pub replacement: String,
}

/// Compute the edit that rewrites a match as `rendered`.
///
/// The match's span already covers only the value text (keys, quotes and
/// brackets excluded), so the surrounding syntax survives by
/// construction.
pub fn compute_edit(m: &Match, rendered: String) -> Edit {
    Edit {
        span: m.span,
        replacement: rendered,
    }
}

/// A set of edits computed from a single consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditBatch {
    fingerprint: Fingerprint,
    edits: Vec<Edit>,
}

impl EditBatch {
    /// Start a batch against the snapshot the edits will be computed
    /// from.
    pub fn new(snapshot: &str) -> Self {
        EditBatch {
            fingerprint: Fingerprint::of(snapshot),
            edits: Vec::new(),
        }
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply the whole batch to `text`, returning the rewritten string.
    ///
    /// Fails with `StaleSnapshot` if `text` is not byte-identical to the
    /// snapshot the batch was computed from, and with `InvalidSpan` /
    /// `OverlappingEdits` on caller-supplied invariant violations.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        if Fingerprint::of(text) != self.fingerprint {
            log::warn!("edit batch rejected: snapshot changed since scan");
            return Err(EditError::StaleSnapshot);
        }

        for edit in &self.edits {
            let Span { start, end, .. } = edit.span;
            if start >= end
                || end > text.len()
                || !text.is_char_boundary(start)
                || !text.is_char_boundary(end)
            {
                return Err(EditError::InvalidSpan { start, end });
            }
        }

        // Right-to-left: earlier offsets stay valid as later spans shrink
        // or grow.
        let mut ordered: Vec<&Edit> = self.edits.iter().collect();
        ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));

        for pair in ordered.windows(2) {
            // Descending order: pair[1] starts at or before pair[0]
            if pair[1].span.overlaps(&pair[0].span) {
                return Err(EditError::OverlappingEdits {
                    first: pair[1].span.start,
                    second: pair[0].span.start,
                });
            }
        }

        let mut result = text.to_string();
        for edit in &ordered {
            result.replace_range(edit.span.start..edit.span.end, &edit.replacement);
        }
        log::debug!("applied {} edit(s)", ordered.len());
        Ok(result)
    }
}
