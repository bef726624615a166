//! `huescan-engine` — color literal recognition and normalization.
//!
//! Pure engine crate: receives text snapshots, returns matches and edit
//! batches. No IO, no editor dependencies.

pub mod color;
pub mod edit;
pub mod format;
pub mod matches;
pub mod recognize;
pub mod scan;

pub use color::Color;
pub use edit::{compute_edit, Edit, EditBatch};
pub use format::{render, render_color, AlphaPolicy, FormatSpec, HexCase};
pub use matches::{Match, MatchKind};
pub use scan::{match_at, scan, ScanOptions, Scanner};

pub use huescan_core::{EditError, Fingerprint, NotationTag, Span};
