use std::fmt;

/// Errors from edit-batch validation and application.
///
/// Malformed color literals are never errors - recognizers simply decline
/// to match. These variants cover caller-supplied invariant violations and
/// the one legitimate runtime failure (a buffer that changed between scan
/// and apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Span end <= start, span past end of buffer, or span splits a UTF-8
    /// character. Indicates a host bug.
    InvalidSpan { start: usize, end: usize },
    /// Two edits in one batch touch the same bytes.
    OverlappingEdits { first: usize, second: usize },
    /// The buffer content no longer matches the snapshot the batch was
    /// computed from. The host must re-scan.
    StaleSnapshot,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan { start, end } => {
                write!(f, "invalid span [{start}, {end})")
            }
            Self::OverlappingEdits { first, second } => {
                write!(f, "overlapping edits at offsets {first} and {second}")
            }
            Self::StaleSnapshot => {
                write!(f, "snapshot changed since scan; re-scan before applying edits")
            }
        }
    }
}

impl std::error::Error for EditError {}
