//! Snapshot fingerprints for stale-edit detection.
//!
//! Scanning and edit application are separate calls, so the host buffer
//! can change in between. An edit batch captures the fingerprint of the
//! snapshot it was computed from; applying against different content is
//! rejected rather than producing edits at wrong offsets.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-addressed snapshot identity: `"sha256:<64 hex>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint the full content of a snapshot.
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let result = hasher.finalize();
        Fingerprint(format!("sha256:{:x}", result))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_content_same_fingerprint() {
        assert_eq!(Fingerprint::of("abc"), Fingerprint::of("abc"));
    }

    #[test]
    fn test_different_content_different_fingerprint() {
        assert_ne!(Fingerprint::of("abc"), Fingerprint::of("abd"));
    }

    #[test]
    fn test_format() {
        let fp = Fingerprint::of("");
        // SHA-256 of empty input
        assert_eq!(
            fp.as_str(),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
