pub mod error;
pub mod notation;
pub mod snapshot;
pub mod span;

pub use error::EditError;
pub use notation::NotationTag;
pub use snapshot::Fingerprint;
pub use span::Span;
