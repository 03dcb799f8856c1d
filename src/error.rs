//! Error types for hosts file loading and editing.

use std::fmt;

/// Result type for hostsedit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, editing or saving a hosts file.
///
/// A host with no binding is never an error: lookups return `None` and
/// deleting an absent host succeeds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hosts file could not be read or written.
    #[error("hosts file unavailable ({location}): {source}")]
    StorageUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Strict load found a line the tolerant parser would have accepted.
    #[error("strict hosts file rejected: {0}")]
    MalformedStrictDocument(Violation),

    #[error("invalid IP literal: {0:?}")]
    InvalidIp(String),

    #[error("invalid hostname: {0:?}")]
    InvalidHost(String),
}

impl Error {
    pub fn storage(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            location: location.into(),
            source,
        }
    }
}

/// A single strict-mode finding. `entry` is the 1-based position of the
/// offending line in the document (blank rows are not counted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateHost { host: String, entry: usize },
    Unparsed { text: String, entry: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateHost { host, entry } => {
                write!(f, "host {host:?} bound again at entry {entry}")
            }
            Violation::Unparsed { text, entry } => {
                write!(f, "entry {entry} is not an IP mapping: {text:?}")
            }
        }
    }
}
