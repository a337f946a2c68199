use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Categorized failures surfaced by the stores and sanitizers.
///
/// Each variant maps to exactly one HTTP status at the web boundary.
/// The core never retries or falls back on its own.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("invalid page name: {reason}")]
    InvalidName { reason: String },

    #[error("no YouTube video found in {0:?}")]
    InvalidLink(String),

    #[error("unknown vote action {0:?}, expected \"upvote\" or \"downvote\"")]
    InvalidAction(String),

    #[error("no page found for slug {0:?}")]
    NotFound(String),

    #[error("storage failure on {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WikiError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WikiError>;
