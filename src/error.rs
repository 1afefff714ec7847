use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Any failure that stops a download run.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("unreadable response body from {url}: {reason}")]
    InvalidBody { url: String, reason: String },

    #[error("directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
