//! Error types for ebifly-fs

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Filesystem failures in the plugin data directory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another writer holds the lock on the target file
    #[error("Could not lock {path} for writing")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying I/O error is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
