//! Error type for filesystem operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by scanning, hashing and lifecycle operations.
///
/// Every variant keeps the path it failed on. Variants backed by an I/O
/// failure keep the original [`io::Error`] as their source.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("Path not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied for a path.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory walk failed without an underlying I/O error.
    #[error("Walk error at {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

impl FsError {
    /// Create an I/O error with path context, classified by error kind.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Create a walk error that has no I/O source.
    pub fn walk(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Walk {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }

    /// The kind of the wrapped I/O error, if there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::NotFound { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::Io { source, .. } => Some(source.kind()),
            Self::Walk { .. } => None,
        }
    }

    /// Check if this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
