//! Stat-based existence checks.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use tracing::debug;

/// Check if `path` exists and is not a directory.
///
/// Symlinks are followed. Any failure to stat the path, permission
/// problems included, counts as "does not exist".
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    stat(path.as_ref()).is_some_and(|m| !m.is_dir())
}

/// Check if `path` exists and is a directory.
///
/// Same lenient error handling as [`file_exists`].
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    stat(path.as_ref()).is_some_and(|m| m.is_dir())
}

fn stat(path: &Path) -> Option<Metadata> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "stat failed, treating as absent");
            None
        }
    }
}
