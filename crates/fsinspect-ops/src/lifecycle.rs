//! Idempotent directory creation and file/directory removal.

use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use fsinspect_core::FsError;

use crate::predicates::{directory_exists, file_exists};

/// Permission bits for directories created by [`ensure_directory_exists`].
pub const DIRECTORY_MODE: u32 = 0o755;

/// Make sure `path` exists, creating it and any missing ancestors.
///
/// Nothing is created if the path already exists. An existing file is
/// accepted as well: the path is not checked to be a directory, only
/// flagged with a warning.
pub fn ensure_directory_exists(path: impl AsRef<Path>) -> Result<(), FsError> {
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                warn!(path = %path.display(), "path exists but is not a directory");
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            create_dir_all(path).map_err(|e| FsError::io(path, e))?;
            debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(e) => Err(FsError::io(path, e)),
    }
}

fn create_dir_all(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }

    builder.create(path)
}

/// Remove `path` if it is an existing file. Missing paths and directories
/// are left alone.
pub fn remove_file_if_exists(path: impl AsRef<Path>) -> Result<(), FsError> {
    let path = path.as_ref();

    if !file_exists(path) {
        return Ok(());
    }

    fs::remove_file(path).map_err(|e| FsError::io(path, e))?;
    debug!(path = %path.display(), "removed file");
    Ok(())
}

/// Remove the directory at `path` and everything below it, if it exists.
///
/// The direct children are listed first, then each is removed, recursing
/// into subdirectories. Symlinks are unlinked, never followed. The first
/// failure is returned as is and entries removed before it stay removed.
pub fn remove_directory_if_exists(path: impl AsRef<Path>) -> Result<(), FsError> {
    let path = path.as_ref();

    if !directory_exists(path) {
        return Ok(());
    }

    let removed = remove_contents(path)?;

    // A symlink to a directory: its target was emptied, now drop the link
    let link_type = fs::symlink_metadata(path)
        .map_err(|e| FsError::io(path, e))?
        .file_type();
    if link_type.is_symlink() {
        remove_link(path, link_type).map_err(|e| FsError::io(path, e))?;
    } else {
        fs::remove_dir(path).map_err(|e| FsError::io(path, e))?;
    }

    info!(path = %path.display(), entries = removed, "removed directory");
    Ok(())
}

/// Remove everything inside `dir`, returning how many entries were removed.
fn remove_contents(dir: &Path) -> Result<usize, FsError> {
    let children = list_children(dir)?;
    let mut removed = 0;

    for (child, file_type) in children {
        if file_type.is_dir() {
            removed += remove_contents(&child)?;
            fs::remove_dir(&child).map_err(|e| FsError::io(&child, e))?;
        } else {
            remove_link(&child, file_type).map_err(|e| FsError::io(&child, e))?;
        }
        removed += 1;
    }

    Ok(removed)
}

/// Direct children of `dir` with their own (unfollowed) file types.
fn list_children(dir: &Path) -> Result<Vec<(PathBuf, FileType)>, FsError> {
    let entries = fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;

    entries
        .map(|entry| -> Result<(PathBuf, FileType), FsError> {
            let entry = entry.map_err(|e| FsError::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| FsError::io(&path, e))?;
            Ok((path, file_type))
        })
        .collect()
}

/// Unlink a non-directory entry.
fn remove_link(path: &Path, file_type: FileType) -> io::Result<()> {
    match fs::remove_file(path) {
        // Directory symlinks on Windows are removed as directories
        Err(e) if cfg!(windows) && file_type.is_symlink() => fs::remove_dir(path).or(Err(e)),
        other => other,
    }
}
