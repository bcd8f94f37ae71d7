//! Scan results and per-entry classification.

use std::fs::FileType;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Classification of a visited entry, taken from its own file type.
///
/// Symbolic links are not followed, so a link is always [`EntryKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Directory.
    Directory,
    /// Regular file.
    File,
    /// Symlinks, sockets, fifos, devices.
    Other,
}

impl EntryKind {
    /// Classify a file type.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }
}

/// A single entry handed to a scan visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Full path as produced by the walk.
    pub path: PathBuf,
    /// Entry classification.
    pub kind: EntryKind,
    /// Whether the path matched an ignore pattern.
    pub ignored: bool,
}

impl ScanEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, ignored: bool) -> Self {
        Self {
            path: path.into(),
            kind,
            ignored,
        }
    }
}

/// Receives every entry a walk visits, exactly once, in walk order.
///
/// Ignored entries are still handed over with [`ScanEntry::ignored`] set;
/// what to do with them is up to the visitor. Closures taking a
/// `&ScanEntry` are visitors too.
pub trait ScanVisitor {
    /// Called once per visited entry.
    fn visit(&mut self, entry: &ScanEntry);
}

impl<F> ScanVisitor for F
where
    F: FnMut(&ScanEntry),
{
    fn visit(&mut self, entry: &ScanEntry) {
        self(entry)
    }
}

/// Directories and files found by a scan, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Directories, the root first unless it was ignored.
    pub directories: Vec<PathBuf>,
    /// Regular files.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry. Ignored entries and entries that are neither
    /// directories nor regular files are dropped.
    pub fn record(&mut self, entry: &ScanEntry) {
        if entry.ignored {
            return;
        }
        match entry.kind {
            EntryKind::Directory => self.directories.push(entry.path.clone()),
            EntryKind::File => self.files.push(entry.path.clone()),
            EntryKind::Other => {}
        }
    }

    /// Check if a path was recorded as a directory.
    pub fn contains_dir(&self, path: &Path) -> bool {
        self.directories.iter().any(|d| d == path)
    }

    /// Check if a path was recorded as a file.
    pub fn contains_file(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }

    /// Total number of recorded entries.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

impl ScanVisitor for ScanResult {
    fn visit(&mut self, entry: &ScanEntry) {
        self.record(entry);
    }
}
