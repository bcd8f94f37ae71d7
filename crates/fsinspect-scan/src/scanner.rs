//! JWalk-based directory scanner.

use std::fs;
use std::path::Path;
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, info, trace};

use fsinspect_core::{EntryKind, FsError, ScanConfig, ScanEntry, ScanResult, ScanVisitor};

/// Scan `root` and collect every directory and regular file whose path
/// contains none of the `ignore` substrings.
pub fn scan_directory<S: AsRef<str>>(
    root: impl AsRef<Path>,
    ignore: &[S],
) -> Result<ScanResult, FsError> {
    let config = ScanConfig::with_ignore(
        root.as_ref(),
        ignore.iter().map(|s| s.as_ref().to_string()),
    );
    DirectoryScanner::new(config).scan()
}

/// Sequential directory scanner using jwalk for traversal.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    config: ScanConfig,
}

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configuration this scanner walks with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the tree and collect directories and files.
    ///
    /// Nothing is returned but the error if any entry fails.
    pub fn scan(&self) -> Result<ScanResult, FsError> {
        let start = Instant::now();
        let mut result = ScanResult::new();

        self.walk(&mut result)?;

        info!(
            root = %self.config.root.display(),
            directories = result.directories.len(),
            files = result.files.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        Ok(result)
    }

    /// Walk the tree, handing every visited entry to `visitor`.
    ///
    /// The root is visited first. Children are visited in file name order
    /// when [`ScanConfig::sort`] is set, each directory's subtree right after
    /// the directory itself.
    pub fn walk<V: ScanVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), FsError> {
        let root = self.config.root.as_path();

        // A missing or unreadable root is an error, not an empty scan
        let root_metadata = fs::symlink_metadata(root).map_err(|e| FsError::io(root, e))?;

        if self.config.prune_ignored && self.config.should_ignore(root) {
            debug!(root = %root.display(), "root matches ignore list, pruning whole tree");
            let kind = EntryKind::from_file_type(root_metadata.file_type());
            visitor.visit(&ScanEntry::new(root, kind, true));
            return Ok(());
        }

        let mut walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(self.config.sort)
            .min_depth(0);

        if self.config.prune_ignored {
            let config = self.config.clone();
            walker = walker.process_read_dir(move |_depth, _path, _state, children| {
                for child in children.iter_mut().flatten() {
                    if child.file_type().is_dir() && config.should_ignore(&child.path()) {
                        child.read_children_path = None;
                    }
                }
            });
        }

        for entry_result in walker {
            let mut entry = entry_result.map_err(|err| walk_error(err, root))?;

            // jwalk reports an unreadable directory on its own entry, not as an Err item
            if let Some(err) = entry.read_children_error.take() {
                return Err(walk_error(err, root));
            }

            let path = entry.path();
            let kind = EntryKind::from_file_type(entry.file_type());
            let ignored = self.config.should_ignore(&path);

            trace!(path = %path.display(), ?kind, ignored, "visit");
            visitor.visit(&ScanEntry::new(path, kind, ignored));
        }

        Ok(())
    }
}

/// Convert a jwalk error into an [`FsError`], keeping the I/O source.
fn walk_error(err: jwalk::Error, root: &Path) -> FsError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();

    match err.into_io_error() {
        Some(source) => FsError::io(path, source),
        None => FsError::walk(path, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        // Create directory structure
        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        // Create files
        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world world world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();
        fs::write(root.join("dir2/file4.txt"), "another file here").unwrap();
        fs::write(root.join(".hidden"), "dot").unwrap();

        temp
    }

    #[test]
    fn test_basic_scan() {
        let temp = create_test_tree();
        let scanner = DirectoryScanner::new(ScanConfig::new(temp.path()));
        let result = scanner.scan().unwrap();

        // root, dir1, dir1/subdir, dir2
        assert_eq!(result.directories.len(), 4);
        // Hidden files are regular files too
        assert_eq!(result.files.len(), 5);
        assert_eq!(result.directories[0], temp.path());
    }

    #[test]
    fn test_sorted_pre_order() {
        let temp = create_test_tree();
        let root = temp.path();
        let result = DirectoryScanner::new(ScanConfig::new(root)).scan().unwrap();

        let expected_dirs: Vec<PathBuf> = vec![
            root.to_path_buf(),
            root.join("dir1"),
            root.join("dir1/subdir"),
            root.join("dir2"),
        ];
        assert_eq!(result.directories, expected_dirs);

        let expected_files: Vec<PathBuf> = vec![
            root.join(".hidden"),
            root.join("dir1/file2.txt"),
            root.join("dir1/subdir/file3.txt"),
            root.join("dir2/file4.txt"),
            root.join("file1.txt"),
        ];
        assert_eq!(result.files, expected_files);
    }

    #[test]
    fn test_ignore_descends_by_default() {
        let temp = create_test_tree();
        let root = temp.path();
        let config = ScanConfig::with_ignore(root, ["dir1"]);

        let mut visited = Vec::new();
        DirectoryScanner::new(config)
            .walk(&mut |entry: &ScanEntry| visited.push(entry.clone()))
            .unwrap();

        // The ignored directory's children are still visited, flagged as ignored
        let file3 = visited
            .iter()
            .find(|e| e.path == root.join("dir1/subdir/file3.txt"))
            .expect("descended into ignored directory");
        assert!(file3.ignored);
        assert!(visited.iter().any(|e| e.path == root.join("dir2") && !e.ignored));
    }

    #[test]
    fn test_prune_skips_ignored_subtree() {
        let temp = create_test_tree();
        let root = temp.path();
        let config = ScanConfig::builder()
            .root(root)
            .ignore_patterns(vec!["dir1".to_string()])
            .prune_ignored(true)
            .build()
            .unwrap();

        let mut visited = Vec::new();
        DirectoryScanner::new(config)
            .walk(&mut |entry: &ScanEntry| visited.push(entry.path.clone()))
            .unwrap();

        assert!(visited.contains(&root.join("dir1")));
        assert!(!visited.contains(&root.join("dir1/subdir")));
        assert!(!visited.contains(&root.join("dir1/file2.txt")));
    }

    #[test]
    fn test_prune_does_not_change_result() {
        let temp = create_test_tree();
        let root = temp.path();

        let plain = DirectoryScanner::new(ScanConfig::with_ignore(root, ["dir1"]))
            .scan()
            .unwrap();

        let mut config = ScanConfig::with_ignore(root, ["dir1"]);
        config.prune_ignored = true;
        let pruned = DirectoryScanner::new(config).scan().unwrap();

        assert_eq!(plain, pruned);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = DirectoryScanner::new(ScanConfig::new(&missing))
            .scan()
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), missing.as_path());
    }
}
