//! Directory tree scanning for fsinspect.
//!
//! This crate walks a directory tree with jwalk and sorts what it finds
//! into directories and regular files.
//!
//! # Overview
//!
//! - **Full walk** from the root, which is itself visited and classified
//! - **Substring ignore list**: any path containing an ignore pattern is
//!   left out of the result
//! - **Strict errors**: the first entry that cannot be read aborts the scan
//! - **Visitor access** to every entry, ignored ones included
//!
//! # Example
//!
//! ```rust,no_run
//! use fsinspect_scan::scan_directory;
//!
//! let result = scan_directory("/path/to/scan", &["target", ".git"]).unwrap();
//!
//! println!("{} directories", result.directories.len());
//! println!("{} files", result.files.len());
//! ```
//!
//! # Visiting entries
//!
//! ```rust,no_run
//! use fsinspect_scan::{DirectoryScanner, ScanConfig, ScanEntry};
//!
//! let scanner = DirectoryScanner::new(ScanConfig::with_ignore("/path", ["target"]));
//! let mut ignored = 0;
//! scanner
//!     .walk(&mut |entry: &ScanEntry| {
//!         if entry.ignored {
//!             ignored += 1;
//!         }
//!     })
//!     .unwrap();
//! ```

mod scanner;

pub use scanner::{scan_directory, DirectoryScanner};

// Re-export core types for convenience
pub use fsinspect_core::{EntryKind, FsError, ScanConfig, ScanEntry, ScanResult, ScanVisitor};
