//! Scan configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for scanning operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// Substrings to ignore. A path containing any of them is excluded.
    #[builder(default)]
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Skip the subtree of an ignored directory instead of descending into it.
    ///
    /// The output is the same either way, since every descendant path
    /// contains the ignored directory's path. Pruning only avoids the work,
    /// and any access errors, inside the ignored subtree.
    #[builder(default = "false")]
    #[serde(default)]
    pub prune_ignored: bool,

    /// Visit directory children in file name order.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub sort: bool,
}

fn default_true() -> bool {
    true
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_patterns: Vec::new(),
            prune_ignored: false,
            sort: true,
        }
    }

    /// Create a config for scanning a path with an ignore list.
    pub fn with_ignore<I, S>(root: impl Into<PathBuf>, ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore_patterns: ignore.into_iter().map(Into::into).collect(),
            ..Self::new(root)
        }
    }

    /// Check if a path contains any ignore substring.
    ///
    /// Matching is plain containment against the whole path string; it is
    /// neither anchored nor aware of path segments.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.ignore_patterns
            .iter()
            .any(|pattern| path.contains(pattern.as_str()))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
