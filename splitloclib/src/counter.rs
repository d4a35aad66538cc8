//! High-level counting API.
//!
//! Ties the pipeline together: load the ignore file found in the root, add
//! the housekeeping patterns, and walk the tree.

use std::path::{Path, PathBuf};

use crate::data::stats::CountResult;
use crate::source::ignore::ignore_patterns;
use crate::source::matcher::IgnoreMatcher;
use crate::source::walker::walk;
use crate::Result;

/// Name of the ignore file read from the root by default.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Options for counting a tree.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Directory to scan
    pub root: PathBuf,
    /// Ignore file, relative to `root`
    pub ignore_file: PathBuf,
    /// Patterns applied after the ignore file and the defaults
    pub extra_patterns: Vec<String>,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            extra_patterns: Vec::new(),
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory to scan.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the ignore file, resolved against the root.
    pub fn ignore_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_file = path.into();
        self
    }

    /// Add one extra ignore pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.extra_patterns.push(pattern.into());
        self
    }

    /// Add several extra ignore patterns.
    pub fn exclude_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.extra_patterns
            .extend(patterns.iter().map(|p| p.as_ref().to_string()));
        self
    }

    /// Build the matcher these options describe.
    pub fn matcher(&self) -> IgnoreMatcher {
        let mut matcher = IgnoreMatcher::from_patterns(&ignore_patterns(
            self.root.join(&self.ignore_file),
        ));
        for pattern in &self.extra_patterns {
            matcher.add(pattern);
        }
        matcher
    }
}

/// Count every text file under the configured root.
///
/// # Example
///
/// ```rust,ignore
/// use splitloclib::{count_tree, CountOptions};
///
/// let result = count_tree(&CountOptions::new().root("my-project"))?;
/// println!("{} client files", result.client.len());
/// ```
pub fn count_tree(options: &CountOptions) -> Result<CountResult> {
    let root: &Path = &options.root;
    let matcher = options.matcher();
    log::debug!(
        "scanning {} with {} ignore patterns",
        root.display(),
        matcher.patterns().len()
    );

    walk(root, &matcher)
}
