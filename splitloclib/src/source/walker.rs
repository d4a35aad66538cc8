//! Directory traversal.
//!
//! Walks a tree with `walkdir`, pruning ignored directories before they are
//! entered, and records every non-empty text file under its category.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::data::category::classify;
use crate::data::lines::count_lines_lossy;
use crate::data::stats::{CountResult, FileRecord};
use crate::error::SplitlocError;
use crate::Result;

use super::matcher::IgnoreMatcher;

/// Extensions (lowercase, without the dot) of files worth counting.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "py", "js", "html", "css", "cpp", "c", "h", "java", "rb", "php", "go", "rs", "swift", "kt",
    "ts", "jsx", "tsx", "vue", "scss", "sass", "less", "sql", "sh", "bash", "zsh", "fish", "ps1",
    "bat", "cmd", "xml", "json", "yaml", "yml", "toml", "ini", "cfg", "conf", "txt", "md", "rst",
    "tex", "r", "m", "pl", "lua", "vim", "cs", "vb", "fs", "scala", "clj", "hs", "elm", "dart",
    "jl",
];

/// Whether `path` has a recognized text extension (compared case-insensitively).
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Path of `path` relative to `root`, with `/` separators.
pub fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Walk `root` and collect its files into a new [`CountResult`].
pub fn walk(root: impl AsRef<Path>, matcher: &IgnoreMatcher) -> Result<CountResult> {
    let mut result = CountResult::new();
    walk_into(root, matcher, &mut result)?;
    Ok(result)
}

/// Walk `root`, appending its files to `result`.
///
/// Directories whose relative path is ignored are never entered. Files are
/// skipped when ignored, when their extension is not in [`TEXT_EXTENSIONS`],
/// or when they count zero lines (which includes unreadable files).
pub fn walk_into(
    root: impl AsRef<Path>,
    matcher: &IgnoreMatcher,
    result: &mut CountResult,
) -> Result<()> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(SplitlocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SplitlocError::NotADirectory(root.to_path_buf()));
    }

    let keep = |entry: &DirEntry| {
        // Always enter the root itself
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let rel = relative_path(entry.path(), root);
        if matcher.is_ignored(&rel) {
            log::debug!("pruning ignored directory {rel}");
            return false;
        }
        true
    };

    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    for entry in walker.filter_entry(keep) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() || !path.is_file() {
            continue;
        }

        let rel = relative_path(path, root);
        if matcher.is_ignored(&rel) || !is_text_file(path) {
            continue;
        }

        let lines = count_lines_lossy(path);
        if lines == 0 {
            continue;
        }

        result.push(classify(&rel), FileRecord::new(rel, lines));
    }

    Ok(())
}
