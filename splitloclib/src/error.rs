//! Error types for splitloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a tree.
///
/// Most of these never reach the caller of [`count_tree`](crate::count_tree):
/// unreadable files and ignore files are absorbed into zero counts and empty
/// pattern lists. They exist so the fallible building blocks can be used and
/// tested on their own.
#[derive(Error, Debug)]
pub enum SplitlocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
