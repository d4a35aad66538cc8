//! # splitloclib
//!
//! A line counter that splits a project tree into client, server and other
//! code.
//!
//! ## Overview
//!
//! The library walks a directory, skips whatever its ignore file (plus a few
//! housekeeping patterns such as `.git/` and `node_modules/`) excludes, counts
//! the lines of every recognized text file, and groups the results:
//!
//! - **Client**: files below a `client/` directory
//! - **Server**: files below a `server/` directory
//! - **Other**: everything else
//!
//! ## Pipeline
//!
//! 1. [`source`]: read ignore patterns, match paths, walk the tree
//! 2. [`data`]: classify paths and count lines
//! 3. [`output`]: sort, total and render the report
//!
//! Unreadable files are not errors: they count as zero lines and are left
//! out of the report, as are empty files.
//!
//! ## Example
//!
//! ```rust
//! use splitloclib::{count_tree, render_text, CountOptions, Report};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("client")).unwrap();
//! fs::write(dir.path().join("client/app.ts"), "let a = 1;\nlet b = 2;\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();
//! fs::write(dir.path().join(".gitignore"), "*.md\n").unwrap();
//!
//! let result = count_tree(&CountOptions::new().root(dir.path())).unwrap();
//! assert_eq!(result.client.len(), 1);
//! assert!(result.other.is_empty());
//!
//! let report = Report::from(&result);
//! assert_eq!(report.summary.total_lines, 2);
//! assert!(render_text(&report).contains("client/app.ts"));
//! ```

pub mod counter;
pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use counter::{count_tree, CountOptions, DEFAULT_IGNORE_FILE};
pub use data::{
    classify, count_lines, count_lines_lossy, count_reader, lines_or_zero, Category, CountResult,
    FileRecord,
};
pub use error::SplitlocError;
pub use output::{render_text, write_text, Report, ReportSection, ReportSummary};
pub use source::{
    glob_match, ignore_patterns, is_ignored, load_patterns, walk, IgnoreMatcher,
    DEFAULT_IGNORE_PATTERNS,
};

/// Result type for splitloclib operations
pub type Result<T> = std::result::Result<T, SplitlocError>;
