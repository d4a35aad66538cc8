//! Source discovery: find the files to count.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files are counted. It provides:
//!
//! - **Ignore files**: read gitignore-style pattern lists
//! - **Matching**: decide whether a relative path is ignored
//! - **Walking**: traverse a tree, pruning ignored directories
//!
//! ## Example
//!
//! ```rust,ignore
//! use splitloclib::source::{ignore_patterns, walk, IgnoreMatcher};
//!
//! let patterns = ignore_patterns(".gitignore");
//! let matcher = IgnoreMatcher::from_patterns(&patterns);
//! let result = walk(".", &matcher)?;
//! ```

pub mod ignore;
pub mod matcher;
pub mod walker;

pub use ignore::{
    ignore_patterns, load_patterns, parse_patterns, read_patterns, DEFAULT_IGNORE_PATTERNS,
};
pub use matcher::{glob_match, is_ignored, CompiledPattern, IgnoreMatcher};
pub use walker::{is_text_file, relative_path, walk, walk_into, TEXT_EXTENSIONS};
