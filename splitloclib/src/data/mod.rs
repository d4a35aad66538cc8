//! Data collection: what a file is and how many lines it has.
//!
//! - **Categories**: bucket a relative path into client, server or other
//! - **Line counting**: count lines with forgiving UTF-8 decoding
//! - **Records**: the per-file results a scan accumulates

pub mod category;
pub mod lines;
pub mod stats;

pub use category::{classify, Category};
pub use lines::{count_lines, count_lines_lossy, count_reader, lines_or_zero, split_lines};
pub use stats::{CountResult, FileRecord};
