//! Per-file records and their per-category accumulation.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A counted file: its path relative to the scanned root and its line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the root, always with `/` separators
    pub path: String,
    /// Number of lines, never zero for recorded files
    pub lines: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, lines: u64) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }
}

/// Files found by a scan, grouped by category in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub client: Vec<FileRecord>,
    pub server: Vec<FileRecord>,
    pub other: Vec<FileRecord>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file under `category`.
    pub fn push(&mut self, category: Category, record: FileRecord) {
        self.files_mut(category).push(record);
    }

    /// Files recorded under `category`.
    pub fn files(&self, category: Category) -> &[FileRecord] {
        match category {
            Category::Client => &self.client,
            Category::Server => &self.server,
            Category::Other => &self.other,
        }
    }

    fn files_mut(&mut self, category: Category) -> &mut Vec<FileRecord> {
        match category {
            Category::Client => &mut self.client,
            Category::Server => &mut self.server,
            Category::Other => &mut self.other,
        }
    }

    /// Total number of recorded files.
    pub fn file_count(&self) -> usize {
        self.client.len() + self.server.len() + self.other.len()
    }

    /// Total lines across all recorded files.
    pub fn total_lines(&self) -> u64 {
        Category::ALL
            .iter()
            .flat_map(|c| self.files(*c))
            .map(|f| f.lines)
            .sum()
    }
}
