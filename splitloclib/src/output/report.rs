//! Report model: sorted sections and totals.
//!
//! A [`Report`] is built from a [`CountResult`] and holds everything the
//! renderers need. Each section lists its files by descending line count;
//! files with equal counts keep the order the walk found them in.

use serde::Serialize;

use crate::data::category::Category;
use crate::data::stats::{CountResult, FileRecord};

/// One category's files, sorted, with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub category: Category,
    pub files: Vec<FileRecord>,
    pub file_count: usize,
    pub total_lines: u64,
}

impl ReportSection {
    /// Sort `files` and total them.
    pub fn new(category: Category, mut files: Vec<FileRecord>) -> Self {
        sort_by_lines(&mut files);
        let total_lines = files.iter().map(|f| f.lines).sum();

        Self {
            category,
            file_count: files.len(),
            files,
            total_lines,
        }
    }

    /// Section heading, e.g. `CLIENT FILES`.
    pub fn title(&self) -> String {
        format!("{} FILES", self.category.as_str().to_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Totals across all sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_files: usize,
    pub total_lines: u64,
    pub client_files: usize,
    pub server_files: usize,
    pub other_files: usize,
}

/// The full report: one section per category plus the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sections: Vec<ReportSection>,
    pub summary: ReportSummary,
}

impl Report {
    pub fn from_result(result: &CountResult) -> Self {
        let sections: Vec<ReportSection> = Category::ALL
            .iter()
            .map(|&c| ReportSection::new(c, result.files(c).to_vec()))
            .collect();

        let count = |category: Category| {
            sections
                .iter()
                .find(|s| s.category == category)
                .map_or(0, |s| s.file_count)
        };

        let summary = ReportSummary {
            total_files: sections.iter().map(|s| s.file_count).sum(),
            total_lines: sections.iter().map(|s| s.total_lines).sum(),
            client_files: count(Category::Client),
            server_files: count(Category::Server),
            other_files: count(Category::Other),
        };

        Self { sections, summary }
    }

    pub fn section(&self, category: Category) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}

impl From<&CountResult> for Report {
    fn from(result: &CountResult) -> Self {
        Self::from_result(result)
    }
}

/// Sort descending by line count. The sort is stable, so ties stay in
/// encounter order.
pub fn sort_by_lines(files: &mut [FileRecord]) {
    files.sort_by(|a, b| b.lines.cmp(&a.lines));
}
