//! Plain-text rendering of a [`Report`].

use std::fmt::{self, Write};

use super::report::{Report, ReportSection};

const WIDTH: usize = 60;

/// Render `report` in the tabular text layout.
pub fn render_text(report: &Report) -> String {
    report.to_string()
}

/// Write `report` in the tabular text layout.
pub fn write_text<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let rule = "=".repeat(WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "CODE ANALYSIS BY CATEGORY")?;
    writeln!(out, "{rule}")?;

    for section in &report.sections {
        write_section(out, section)?;
    }

    let summary = &report.summary;
    writeln!(out, "\n{rule}")?;
    writeln!(out, "OVERALL SUMMARY")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total files analyzed: {}", summary.total_files)?;
    writeln!(out, "Total lines of code: {}", summary.total_lines)?;
    writeln!(out, "Client files: {}", summary.client_files)?;
    writeln!(out, "Server files: {}", summary.server_files)?;
    writeln!(out, "Other files: {}", summary.other_files)
}

fn write_section<W: Write>(out: &mut W, section: &ReportSection) -> fmt::Result {
    let title = section.title();

    if section.is_empty() {
        return writeln!(out, "\n{title}: No files found");
    }

    writeln!(out, "\n{title}:")?;
    writeln!(out, "{:<8} File", "Lines")?;
    writeln!(out, "{}", "-".repeat(WIDTH))?;
    for file in &section.files {
        writeln!(out, "{:<8} {}", file.lines, file.path)?;
    }

    let lower = title.to_lowercase();
    writeln!(out, "\nFiles in {lower}: {}", section.file_count)?;
    writeln!(out, "Total lines in {lower}: {}", section.total_lines)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::category::Category;
    use crate::data::stats::{CountResult, FileRecord};

    #[test]
    fn test_render_full_report() {
        let mut result = CountResult::new();
        result.push(Category::Client, FileRecord::new("client/app.ts", 10));
        result.push(Category::Server, FileRecord::new("server/util.go", 4));
        result.push(Category::Server, FileRecord::new("server/main.go", 20));

        let text = render_text(&Report::from(&result));

        let expected = "\
============================================================
CODE ANALYSIS BY CATEGORY
============================================================

CLIENT FILES:
Lines    File
------------------------------------------------------------
10       client/app.ts

Files in client files: 1
Total lines in client files: 10

SERVER FILES:
Lines    File
------------------------------------------------------------
20       server/main.go
4        server/util.go

Files in server files: 2
Total lines in server files: 24

OTHER FILES: No files found

============================================================
OVERALL SUMMARY
============================================================
Total files analyzed: 3
Total lines of code: 34
Client files: 1
Server files: 2
Other files: 0
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_report() {
        let text = render_text(&Report::from(&CountResult::new()));

        assert!(text.contains("\nCLIENT FILES: No files found\n"));
        assert!(text.contains("\nSERVER FILES: No files found\n"));
        assert!(text.contains("\nOTHER FILES: No files found\n"));
        assert!(text.contains("Total files analyzed: 0\n"));
        assert!(!text.contains("Lines    File"));
    }

    #[test]
    fn test_wide_counts_are_not_truncated() {
        let mut result = CountResult::new();
        result.push(Category::Other, FileRecord::new("big.sql", 123_456_789));

        let text = render_text(&Report::from(&result));

        assert!(text.contains("\n123456789 big.sql\n"));
    }
}
