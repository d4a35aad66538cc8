//! Output: turn scan results into a report.
//!
//! - **Report**: sorted per-category sections and overall totals
//! - **Text**: the tabular plain-text layout printed by the CLI
//!
//! The report is also `Serialize`, so callers can emit it as JSON.

pub mod report;
pub mod text;

pub use report::{sort_by_lines, Report, ReportSection, ReportSummary};
pub use text::{render_text, write_text};
