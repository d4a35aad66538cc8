//! Terminal rendering for the CLI.
//!
//! The library produces the plain report; here headings are emphasized when
//! stdout is a terminal. `console` turns styling off on its own when output
//! is piped, so redirected output is byte-for-byte the plain layout.

use console::Style;
use splitloclib::{render_text, Report};

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Headings of the text layout for this report.
fn headings(report: &Report) -> Vec<String> {
    let mut headings = vec![
        "CODE ANALYSIS BY CATEGORY".to_string(),
        "OVERALL SUMMARY".to_string(),
    ];
    headings.extend(report.sections.iter().map(|s| s.title()));
    headings
}

fn is_heading(line: &str, headings: &[String]) -> bool {
    headings
        .iter()
        .any(|h| line == h || line.strip_prefix(h.as_str()).is_some_and(|rest| rest.starts_with(':')))
}

/// Render the report as text with bold headings.
pub fn render_styled(report: &Report) -> String {
    let heading_style = Style::new().bold();
    let headings = headings(report);

    render_text(report)
        .lines()
        .map(|line| {
            if is_heading(line, &headings) {
                heading_style.apply_to(line).to_string()
            } else {
                line.to_string()
            }
        })
        .map(|line| line + "\n")
        .collect()
}

/// Render the report in the requested mode.
pub fn render(report: &Report, mode: OutputMode) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Text => Ok(render_styled(report)),
        OutputMode::Json => serde_json::to_string_pretty(report).map(|json| json + "\n"),
    }
}
