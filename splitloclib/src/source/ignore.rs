//! Ignore-file parsing.
//!
//! An ignore file is read line by line: surrounding whitespace is trimmed,
//! blank lines and `#` comments are dropped, and every other line becomes one
//! raw pattern. Patterns stay strings here; [`IgnoreMatcher`] compiles them.
//!
//! [`IgnoreMatcher`]: super::matcher::IgnoreMatcher

use std::io::{self, BufReader};
use std::path::Path;

use crate::data::lines::{decode_lossy, open_file, split_lines};
use crate::error::SplitlocError;
use crate::Result;

/// Housekeeping paths that are always ignored, appended after the user's
/// patterns.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/",
    "__pycache__/",
    "*.pyc",
    ".DS_Store",
    "node_modules/",
    ".vscode/",
    ".idea/",
    "*.log",
];

/// Parse ignore-file text into patterns.
///
/// Lines may end with `\n`, `\r\n` or a lone `\r`.
pub fn parse_patterns(text: &str) -> Vec<String> {
    split_lines(text)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read the patterns of an ignore file.
///
/// A missing file yields no patterns. Invalid UTF-8 is dropped rather than
/// reported; any other I/O failure is returned.
pub fn read_patterns(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = match open_file(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(SplitlocError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let text = decode_lossy(BufReader::new(file)).map_err(|e| SplitlocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_patterns(&text))
}

/// Read the patterns of an ignore file, treating an unreadable file like a
/// missing one.
pub fn load_patterns(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match read_patterns(path) {
        Ok(patterns) => patterns,
        Err(e) => {
            log::debug!("ignoring unreadable ignore file: {e}");
            Vec::new()
        }
    }
}

/// User patterns from `path` followed by [`DEFAULT_IGNORE_PATTERNS`].
pub fn ignore_patterns(path: impl AsRef<Path>) -> Vec<String> {
    let mut patterns = load_patterns(path);
    patterns.extend(DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()));
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let text = "# build output\n\ntarget/\n   *.tmp  \n\t\n#*.rs\ndocs/api\n";
        assert_eq!(parse_patterns(text), vec!["target/", "*.tmp", "docs/api"]);
    }

    #[test]
    fn test_parse_trims_before_comment_check() {
        // Trimming happens before the comment check.
        assert!(parse_patterns("   # note").is_empty());
    }

    #[test]
    fn test_parse_handles_crlf() {
        assert_eq!(parse_patterns("a\r\nb/\r\n"), vec!["a", "b/"]);
    }

    #[test]
    fn test_parse_handles_bare_cr() {
        assert_eq!(parse_patterns("*.md\rbuild/\r"), vec!["*.md", "build/"]);
        assert_eq!(parse_patterns("# old mac\r*.log\r\rdist/"), vec!["*.log", "dist/"]);
    }

    #[test]
    fn test_bare_cr_ignore_file_applies() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "*.md\rbuild/\r").unwrap();

        assert_eq!(load_patterns(&path), vec!["*.md", "build/"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let patterns = read_patterns(temp.path().join(".gitignore")).unwrap();
        assert!(patterns.is_empty());
        assert!(load_patterns(temp.path().join(".gitignore")).is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_dropped() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, b"*.md\n\xff\xfebuild/\n").unwrap();

        let patterns = read_patterns(&path).unwrap();
        assert_eq!(patterns, vec!["*.md", "build/"]);
    }

    #[test]
    fn test_unreadable_file_is_absorbed() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".gitignore");
        fs::create_dir(&path).unwrap();

        assert!(read_patterns(&path).is_err());
        assert!(load_patterns(&path).is_empty());
    }

    #[test]
    fn test_defaults_appended_after_user_patterns() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "*.md\n").unwrap();

        let patterns = ignore_patterns(&path);
        assert_eq!(patterns[0], "*.md");
        assert_eq!(patterns.len(), 1 + DEFAULT_IGNORE_PATTERNS.len());
        assert_eq!(&patterns[1..], DEFAULT_IGNORE_PATTERNS);
    }

    #[test]
    fn test_defaults_present_without_ignore_file() {
        let temp = tempdir().unwrap();
        let patterns = ignore_patterns(temp.path().join(".gitignore"));
        assert_eq!(patterns, DEFAULT_IGNORE_PATTERNS);
    }
}
