//! Ignore-pattern matching.
//!
//! This is a deliberately small subset of gitignore. There is no negation,
//! no anchoring and no nested ignore files. A pattern is interpreted by its
//! shape alone:
//!
//! - **Directory pattern** (`build/`): `path/` must match `*/build/` or
//!   `build/`.
//! - **Path-scoped pattern** (`docs/api`): `path` must match `*/docs/api`.
//! - **Any pattern**: `path`, or its last segment, must match the pattern
//!   itself.
//!
//! The last test applies to directory patterns too. A file literally named
//! like a directory pattern can therefore be caught by the plain test; this
//! overlap is kept on purpose so results do not change between versions.
//!
//! Glob semantics are those of shell `fnmatch`: `*` crosses `/`, `?` is one
//! character, `[...]` and `[!...]` are character classes, and matching is
//! case-sensitive.

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// End of the character class opened at `chars[start]`, using fnmatch rules:
/// a leading `!` and then a leading `]` belong to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Rewrite a shell glob into `glob` crate syntax.
///
/// Runs of `*` collapse to one `*` (there is no recursive wildcard, `*`
/// already crosses separators). A `[` that never closes stands for itself,
/// while the rest of the pattern keeps its wildcards.
fn translate(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::with_capacity(glob.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if out.ends_with('*') => {}
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Compile a shell glob.
///
/// A pattern that still does not compile is matched literally.
fn compile(glob: &str) -> Pattern {
    Pattern::new(&translate(glob)).unwrap_or_else(|e| {
        log::debug!("matching '{glob}' literally: {e}");
        // Escaped text always compiles.
        Pattern::new(&Pattern::escape(glob)).unwrap_or_default()
    })
}

/// Match `path` against a shell glob.
pub fn glob_match(pattern: &str, path: &str) -> bool {
    compile(pattern).matches_with(path, MATCH_OPTIONS)
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// A pattern compiled into the globs its shape calls for.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    raw: String,
    /// Matches the pattern text itself.
    plain: Pattern,
    /// Matches `*/<pattern>`, present for directory and path-scoped patterns.
    nested: Option<Pattern>,
    is_dir: bool,
}

impl CompiledPattern {
    /// Compile a raw ignore pattern.
    pub fn new(raw: &str) -> Self {
        let raw = normalize(raw);
        let is_dir = raw.ends_with('/');
        let nested = raw.contains('/').then(|| compile(&format!("*/{raw}")));

        Self {
            plain: compile(&raw),
            nested,
            is_dir,
            raw,
        }
    }

    /// The pattern as written, with separators normalized.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this pattern ignores `path`, which must already use `/`.
    fn matches(&self, path: &str) -> bool {
        if let Some(nested) = &self.nested {
            if self.is_dir {
                let dir = format!("{path}/");
                if nested.matches_with(&dir, MATCH_OPTIONS)
                    || self.plain.matches_with(&dir, MATCH_OPTIONS)
                {
                    return true;
                }
            } else if nested.matches_with(path, MATCH_OPTIONS) {
                return true;
            }
        }

        self.plain.matches_with(path, MATCH_OPTIONS)
            || self.plain.matches_with(basename(path), MATCH_OPTIONS)
    }
}

/// An ordered set of compiled ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<CompiledPattern>,
}

impl IgnoreMatcher {
    /// Create a matcher that ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `patterns`, keeping their order.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|p| CompiledPattern::new(p.as_ref()))
                .collect(),
        }
    }

    /// Append one more pattern.
    pub fn add(&mut self, pattern: &str) {
        self.patterns.push(CompiledPattern::new(pattern));
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// The first pattern that ignores `relative_path`, if any.
    pub fn matching_pattern(&self, relative_path: &str) -> Option<&CompiledPattern> {
        let path = normalize(relative_path);
        self.patterns.iter().find(|p| p.matches(&path))
    }

    /// Whether `relative_path` is ignored by any pattern.
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.matching_pattern(relative_path).is_some()
    }
}

/// Check a relative path against raw patterns without keeping a matcher.
pub fn is_ignored<S: AsRef<str>>(relative_path: &str, patterns: &[S]) -> bool {
    IgnoreMatcher::from_patterns(patterns).is_ignored(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ignore::DEFAULT_IGNORE_PATTERNS;

    #[test]
    fn test_glob_star_crosses_separators() {
        assert!(glob_match("*.md", "README.md"));
        assert!(glob_match("*.md", "docs/guide/intro.md"));
        assert!(glob_match("src*rs", "src/a/b.rs"));
    }

    #[test]
    fn test_glob_question_and_classes() {
        assert!(glob_match("?.c", "a.c"));
        assert!(!glob_match("?.c", "ab.c"));
        assert!(glob_match("file[0-9].txt", "file7.txt"));
        assert!(!glob_match("file[0-9].txt", "filex.txt"));
        assert!(glob_match("file[!0-9].txt", "filex.txt"));
    }

    #[test]
    fn test_glob_is_case_sensitive() {
        assert!(!glob_match("*.MD", "readme.md"));
    }

    #[test]
    fn test_glob_double_star_behaves_like_star() {
        assert!(glob_match("**/foo", "a/b/foo"));
        // fnmatch needs the slash: `**/foo` is `*/foo`.
        assert!(!glob_match("**/foo", "foo"));
        assert!(glob_match("a**b", "a/x/b"));
    }

    #[test]
    fn test_glob_unclosed_bracket_is_literal() {
        assert!(glob_match("[abc", "[abc"));
        assert!(!glob_match("[abc", "a"));
    }

    #[test]
    fn test_glob_unclosed_bracket_keeps_other_wildcards() {
        assert!(glob_match("[abc*", "[abcdef"));
        assert!(glob_match("?[x", "a[x"));
        assert!(glob_match("[a-c]*[", "b/out["));
        assert!(!glob_match("[abc*", "abcdef"));
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("a**b"), "a*b");
        assert_eq!(translate("[**]x"), "[**]x");
        assert_eq!(translate("[abc*"), "[[]abc*");
        assert_eq!(translate("[!]]*"), "[!]]*");
        assert_eq!(translate("[]"), "[[]]");
    }

    #[test]
    fn test_basename_glob_ignores_anywhere() {
        let patterns = ["*.log"];
        assert!(is_ignored("debug.log", &patterns));
        assert!(is_ignored("a/b/debug.log", &patterns));
        assert!(!is_ignored("a/b/debug.rs", &patterns));
    }

    #[test]
    fn test_plain_name_matches_basename() {
        let patterns = [".DS_Store"];
        assert!(is_ignored(".DS_Store", &patterns));
        assert!(is_ignored("client/assets/.DS_Store", &patterns));
    }

    #[test]
    fn test_directory_pattern() {
        let patterns = ["node_modules/"];
        assert!(is_ignored("node_modules", &patterns));
        assert!(is_ignored("client/node_modules", &patterns));
        assert!(is_ignored("a/b/node_modules", &patterns));
        assert!(!is_ignored("node_modules_backup", &patterns));
        // Files below an ignored directory are found by pruning, not here.
        assert!(!is_ignored("node_modules/lib/index.js", &patterns));
    }

    #[test]
    fn test_directory_pattern_with_glob() {
        let patterns = ["build*/"];
        assert!(is_ignored("build", &patterns));
        assert!(is_ignored("server/build-out", &patterns));
    }

    #[test]
    fn test_path_scoped_pattern() {
        let patterns = ["docs/api"];
        assert!(is_ignored("project/docs/api", &patterns));
        // Plain test: the pattern matches the whole path.
        assert!(is_ignored("docs/api", &patterns));
        assert!(!is_ignored("docs/api2", &patterns));
    }

    #[test]
    fn test_path_scoped_glob() {
        let patterns = ["generated/*.ts"];
        assert!(is_ignored("client/generated/types.ts", &patterns));
        assert!(is_ignored("generated/types.ts", &patterns));
        assert!(!is_ignored("client/types.ts", &patterns));
    }

    #[test]
    fn test_backslashes_are_normalized() {
        assert!(is_ignored("client\\node_modules", &["node_modules/"]));
        assert!(is_ignored("a\\b\\c.log", &["*.log"]));
        assert!(is_ignored("x/docs/api", &["docs\\api"]));
    }

    #[test]
    fn test_no_patterns_ignores_nothing() {
        let patterns: [&str; 0] = [];
        assert!(!is_ignored("anything.rs", &patterns));
        assert!(!IgnoreMatcher::new().is_ignored("anything.rs"));
    }

    #[test]
    fn test_first_match_wins() {
        let matcher = IgnoreMatcher::from_patterns(&["*.rs", "src/"]);
        assert_eq!(matcher.matching_pattern("src/main.rs").unwrap().as_str(), "*.rs");
        assert_eq!(matcher.matching_pattern("src").unwrap().as_str(), "src/");
        assert!(matcher.matching_pattern("README").is_none());
    }

    #[test]
    fn test_defaults() {
        let matcher = IgnoreMatcher::from_patterns(DEFAULT_IGNORE_PATTERNS);
        assert!(matcher.is_ignored(".git"));
        assert!(matcher.is_ignored("server/__pycache__"));
        assert!(matcher.is_ignored("server/app.pyc"));
        assert!(matcher.is_ignored(".vscode"));
        assert!(matcher.is_ignored(".idea"));
        assert!(matcher.is_ignored("logs/out.log"));
        assert!(!matcher.is_ignored("server/app.py"));
        assert!(!matcher.is_ignored(".github"));
    }

    #[test]
    fn test_add_appends() {
        let mut matcher = IgnoreMatcher::new();
        matcher.add("*.tmp");
        assert_eq!(matcher.patterns().len(), 1);
        assert!(matcher.is_ignored("scratch.tmp"));
    }
}
