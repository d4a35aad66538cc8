//! Path-based file categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The bucket a file is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Anything under a `client/` directory
    Client,
    /// Anything under a `server/` directory (and not under `client/`)
    Server,
    /// Everything else
    Other,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 3] = [Category::Client, Category::Server, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Client => "client",
            Category::Server => "server",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn in_segment(path: &str, name: &str) -> bool {
    path.contains(&format!("/{name}/")) || path.starts_with(&format!("{name}/"))
}

/// Classify a relative path.
///
/// The path is compared case-insensitively. `client` wins over `server` when
/// both appear.
pub fn classify(relative_path: &str) -> Category {
    let path = relative_path.replace('\\', "/").to_lowercase();

    if in_segment(&path, "client") {
        Category::Client
    } else if in_segment(&path, "server") {
        Category::Server
    } else {
        Category::Other
    }
}
