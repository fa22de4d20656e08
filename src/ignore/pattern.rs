use globset::{GlobBuilder, GlobMatcher};
use std::path::MAIN_SEPARATOR;
use tracing::warn;

use crate::tree::Entry;

/// One ignore rule, as written by the user.
///
/// Glob dialect is globset's default: `*` matches any run of characters
/// (including `/`), `?` one character, `[...]` a class, `{a,b}` an
/// alternation. Matching is case-sensitive. A pattern that fails to compile
/// is compared literally.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    directory_only: bool,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Glob(GlobMatcher),
    Literal(String),
}

impl Matcher {
    fn is_match(&self, candidate: &str) -> bool {
        match self {
            Matcher::Glob(g) => g.is_match(candidate),
            Matcher::Literal(s) => s == candidate,
        }
    }
}

impl IgnorePattern {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let stripped = raw
            .strip_suffix('/')
            .or_else(|| raw.strip_suffix(MAIN_SEPARATOR));
        let directory_only = stripped.is_some();
        let text = stripped.unwrap_or(&raw);

        let matcher = match GlobBuilder::new(text).build() {
            Ok(glob) => Matcher::Glob(glob.compile_matcher()),
            Err(e) => {
                warn!(pattern = %raw, error = %e, "invalid glob, matching literally");
                Matcher::Literal(text.to_string())
            }
        };

        Self {
            raw,
            directory_only,
            matcher,
        }
    }

    /// The pattern exactly as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern ended in a separator and only applies to directories.
    pub fn is_directory_only(&self) -> bool {
        self.directory_only
    }

    /// Whether this pattern excludes `entry`, by leaf name or by relative path.
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.directory_only && !entry.is_dir {
            return false;
        }
        self.matcher.is_match(&entry.name) || self.matcher.is_match(&entry.relative_path)
    }
}

impl PartialEq for IgnorePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for IgnorePattern {}
