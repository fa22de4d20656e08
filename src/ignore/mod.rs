//! Ignore patterns: parsing, matching, and persistence.

mod pattern;

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::output::write_atomic;
use crate::tree::Entry;

pub use pattern::IgnorePattern;

/// Ordered list of ignore patterns, OR-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse multi-line text, one pattern per line.
    ///
    /// Lines are not trimmed; only empty lines are dropped. There is no
    /// comment syntax and no escaping.
    pub fn parse(text: &str) -> Self {
        let mut set = Self::new();
        set.extend(text.lines());
        set
    }

    /// Render back to text, one pattern per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for p in &self.patterns {
            out.push_str(p.raw());
            out.push('\n');
        }
        out
    }

    /// Append a pattern. Empty strings are ignored.
    pub fn push(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if !raw.is_empty() {
            self.patterns.push(IgnorePattern::new(raw));
        }
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for p in patterns {
            self.push(p);
        }
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a scan should skip `entry`.
    ///
    /// Names starting with `.` are hidden unless `show_hidden` is set,
    /// regardless of the pattern list.
    pub fn should_ignore(&self, entry: &Entry, show_hidden: bool) -> bool {
        if !show_hidden && entry.name.starts_with('.') {
            return true;
        }
        self.first_match(entry).is_some()
    }

    /// The first pattern that excludes `entry`, if any.
    pub fn first_match(&self, entry: &Entry) -> Option<&IgnorePattern> {
        self.patterns.iter().find(|p| p.matches(entry))
    }

    /// Add a pattern excluding exactly this entry, by relative path.
    /// Directories get a trailing `/`.
    pub fn ignore_entry(&mut self, entry: &Entry) {
        if entry.relative_path.is_empty() {
            return;
        }
        let mut raw = entry.relative_path.clone();
        if entry.is_dir {
            raw.push('/');
        }
        debug!(pattern = %raw, "ignoring entry");
        self.push(raw);
    }

    /// Add a `*.<ext>` pattern for a file's extension. Returns false when the
    /// entry is a directory or has no extension.
    pub fn ignore_extension(&mut self, entry: &Entry) -> bool {
        if entry.is_dir {
            return false;
        }
        let ext = match Path::new(&entry.name).extension() {
            Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_string(),
            _ => return false,
        };
        self.push(format!("*.{ext}"));
        true
    }

    /// Load patterns from an ignore file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let set = Self::parse(&text);
        info!(path = %path.display(), patterns = set.len(), "loaded ignore file");
        Ok(set)
    }

    /// Save patterns to an ignore file, replacing it atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, &self.to_text())?;
        info!(path = %path.display(), patterns = self.len(), "saved ignore file");
        Ok(())
    }
}
