//! Scan result model, traversal, and layout computation.

pub(crate) mod layout;
pub(crate) mod walk;

use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::filter::ExtensionFilter;
use crate::ignore::IgnoreSet;

pub use layout::{flatten, TreeRow};
pub use walk::scan;

/// One filesystem node visited during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full filesystem path.
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated, no leading separator.
    pub relative_path: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Leaf name (filename component only).
    pub name: String,
}

impl Entry {
    /// Build an entry for `path`, which must live under `root`.
    pub fn new(root: &Path, path: &Path, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self {
            path: path.to_path_buf(),
            relative_path: relative_path(root, path),
            is_dir,
            name,
        }
    }

    /// The entry for the project root itself.
    pub fn root(root: &Path) -> Self {
        Self::new(root, root, true)
    }
}

/// Relative path of `path` under `root`, normalized to `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// A node in the scan result tree.
///
/// Files never have children; a directory's children keep the order the
/// filesystem listed them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    pub entry: Entry,
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    pub fn new(entry: Entry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.entry.is_dir
    }

    /// All file nodes below this one, depth-first pre-order.
    pub fn files(&self) -> Vec<&ProjectNode> {
        let mut out = Vec::new();
        collect_files(self, &mut out);
        out
    }

    /// Number of nodes in this subtree, excluding `self`.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Find a descendant by its `/`-separated relative path.
    pub fn find(&self, relative_path: &str) -> Option<&ProjectNode> {
        if self.entry.relative_path == relative_path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(relative_path))
    }
}

fn collect_files<'a>(node: &'a ProjectNode, out: &mut Vec<&'a ProjectNode>) {
    for child in &node.children {
        if child.is_dir() {
            collect_files(child, out);
        } else {
            out.push(child);
        }
    }
}

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to include hidden entries (dotfiles and dot-directories).
    pub show_hidden: bool,
    /// Whether to descend into symlinked directories. On by default; walkdir
    /// cuts symlink cycles.
    pub follow_symlinks: bool,
    /// Patterns for entries to exclude.
    pub ignore: IgnoreSet,
    /// Enabled extension categories for files.
    pub filter: ExtensionFilter,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            follow_symlinks: true,
            ignore: IgnoreSet::default(),
            filter: ExtensionFilter::default(),
        }
    }
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeScanner {
    fn scan(&self, root: &Path, config: &ScanConfig) -> Result<ProjectNode>;
}

/// Default `TreeScanner` that delegates to the walkdir-based implementation.
pub struct WalkdirScanner;

impl TreeScanner for WalkdirScanner {
    fn scan(&self, root: &Path, config: &ScanConfig) -> Result<ProjectNode> {
        scan(root, config)
    }
}
