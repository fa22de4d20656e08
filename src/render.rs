//! Text rendering of a scan result: directory listing and combined document.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::tree::{flatten, Entry, ProjectNode};

/// Rule line framing every header in the combined document.
pub const RULE: &str =
    "# -------------------------------------------------------------------------";

/// Indentation in front of every row below the root line.
const BASE_INDENT: &str = "    ";

/// Source of file contents for [`render_combined`], so it can be swapped or mocked.
pub trait ContentReader {
    /// Read a file as lines, without line terminators.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Default `ContentReader` that reads from the filesystem.
///
/// Invalid UTF-8 is replaced rather than treated as a failure.
pub struct FsReader;

impl ContentReader for FsReader {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// Render the directory listing.
///
/// ```text
/// root/
///     ├── src/
///     │   └── main.cpp
///     └── README.md
/// ```
pub fn render_tree(root: &ProjectNode) -> String {
    let mut out = format!("{}/\n", root.entry.name);
    for row in flatten(root) {
        out.push_str(BASE_INDENT);
        out.push_str(&row.prefix);
        out.push_str(&row.node.entry.name);
        if row.node.is_dir() {
            out.push('/');
        }
        out.push('\n');
    }
    out
}

/// Render the combined document: a `Project Structure` banner, the
/// directory listing, a blank line, then one block per file in pre-order.
///
/// Files `reader` cannot read produce no block.
pub fn render_combined<F>(root: &ProjectNode, relative_path_of: F, reader: &dyn ContentReader) -> String
where
    F: Fn(&Entry) -> String,
{
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\n# Project Structure\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&render_tree(root));
    out.push('\n');

    for file in root.files() {
        let lines = match reader.read_lines(&file.entry.path) {
            Ok(lines) => lines,
            Err(e) => {
                debug!(path = %file.entry.path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        out.push('\n');
        out.push_str(RULE);
        out.push_str("\n# ");
        out.push_str(&relative_path_of(&file.entry));
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// [`render_combined`] over the filesystem, headed by each entry's relative path.
pub fn combine(root: &ProjectNode) -> String {
    render_combined(root, |e| e.relative_path.clone(), &FsReader)
}

/// Contents of a single file for display, each line newline-terminated.
///
/// A file that cannot be read yields a visible error placeholder instead.
pub fn preview_file(path: &Path) -> String {
    match FsReader.read_lines(path) {
        Ok(lines) => {
            let mut out = String::new();
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
            out
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "preview failed");
            format!("Error: Could not open file {}", path.display())
        }
    }
}
