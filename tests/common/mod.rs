#![allow(dead_code)]

use script_combiner::{ExtensionFilter, Preset, ProjectNode, ScanConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// ScanConfig with the default ignore patterns and table-default categories.
pub fn default_scan_config() -> ScanConfig {
    ScanConfig {
        ignore: Preset::Default.ignore_set(),
        filter: ExtensionFilter::default(),
        ..ScanConfig::default()
    }
}

/// ScanConfig exactly as a preset leaves it.
pub fn preset_scan_config(preset: Preset) -> ScanConfig {
    ScanConfig {
        ignore: preset.ignore_set(),
        filter: preset.extension_filter(),
        ..ScanConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            write_file(&full, "");
        }
    }
    tmp
}

/// Create files with contents from `(relative path, contents)` pairs.
pub fn create_fixture_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (p, contents) in files {
        write_file(&tmp.path().join(p), contents);
    }
    tmp
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Relative paths of every node below the root, pre-order.
pub fn all_paths(tree: &ProjectNode) -> Vec<String> {
    let mut out = Vec::new();
    collect(tree, &mut out);
    out
}

fn collect(node: &ProjectNode, out: &mut Vec<String>) {
    for child in &node.children {
        out.push(child.entry.relative_path.clone());
        collect(child, out);
    }
}

/// Relative paths of file nodes, pre-order.
pub fn file_paths(tree: &ProjectNode) -> Vec<String> {
    tree.files()
        .iter()
        .map(|n| n.entry.relative_path.clone())
        .collect()
}
