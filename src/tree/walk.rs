use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::{Entry, ProjectNode, ScanConfig};
use crate::error::{Error, Result};

/// Build the project tree from a root path.
///
/// Children keep filesystem enumeration order. Ignored directories are
/// pruned before walkdir descends into them, files additionally have to pass
/// the extension filter. A subdirectory that cannot be read contributes an
/// empty subtree; only an unreadable root is an error. Symlinked
/// directories are walked when `follow_symlinks` is set and listed as empty
/// directories otherwise.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ProjectNode> {
    let metadata = fs::metadata(root).map_err(|source| Error::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| Error::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = WalkDir::new(root).follow_links(config.follow_symlinks);

    // Collect valid entries, using filter_entry to prevent descending
    // into hidden/ignored directories (not just skipping their display).
    let iter = walker.into_iter().filter_entry(|dent| {
        // Always allow root
        if dent.depth() == 0 {
            return true;
        }
        let entry = Entry::new(root, dent.path(), is_dir(dent));
        if config.ignore.should_ignore(&entry, config.show_hidden) {
            debug!(path = %entry.relative_path, "ignored");
            return false;
        }
        true
    });

    // open[d] is the directory node currently being filled at depth d.
    let mut open = vec![ProjectNode::new(Entry::root(root))];

    for entry_result in iter {
        match entry_result {
            Ok(dent) => {
                let depth = dent.depth();
                if depth == 0 {
                    continue;
                }
                close_until(&mut open, depth);

                let entry = Entry::new(root, dent.path(), is_dir(&dent));
                if entry.is_dir {
                    open.push(ProjectNode::new(entry));
                } else if config.filter.is_included(&entry) {
                    if let Some(parent) = open.last_mut() {
                        parent.children.push(ProjectNode::new(entry));
                    }
                } else {
                    debug!(path = %entry.relative_path, "filtered by extension");
                }
            }
            Err(e) => {
                // Unreadable subdirectory or symlink loop: keep going.
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                debug!(path = %path, error = %e, "skipping unreadable entry");
            }
        }
    }

    close_until(&mut open, 1);
    let tree = open
        .pop()
        .unwrap_or_else(|| ProjectNode::new(Entry::root(root)));

    info!(
        root = %root.display(),
        entries = tree.descendant_count(),
        files = tree.files().len(),
        "scan complete"
    );
    Ok(tree)
}

/// Directory-ness of a walked entry. An unfollowed symlink reports its own
/// type, so it is classified by its target instead.
fn is_dir(dent: &walkdir::DirEntry) -> bool {
    dent.file_type().is_dir() || (dent.path_is_symlink() && dent.path().is_dir())
}

/// Pop finished directories until the innermost open node sits at
/// `depth - 1`, attaching each popped node to its parent.
fn close_until(open: &mut Vec<ProjectNode>, depth: usize) {
    while open.len() > depth {
        let Some(done) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.children.push(done),
            None => {
                open.push(done);
                break;
            }
        }
    }
}
