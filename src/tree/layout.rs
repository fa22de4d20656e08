use super::ProjectNode;

/// One line of the directory listing: a node plus its box-drawing prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub node: &'a ProjectNode,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// Pre-computed connector prefix (`│   `/`    ` runs plus `├── `/`└── `).
    pub prefix: String,
}

/// Flatten the tree below `root` into pre-order rows with prefixes.
///
/// The root itself is not part of the output.
pub fn flatten(root: &ProjectNode) -> Vec<TreeRow<'_>> {
    let mut rows = Vec::with_capacity(root.descendant_count());
    collect_rows(root, 1, &mut rows);
    compute_prefixes(&mut rows);
    rows
}

fn collect_rows<'a>(node: &'a ProjectNode, depth: usize, rows: &mut Vec<TreeRow<'a>>) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        rows.push(TreeRow {
            node: child,
            depth,
            is_last: i + 1 == count,
            prefix: String::new(), // computed below
        });
        collect_rows(child, depth + 1, rows);
    }
}

/// Compute prefix strings for all rows.
/// Uses the is_last flag of ancestors to determine continuation lines.
fn compute_prefixes(rows: &mut [TreeRow<'_>]) {
    // ancestor_is_last[d - 1] = true means the ancestor at depth d was the last sibling
    let mut ancestor_is_last: Vec<bool> = Vec::new();

    for row in rows.iter_mut() {
        let depth = row.depth;
        ancestor_is_last.truncate(depth - 1);

        let mut prefix = String::new();
        for &last in &ancestor_is_last {
            if last {
                prefix.push_str("    ");
            } else {
                prefix.push_str("\u{2502}   "); // │
            }
        }

        if row.is_last {
            prefix.push_str("\u{2514}\u{2500}\u{2500} "); // └──
        } else {
            prefix.push_str("\u{251c}\u{2500}\u{2500} "); // ├──
        }
        row.prefix = prefix;

        ancestor_is_last.push(row.is_last);
    }
}
