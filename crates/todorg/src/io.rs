//! File boundaries: raw line reading and rendered node writing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use todorg_orgmode::OrgNode;

/// Read a file as raw lines. Uses the same line splitting as the todo.txt
/// parser so positional pairing of records and raw lines stays aligned.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Render all nodes and write the concatenation, replacing any existing
/// content. Rendering completes before the file is touched, so a failed
/// run never leaves a partially overwritten output. No separators are
/// added between nodes; each rendered node is newline-terminated.
pub fn write_nodes(path: &Path, nodes: &[OrgNode]) -> Result<()> {
    let mut rendered = String::new();
    for node in nodes {
        rendered.push_str(&node.render());
    }
    debug!(nodes = nodes.len(), bytes = rendered.len(), "writing org output");
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
