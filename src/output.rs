//! Assembly of the final summary document.
//!
//! The document is a title, the "Directory Structure" section holding the tree
//! text verbatim, and the "File Contents" section with one fenced subsection
//! per included file, in traversal order.

use crate::error::SummaryError;
use crate::types::{FileContentUnit, WalkOutput};
use std::fs;
use std::path::Path;

/// Builds the full document text for `project_name` from a finished walk.
pub fn assemble(project_name: &str, walk: &WalkOutput) -> String {
    let body: usize = walk.files.iter().map(|f| f.text.len() + 64).sum();
    let mut out = String::with_capacity(walk.tree.len() + body + 128);
    out.push_str(&format!("# {project_name}\n\n## Directory Structure\n\n"));
    out.push_str(&walk.tree);
    out.push_str("\n## File Contents\n\n");
    for unit in &walk.files {
        push_unit(&mut out, unit);
    }
    out
}

/// Writes the document with a single write call.
pub fn write_document(path: impl AsRef<Path>, document: &str) -> Result<(), SummaryError> {
    fs::write(&path, document).map_err(|e| SummaryError::io(path.as_ref(), e))
}

// ----------------------- Internal formatting -----------------------

fn push_unit(out: &mut String, unit: &FileContentUnit) {
    out.push_str(&format!(
        "### {}\n\n```\n{}\n```\n\n",
        unit.path.display(),
        unit.text
    ));
}
