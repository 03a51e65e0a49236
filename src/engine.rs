use crate::binary::is_binary;
use crate::encoding::read_text;
use crate::error::SummaryError;
use crate::matcher::IgnoreMatcher;
use crate::options::{SummaryBuilder, SummaryOptions};
use crate::output::{assemble, write_document};
use crate::tree::{Marker, binary_line, entry_line, marker_line};
use crate::types::{FileContentUnit, NodeKind, Summary, SummarySink, TraversalNode, WalkOutput};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};
/// Depth-first, pre-order walk of a project root.
///
/// Children are visited in file-name order and ignored directories are pruned
/// before they are entered. Failures at a single node become inline markers.
pub struct DirectoryWalker<'a> {
    root: &'a Path,
    matcher: &'a IgnoreMatcher,
}
impl<'a> DirectoryWalker<'a> {
    pub fn new(root: &'a Path, matcher: &'a IgnoreMatcher) -> Self {
        Self { root, matcher }
    }
    pub fn walk(&self) -> WalkOutput {
        let mut output = WalkOutput::default();
        self.walk_into(&mut output);
        output
    }
    pub fn walk_into(&self, sink: &mut impl SummarySink) {
        let walker = WalkDir::new(self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.matcher.is_ignored(entry.path()));
        // A listing failure is reported right after its directory's own entry.
        let mut last_dir: Option<PathBuf> = None;
        for result in walker {
            match result {
                Ok(entry) => {
                    let node = traversal_node(entry);
                    match node.kind {
                        NodeKind::Directory => {
                            sink.tree_line(entry_line(node.depth, &base_name(&node.path), true));
                            last_dir = Some(node.path);
                        }
                        NodeKind::File => {
                            self.visit_file(&node, sink);
                            last_dir = None;
                        }
                    }
                }
                Err(err) => self.visit_error(&err, last_dir.as_deref(), sink),
            }
        }
    }
    fn visit_error(
        &self,
        err: &walkdir::Error,
        last_dir: Option<&Path>,
        sink: &mut impl SummarySink,
    ) {
        let Some(path) = err.path() else {
            warn!("Skipping unreadable entry: {}", err);
            return;
        };
        if self.matcher.is_ignored(path) {
            return;
        }
        let depth = self.depth_of(path);
        if err.loop_ancestor().is_some() {
            sink.tree_line(entry_line(depth, &base_name(path), true));
            sink.tree_line(marker_line(depth, &Marker::SymlinkLoop));
        } else if last_dir == Some(path) {
            let marker = match err.io_error() {
                Some(io_err) => listing_marker(io_err),
                None => Marker::Error(err.to_string()),
            };
            sink.tree_line(marker_line(depth, &marker));
        } else {
            // The entry itself could not be resolved, e.g. a dangling symlink.
            let node = TraversalNode {
                path: path.to_path_buf(),
                depth,
                kind: NodeKind::File,
            };
            self.visit_file(&node, sink);
        }
    }
    fn visit_file(&self, node: &TraversalNode, sink: &mut impl SummarySink) {
        let name = base_name(&node.path);
        if is_binary(&node.path) {
            debug!("Binary file detected: {}", node.path.display());
            sink.tree_line(binary_line(node.depth, &name));
            return;
        }
        sink.tree_line(entry_line(node.depth, &name, false));
        let text = read_text(&node.path);
        if text.trim().is_empty() {
            return;
        }
        let path = node
            .path
            .strip_prefix(self.root)
            .unwrap_or(&node.path)
            .to_path_buf();
        sink.content(FileContentUnit { path, text });
    }
    fn depth_of(&self, path: &Path) -> usize {
        path.strip_prefix(self.root)
            .map(|rel| rel.components().count())
            .unwrap_or(0)
    }
}
fn traversal_node(entry: DirEntry) -> TraversalNode {
    let kind = if entry.file_type().is_dir() {
        NodeKind::Directory
    } else {
        NodeKind::File
    };
    TraversalNode {
        depth: entry.depth(),
        path: entry.into_path(),
        kind,
    }
}
fn listing_marker(err: &io::Error) -> Marker {
    match err.kind() {
        io::ErrorKind::PermissionDenied => Marker::AccessDenied,
        _ => Marker::Error(err.to_string()),
    }
}
/// Final path component, or an empty name for a root such as `/`.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
/// Walks `options.root`, assembles the summary and writes it in one go.
///
/// Nothing is written unless the whole tree has been walked.
pub fn generate(options: SummaryOptions) -> Result<Summary, SummaryError> {
    let root = fs::canonicalize(&options.root).map_err(|e| SummaryError::io(&options.root, e))?;
    if !root.is_dir() {
        return Err(SummaryError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let project_name = base_name(&root);
    info!("Generating summary for {}", root.display());
    let matcher = IgnoreMatcher::load(&root, options.builtin_exclusions(&project_name))?;
    let walk = DirectoryWalker::new(&root, &matcher).walk();
    let document = assemble(&project_name, &walk);
    let output_path = options.resolve_output(&project_name);
    write_document(&output_path, &document)?;
    info!(
        "Wrote project summary: {}",
        std::path::absolute(&output_path)
            .unwrap_or_else(|_| output_path.clone())
            .display()
    );
    Ok(Summary {
        project_name,
        output_path,
        document,
        walk,
    })
}
/// Boolean entry point for front ends: logs any failure and reports `false`.
pub fn generate_project_summary(root: impl Into<PathBuf>, output: Option<PathBuf>) -> bool {
    let options = SummaryBuilder::new(root).output_path(output).build();
    match generate(options) {
        Ok(_) => true,
        Err(e) => {
            error!("Failed to generate project summary: {}", e);
            false
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::default_output_name;
    #[test]
    fn filesystem_root_has_empty_name() {
        assert_eq!(base_name(Path::new("/")), "");
        assert_eq!(
            default_output_name(&base_name(Path::new("/"))),
            "_project_summary.txt"
        );
        assert_eq!(base_name(Path::new("/srv/app")), "app");
    }
    #[test]
    fn listing_failures_pick_their_marker() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(listing_marker(&denied), Marker::AccessDenied);
        let other = io::Error::other("device went away");
        assert_eq!(
            marker_line(1, &listing_marker(&other)),
            "    - (error: device went away)"
        );
    }
}
