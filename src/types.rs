use std::path::PathBuf;

/// Whether a visited node is descended into or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry visited by the depth-first walk.
#[derive(Debug, Clone)]
pub struct TraversalNode {
    /// Absolute path of the node, always inside the project root.
    pub path: PathBuf,
    /// Distance from the root; drives tree indentation.
    pub depth: usize,
    pub kind: NodeKind,
}

/// A text file destined for the "File Contents" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContentUnit {
    /// Path of the file relative to the project root.
    pub path: PathBuf,
    /// The decoded text, never empty after trimming whitespace.
    pub text: String,
}

/// Append-only receiver of walker output.
///
/// The walker never reads back what it has written, so any accumulator that
/// can take tree lines and content units can stand in for [`WalkOutput`].
pub trait SummarySink {
    /// Appends one complete line (without trailing newline) to the tree text.
    fn tree_line(&mut self, line: String);
    /// Appends a file body in traversal order.
    fn content(&mut self, unit: FileContentUnit);
}

/// The tree text and content units produced by one walk.
#[derive(Debug, Default, Clone)]
pub struct WalkOutput {
    /// Indented structure lines, each terminated by `\n`.
    pub tree: String,
    /// Included files in traversal order.
    pub files: Vec<FileContentUnit>,
}

impl SummarySink for WalkOutput {
    fn tree_line(&mut self, line: String) {
        self.tree.push_str(&line);
        self.tree.push('\n');
    }
    fn content(&mut self, unit: FileContentUnit) {
        self.files.push(unit);
    }
}

/// The outcome of a successful summary run.
#[derive(Debug)]
pub struct Summary {
    /// Base name of the project root, used as the document title.
    pub project_name: String,
    /// Where the document was written.
    pub output_path: PathBuf,
    /// The full document text as written.
    pub document: String,
    /// The walk the document was assembled from.
    pub walk: WalkOutput,
}
