//! # project-summary
//!
//! `project_summary` turns a project directory into a single, portable text
//! document: an indented tree of the directory structure followed by the
//! contents of every included text file, each in its own fenced block.
//!
//! What gets included is decided by two optional pattern files at the project
//! root (`.gitignore` and `.summaryignore`) plus a fixed set of built-in
//! exclusions. Each pattern is a "contains" wildcard: a path is excluded when
//! its root-relative form contains the pattern anywhere. Files whose first
//! 1024 bytes hold a zero byte are listed as binary and their content is left
//! out. Text is decoded as UTF-8, then Shift_JIS, then Latin-1.
//!
//! The walk is best effort. An unreadable directory or file turns into an
//! inline marker or is treated as binary, and the rest of the tree is still
//! summarized. The document is written once, after the walk has finished.
//!
//! # Example
//!
//! ```no_run
//! use project_summary::{SummaryBuilder, generate};
//! use std::path::PathBuf;
//!
//! let options = SummaryBuilder::new("path/to/project")
//!     .output_path(Some(PathBuf::from("snapshot.txt")))
//!     .build();
//!
//! let summary = generate(options).expect("Failed to summarize project");
//! println!("{}", summary.walk.tree);
//! for unit in &summary.walk.files {
//!     println!("{} ({} bytes)", unit.path.display(), unit.text.len());
//! }
//! ```

mod binary;
mod encoding;
mod engine;
mod error;
pub mod history;
mod matcher;
mod options;
pub mod output;
mod tree;
mod types;

pub use binary::{SAMPLE_SIZE, is_binary};
pub use encoding::{Decoded, TextEncoding, decode, read_text};
pub use engine::{DirectoryWalker, generate, generate_project_summary};
pub use error::SummaryError;
pub use matcher::{Classification, IgnoreMatcher, parse_patterns, read_ignore_file};
pub use options::{
    GITIGNORE_FILE, HISTORY_FILE, SUMMARYIGNORE_FILE, SummaryBuilder, SummaryOptions, TOOL_NAME,
    VCS_DIR, default_output_name,
};
pub use types::{FileContentUnit, NodeKind, Summary, SummarySink, TraversalNode, WalkOutput};
