//! Ignore-pattern loading and path classification.
//!
//! Every pattern is a "contains" token: `build` becomes the wildcard
//! `*build*` and excludes any root-relative path holding `build` anywhere,
//! including `src/rebuild.txt`. Wildcard characters inside a token keep
//! their meaning, and `*` crosses path separators.

use crate::error::SummaryError;
use crate::options::{GITIGNORE_FILE, SUMMARYIGNORE_FILE};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::{info, warn};

/// Result of matching a path against the combined pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Included,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    root: PathBuf,
    patterns: Vec<String>,
    set: GlobSet,
}

impl IgnoreMatcher {
    /// Reads `.gitignore` and `.summaryignore` from `root` and appends `builtins`.
    ///
    /// Missing or unreadable pattern files contribute nothing.
    pub fn load(
        root: &Path,
        builtins: impl IntoIterator<Item = String>,
    ) -> Result<Self, SummaryError> {
        let gitignore = read_ignore_file(root, GITIGNORE_FILE);
        info!("{} patterns: {:?}", GITIGNORE_FILE, gitignore);
        let summaryignore = read_ignore_file(root, SUMMARYIGNORE_FILE);
        info!("{} patterns: {:?}", SUMMARYIGNORE_FILE, summaryignore);
        let patterns = gitignore
            .into_iter()
            .chain(summaryignore)
            .chain(builtins)
            .collect();
        Self::from_patterns(root, patterns)
    }

    pub fn from_patterns(root: &Path, patterns: Vec<String>) -> Result<Self, SummaryError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let wrapped = translate(&format!("*{pattern}*"));
            let glob = match compile(&wrapped) {
                Ok(glob) => glob,
                Err(e) => {
                    warn!(
                        "Pattern '{}' is not a valid wildcard ({}), matching it literally",
                        pattern, e
                    );
                    compile(&format!("*{}*", globset::escape(pattern)))
                        .map_err(|e| SummaryError::Pattern(format!("{pattern}: {e}")))?
                }
            };
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| SummaryError::Pattern(format!("Failed to build pattern set: {e}")))?;
        Ok(Self {
            root: root.to_path_buf(),
            patterns,
            set,
        })
    }

    /// Every active pattern, file patterns first, built-ins last.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn classify(&self, candidate: &Path) -> Classification {
        let relative = if candidate.is_absolute() {
            match candidate.strip_prefix(&self.root) {
                Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
                Ok(rel) => rel.to_path_buf(),
                // Outside the root nothing is defined to match.
                Err(_) => return Classification::Included,
            }
        } else {
            candidate.to_path_buf()
        };
        let relative = relative.to_string_lossy();
        let rooted = format!("{MAIN_SEPARATOR}{relative}");
        if self.set.is_match(&*relative) || self.set.is_match(&rooted) {
            Classification::Ignored
        } else {
            Classification::Included
        }
    }

    pub fn is_ignored(&self, candidate: &Path) -> bool {
        self.classify(candidate) == Classification::Ignored
    }
}

/// Reads one pattern file, returning an empty list when it is absent or unreadable.
pub fn read_ignore_file(root: &Path, name: &str) -> Vec<String> {
    let path = root.join(name);
    if !path.exists() {
        return Vec::new();
    }
    match fs::read_to_string(&path) {
        Ok(text) => parse_patterns(&text),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Turns pattern-file text into tokens, adding the other-separator variant of each.
pub fn parse_patterns(text: &str) -> Vec<String> {
    let mut patterns = Vec::new();
    for line in text.lines() {
        let token = line.trim();
        if token.is_empty() || line.starts_with('#') {
            continue;
        }
        patterns.push(token.to_string());
        if token.contains('/') {
            patterns.push(token.replace('/', "\\"));
        }
        if token.contains('\\') {
            patterns.push(token.replace('\\', "/"));
        }
    }
    patterns
}

fn compile(pattern: &str) -> Result<globset::Glob, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(false)
        .case_insensitive(false)
        .build()
}

/// Rewrites a shell wildcard into globset syntax: star runs collapse,
/// braces are literal and an unterminated `[` is literal.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                if !out.ends_with('*') {
                    out.push('*');
                }
                i += 1;
            }
            '{' | '}' => {
                out.push('[');
                out.push(chars[i]);
                out.push(']');
                i += 1;
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end + 1;
                }
                None => {
                    out.push_str("[[]");
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}
