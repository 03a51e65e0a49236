//! Recent-path history of summarized project directories.
//!
//! The store is a plain text file with one absolute path per line, most
//! recent first. It only ever hands a path back to the caller; the summary
//! engine knows nothing about it.

use crate::error::SummaryError;
use crate::options::HISTORY_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Maximum number of paths kept.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("please enter a number")]
    NotANumber,
    #[error("invalid selection: {0}")]
    OutOfRange(usize),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    file: PathBuf,
    entries: Vec<PathBuf>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::load(HISTORY_FILE)
    }
}

impl HistoryStore {
    /// Loads the store from `file`; a missing or unreadable file gives an empty history.
    pub fn load(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let entries = if file.exists() {
            match fs::read_to_string(&file) {
                Ok(text) => text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(PathBuf::from)
                    .collect(),
                Err(e) => {
                    warn!("Failed to load history from {}: {}", file.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        Self { file, entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves `path` (made absolute) to the front, trims to [`HISTORY_LIMIT`] and saves.
    pub fn add_entry(&mut self, path: &Path) {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.retain(|entry| entry != &absolute);
        self.entries.insert(0, absolute);
        self.entries.truncate(HISTORY_LIMIT);
        if let Err(e) = self.save() {
            warn!("Failed to save history: {}", e);
        }
    }

    /// Resolves a 1-based selection as typed by the user.
    pub fn select(&self, selection: &str) -> Result<&Path, SelectionError> {
        let index: usize = selection
            .trim()
            .parse()
            .map_err(|_| SelectionError::NotANumber)?;
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(PathBuf::as_path)
            .ok_or(SelectionError::OutOfRange(index))
    }

    fn save(&self) -> Result<(), SummaryError> {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.to_string_lossy());
            text.push('\n');
        }
        fs::write(&self.file, text).map_err(|e| SummaryError::io(&self.file, e))
    }
}
