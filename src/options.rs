use std::path::{Path, PathBuf};
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const SUMMARYIGNORE_FILE: &str = ".summaryignore";
pub const TOOL_NAME: &str = "project-summary";
pub const VCS_DIR: &str = ".git";
pub const HISTORY_FILE: &str = "project_summary_history.txt";
const OUTPUT_SUFFIX: &str = "_project_summary.txt";
/// Name of the document written for a project when no override is given.
pub fn default_output_name(project_name: &str) -> String {
    format!("{project_name}{OUTPUT_SUFFIX}")
}
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub root: PathBuf,
    pub output_path: Option<PathBuf>,
    pub history_file_name: String,
}
impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_path: None,
            history_file_name: HISTORY_FILE.to_string(),
        }
    }
}
impl SummaryOptions {
    pub(crate) fn resolve_output(&self, project_name: &str) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_name(project_name)))
    }
    /// Tokens excluded from every summary regardless of the ignore files.
    pub(crate) fn builtin_exclusions(&self, project_name: &str) -> Vec<String> {
        let default_output = default_output_name(project_name);
        let mut builtins = vec![
            TOOL_NAME.to_string(),
            SUMMARYIGNORE_FILE.to_string(),
            default_output.clone(),
            VCS_DIR.to_string(),
            self.history_file_name.clone(),
        ];
        if let Some(name) = self
            .output_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            && name != default_output
        {
            builtins.push(name);
        }
        builtins
    }
}
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    options: SummaryOptions,
}
impl SummaryBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SummaryOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_path(mut self, path: Option<PathBuf>) -> Self {
        self.options.output_path = path;
        self
    }
    pub fn history_file_name(mut self, name: impl Into<String>) -> Self {
        self.options.history_file_name = name.into();
        self
    }
    pub fn build(self) -> SummaryOptions {
        self.options
    }
}
