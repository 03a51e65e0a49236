//! Internal module for formatting the lines of the directory-structure section.

/// Indentation added per level of depth.
const INDENT_UNIT: &str = "  ";

/// Suffix appended to files whose content is omitted as binary.
pub(crate) const BINARY_ANNOTATION: &str = " (バイナリファイル)";

/// Inline notes recorded in place of a directory's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Marker {
    AccessDenied,
    Error(String),
    SymlinkLoop,
}

fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// A directory or text-file line, e.g. `  - src/` or `    - main.rs`.
pub(crate) fn entry_line(depth: usize, name: &str, is_dir: bool) -> String {
    let suffix = if is_dir { "/" } else { "" };
    format!("{}- {}{}", indent(depth), name, suffix)
}

pub(crate) fn binary_line(depth: usize, name: &str) -> String {
    format!("{}- {}{}", indent(depth), name, BINARY_ANNOTATION)
}

/// A marker for the directory at `depth`; it sits one level deeper, where its
/// children would have been.
pub(crate) fn marker_line(depth: usize, marker: &Marker) -> String {
    let text = match marker {
        Marker::AccessDenied => "(access denied)".to_string(),
        Marker::Error(message) => format!("(error: {message})"),
        Marker::SymlinkLoop => "(symlink loop)".to_string(),
    };
    format!("{}- {}", indent(depth + 1), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_indent_two_spaces_per_level() {
        assert_eq!(entry_line(0, "demo", true), "- demo/");
        assert_eq!(entry_line(2, "lib.rs", false), "    - lib.rs");
        assert_eq!(binary_line(1, "logo.png"), "  - logo.png (バイナリファイル)");
        assert_eq!(marker_line(1, &Marker::AccessDenied), "    - (access denied)");
        assert_eq!(
            marker_line(0, &Marker::Error("boom".into())),
            "  - (error: boom)"
        );
    }
}
