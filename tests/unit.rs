use project_summary::{
    Classification, IgnoreMatcher, SUMMARYIGNORE_FILE, TextEncoding, decode, is_binary,
    read_ignore_file, read_text,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn matcher(patterns: &[&str]) -> IgnoreMatcher {
    IgnoreMatcher::from_patterns(
        Path::new("/work"),
        patterns.iter().map(|p| p.to_string()).collect(),
    )
    .unwrap()
}
#[test]
fn test_contains_semantics_over_match() {
    let m = matcher(&["build"]);
    assert!(m.is_ignored(Path::new("project/build/output.txt")));
    assert!(m.is_ignored(Path::new("project/src/rebuild.txt")));
    assert!(!m.is_ignored(Path::new("project/src/main.rs")));
}
#[test]
fn test_short_token_matches_unrelated_paths() {
    let m = matcher(&["src"]);
    assert!(m.is_ignored(Path::new("assets/resource.json")));
}
#[test]
fn test_matching_is_case_sensitive() {
    let m = matcher(&["build"]);
    assert!(!m.is_ignored(Path::new("Build/out.txt")));
}
#[test]
fn test_absolute_paths_are_relative_to_root() {
    let m = matcher(&["target"]);
    assert!(m.is_ignored(Path::new("/work/target/debug")));
    assert!(!m.is_ignored(Path::new("/work/src/lib.rs")));
}
#[test]
fn test_paths_outside_root_are_included() {
    let m = matcher(&["target"]);
    assert_eq!(
        m.classify(Path::new("/elsewhere/target/debug")),
        Classification::Included
    );
}
#[test]
fn test_wildcards_inside_tokens() {
    let m = matcher(&["*.log", "cache?"]);
    assert!(m.is_ignored(Path::new("logs/app.log")));
    assert!(m.is_ignored(Path::new("cache1/data.bin")));
    assert!(!m.is_ignored(Path::new("notes.txt")));
}
#[test]
fn test_malformed_token_matches_literally() {
    let m = matcher(&["[oops"]);
    assert!(m.is_ignored(Path::new("dir/[oops].txt")));
    assert!(!m.is_ignored(Path::new("dir/oops.txt")));
}
#[test]
fn test_separator_variants_are_registered() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(SUMMARYIGNORE_FILE), "docs/api\n").unwrap();
    let m = IgnoreMatcher::load(dir.path(), Vec::new()).unwrap();
    assert_eq!(m.patterns(), &["docs/api".to_string(), "docs\\api".to_string()]);
    assert!(m.is_ignored(Path::new("docs/api/index.md")));
    assert!(m.is_ignored(Path::new("docs\\api\\index.md")));
}
#[test]
fn test_classification_ignores_pattern_source() {
    let a = tempdir().unwrap();
    fs::write(a.path().join(".gitignore"), "target\n").unwrap();
    fs::write(a.path().join(SUMMARYIGNORE_FILE), "*.tmp\n").unwrap();
    let b = tempdir().unwrap();
    fs::write(b.path().join(".gitignore"), "*.tmp\n").unwrap();
    fs::write(b.path().join(SUMMARYIGNORE_FILE), "target\n").unwrap();
    let ma = IgnoreMatcher::load(a.path(), Vec::new()).unwrap();
    let mb = IgnoreMatcher::load(b.path(), Vec::new()).unwrap();
    for candidate in ["target/x", "src/a.tmp", "src/main.rs", "."] {
        assert_eq!(
            ma.classify(Path::new(candidate)),
            mb.classify(Path::new(candidate)),
            "{candidate}"
        );
    }
}
#[test]
fn test_missing_ignore_file_is_empty() {
    let dir = tempdir().unwrap();
    assert!(read_ignore_file(dir.path(), ".gitignore").is_empty());
}
#[test]
fn test_binary_detection_zero_byte_in_sample() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.dat");
    fs::write(&first, [0u8, b'a', b'b']).unwrap();
    assert!(is_binary(&first));
    let mut edge = vec![b'a'; 1024];
    edge[1023] = 0;
    let last = dir.path().join("last.dat");
    fs::write(&last, &edge).unwrap();
    assert!(is_binary(&last));
}
#[test]
fn test_zero_byte_past_sample_is_text() {
    let dir = tempdir().unwrap();
    let mut bytes = vec![b'a'; 1024];
    bytes.push(0);
    let path = dir.path().join("late.txt");
    fs::write(&path, &bytes).unwrap();
    assert!(!is_binary(&path));
}
#[test]
fn test_unreadable_file_is_binary() {
    let dir = tempdir().unwrap();
    assert!(is_binary(&dir.path().join("missing.txt")));
}
#[test]
fn test_read_text_falls_back_through_encodings() {
    let dir = tempdir().unwrap();
    let sjis = dir.path().join("sjis.txt");
    // "こんにちは" in Shift_JIS
    fs::write(
        &sjis,
        [0x82, 0xb1, 0x82, 0xf1, 0x82, 0xc9, 0x82, 0xbf, 0x82, 0xcd],
    )
    .unwrap();
    assert_eq!(read_text(&sjis), "こんにちは");
    assert_eq!(decode(&[0xe9, 0xff]).encoding, TextEncoding::Latin1);
}
#[test]
fn test_read_text_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    assert_eq!(read_text(&dir.path().join("gone.txt")), "");
}
