//! Error path integration tests for pinpoint.
//!
//! Tests that malformed, empty, and edge-case files resolve without
//! panicking and that unusable inputs produce the right error.

use std::fs;
use std::path::PathBuf;

use pinpoint::{Config, Cursor, Error, NotFound, SourceParser};
use tempfile::TempDir;

/// Create a temporary directory holding one file.
fn dir_with_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("should write file");
    (dir, path)
}

// === Empty file tests ===

#[test]
fn empty_file_has_no_types_and_no_method() {
    let (_dir, path) = dir_with_file("Empty.cs", "");
    let parsed = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&path)
        .expect("empty file should parse");

    assert!(parsed.top_level_types().is_empty());
    assert_eq!(
        parsed.method_at(Cursor::new(0, 0)),
        Err(NotFound::NotInMethod)
    );
}

#[test]
fn whitespace_only_file_has_no_types() {
    let (_dir, path) = dir_with_file("Blank.cs", "   \n\n  \t\n");
    let parsed = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&path)
        .expect("blank file should parse");

    assert!(parsed.top_level_types().is_empty());
    assert!(!parsed.has_syntax_errors());
}

// === Malformed file tests ===

#[test]
fn file_with_syntax_errors_does_not_panic() {
    let malformed = r"
namespace Broken
{
    public class Half
    {
        public void Incomplete(
        // missing closing paren and body
    public class Orphan {
        void !!!invalid() { }
";
    let (_dir, path) = dir_with_file("Bad.cs", malformed);
    let parsed = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&path)
        .expect("parse should succeed even with malformed files");

    assert!(parsed.has_syntax_errors());

    // Tree-sitter may recover partial declarations; any cursor must be safe.
    let _ = parsed.top_level_types();
    for row in 0..12 {
        for column in [0, 4, 8, 40] {
            let _ = parsed.method_at(Cursor::new(row, column));
        }
    }
}

#[test]
fn truncated_file_does_not_panic() {
    let truncated = "namespace Shop.Tests;\n\npublic class CartTests\n{\n    [Fact]\n    public void Adds() {\n        var x = ";
    let (_dir, path) = dir_with_file("Truncated.cs", truncated);
    let parsed = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&path)
        .expect("parse should succeed for truncated file");

    let _ = parsed.top_level_types();
    let _ = parsed.method_at(Cursor::new(6, 10));
}

#[test]
fn binary_garbage_does_not_panic() {
    let mut parser = SourceParser::new().expect("parser should initialize");
    let parsed = parser
        .parse("\u{0}\u{1}{{{{}}}}}}class;;;namespace")
        .expect("parse should succeed");

    let _ = parsed.top_level_types();
    let _ = parsed.method_at(Cursor::new(0, 5));
}

// === Input errors ===

#[test]
fn non_csharp_file_is_unsupported() {
    let (_dir, path) = dir_with_file("Program.fs", "module Program");
    let result = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&path);

    assert!(matches!(result, Err(Error::UnsupportedFile(p)) if p == path));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let result = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&dir.path().join("Nowhere.cs"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn invalid_utf8_file_is_io_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("Latin1.cs");
    fs::write(&path, [0x63, 0x6c, 0x61, 0x73, 0x73, 0x20, 0xe9, 0xff]).expect("should write file");

    let result = SourceParser::new()
        .expect("parser should initialize")
        .parse_file(&path);

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn malformed_config_is_reported() {
    let (_dir, path) = dir_with_file("pinpoint.yaml", "extra_args: {not: [a list\n");

    let result = Config::load(&path);

    assert!(matches!(result, Err(Error::ConfigFormat(_))));
}
