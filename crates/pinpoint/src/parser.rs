//! Tree-sitter parsing coordination.
//!
//! Turns C# source text into syntax trees for the resolvers.
//!
//! ## Responsibilities
//!
//! - Hold a configured tree-sitter parser for C#
//! - Parse source text or files into a [`ParsedFile`]
//! - Report a missing tree as [`Error::ParserUnavailable`] rather than
//!   letting resolvers see an absent tree
//!
//! ## Design
//!
//! Tree-sitter parsers are stateful and cheap to reuse, so one
//! `SourceParser` can parse many files in turn. A `ParsedFile` pairs the
//! tree with the exact text it came from; resolvers need both.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::enumerator::enumerate_top_level_types;
use crate::error::{Error, NotFound, Result};
use crate::languages::csharp::CSharpLanguage;
use crate::locator::locate_enclosing_method;
use crate::types::{Cursor, QualifiedName};

/// A reusable C# parser.
pub struct SourceParser {
    parser: tree_sitter::Parser,
}

impl SourceParser {
    /// Create a parser configured for C#.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParserUnavailable`] if the grammar is incompatible
    /// with the linked tree-sitter runtime.
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&CSharpLanguage.tree_sitter_language())
            .map_err(|e| Error::ParserUnavailable(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse C# source text.
    ///
    /// Syntax errors do not fail the parse; tree-sitter recovers and the
    /// resolvers work on whatever structure survives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParserUnavailable`] if tree-sitter produced no tree.
    pub fn parse(&mut self, source: impl Into<String>) -> Result<ParsedFile> {
        self.parse_with_path(source.into(), None)
    }

    /// Read and parse a C# file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFile`] for files without a `.cs`
    /// extension, [`Error::Io`] if the file cannot be read, and
    /// [`Error::ParserUnavailable`] if no tree was produced.
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile> {
        let is_csharp = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| CSharpLanguage.handles_extension(ext));
        if !is_csharp {
            return Err(Error::UnsupportedFile(path.to_path_buf()));
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", path.display()),
            ))
        })?;

        self.parse_with_path(source, Some(path.to_path_buf()))
    }

    fn parse_with_path(&mut self, source: String, path: Option<PathBuf>) -> Result<ParsedFile> {
        let Some(tree) = self.parser.parse(&source, None) else {
            return Err(Error::ParserUnavailable(match &path {
                Some(p) => format!("tree-sitter produced no tree for {}", p.display()),
                None => "tree-sitter produced no tree".to_string(),
            }));
        };

        if tree.root_node().has_error() {
            warn!(
                path = ?path,
                "Source contains syntax errors; results may be incomplete"
            );
        }
        debug!(path = ?path, bytes = source.len(), "Parsed C# source");

        Ok(ParsedFile { path, source, tree })
    }
}

/// A parsed C# source file.
///
/// Immutable once created: re-parse after edits to get fresh results.
pub struct ParsedFile {
    path: Option<PathBuf>,
    source: String,
    tree: tree_sitter::Tree,
}

impl ParsedFile {
    /// The file this was read from, if it came from disk.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The source text the tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The syntax tree.
    #[must_use]
    pub fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns `true` if tree-sitter had to recover from syntax errors.
    #[must_use]
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Qualified name of the method enclosing `cursor`.
    ///
    /// # Errors
    ///
    /// See [`locate_enclosing_method`].
    pub fn method_at(&self, cursor: Cursor) -> std::result::Result<QualifiedName, NotFound> {
        locate_enclosing_method(&self.tree, self.source.as_bytes(), cursor)
    }

    /// Qualified names of the file's top-level types, in source order.
    #[must_use]
    pub fn top_level_types(&self) -> Vec<QualifiedName> {
        enumerate_top_level_types(&self.tree, self.source.as_bytes())
    }
}
