//! Error types for pinpoint operations.
//!
//! Failures fall into two groups:
//!
//! - **`Error`**: the operation could not run at all (no parser, unreadable
//!   file, bad configuration). Reported once and not retried.
//! - **`NotFound`**: the operation ran but the tree holds nothing to report
//!   at the requested position. This is an expected outcome that callers
//!   surface as a warning and then stop.
//!
//! Malformed syntax trees are neither: resolution returns its best-effort
//! first match and never fails because of `ERROR` nodes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pinpoint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for pinpoint operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No syntax tree is available for the source.
    ///
    /// Either the C# grammar could not be loaded or tree-sitter declined to
    /// produce a tree. Callers must supply a valid tree before retrying.
    #[error("parser unavailable: {0}")]
    ParserUnavailable(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not C# source
    #[error("unsupported file: {} (expected a .cs file)", .0.display())]
    UnsupportedFile(PathBuf),

    /// Configuration file could not be parsed
    #[error("invalid configuration file: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// Output could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a method lookup produced no name.
///
/// Both reasons are recoverable: the user moved the cursor somewhere
/// unexpected, or the file is mid-edit and the declaration lost its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NotFound {
    /// No method declaration's range contains the cursor.
    #[error("cursor is not inside a method")]
    NotInMethod,

    /// A method contains the cursor but has no discoverable name.
    #[error("method at cursor has no name")]
    UnnamedMethod,
}

impl NotFound {
    /// Stable machine-readable identifier for JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInMethod => "not_in_method",
            Self::UnnamedMethod => "unnamed_method",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_distinguish_reasons() {
        assert_eq!(
            NotFound::NotInMethod.to_string(),
            "cursor is not inside a method"
        );
        assert_eq!(
            NotFound::UnnamedMethod.to_string(),
            "method at cursor has no name"
        );
    }

    #[test]
    fn unsupported_file_display_includes_path() {
        let error = Error::UnsupportedFile(PathBuf::from("src/Program.fs"));

        let display = error.to_string();
        assert!(display.contains("src/Program.fs"));
        assert!(display.contains(".cs"));
    }
}
