//! Domain types for pinpoint.
//!
//! - **`Cursor`**: a position in tree-sitter's coordinate space
//! - **`QualifiedName`**: dot-joined namespace, container and leaf names
//!
//! ## Coordinates
//!
//! | Type | Row | Column |
//! |------|-----|--------|
//! | `Cursor` | 0-indexed | 0-indexed byte offset within the row |
//! | CLI `--line`/`--column` | 1-indexed | 1-indexed byte offset within the row |
//!
//! `Cursor` matches `tree_sitter::Point` so containment tests compare like
//! with like. Conversion from editor coordinates happens once, at the edge.

use std::fmt;

use serde::{Serialize, Serializer};

/// A cursor position inside a source file.
///
/// Both fields are 0-indexed, matching `tree_sitter::Point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cursor {
    /// Row (0-indexed)
    pub row: usize,
    /// Byte column within the row (0-indexed)
    pub column: usize,
}

impl Cursor {
    /// Create a cursor from 0-indexed coordinates.
    #[must_use]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Create a cursor from editor-style 1-indexed line and column.
    ///
    /// Returns `None` if either coordinate is zero.
    #[must_use]
    pub fn from_one_based(line: usize, column: usize) -> Option<Self> {
        Some(Self {
            row: line.checked_sub(1)?,
            column: column.checked_sub(1)?,
        })
    }

    /// Create a cursor pointing at a byte offset of `source`.
    ///
    /// Offsets past the end of `source` are clamped to its length.
    #[must_use]
    pub fn from_byte_offset(source: &str, offset: usize) -> Self {
        let prefix = &source.as_bytes()[..offset.min(source.len())];
        let row = prefix.iter().filter(|&&b| b == b'\n').count();
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        Self {
            row,
            column: prefix.len() - line_start,
        }
    }
}

impl From<tree_sitter::Point> for Cursor {
    fn from(point: tree_sitter::Point) -> Self {
        Self::new(point.row, point.column)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}

/// A fully-qualified declaration name.
///
/// Segments are stored outermost first: namespace, then containing types
/// from outer to inner, then the leaf (method or type) name. Every stored
/// segment is non-empty; the order is never rearranged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Separator placed between segments.
    pub const SEPARATOR: &str = ".";

    /// Create a name holding a single leaf segment.
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        let mut qualified = Self::default();
        qualified.push(name);
        qualified
    }

    /// Append an inner segment. Blank segments are ignored.
    pub fn push(&mut self, segment: impl Into<String>) {
        if let Some(segment) = Self::normalize(segment.into()) {
            self.segments.push(segment);
        }
    }

    /// Insert an outer segment before all existing ones. Blank segments are ignored.
    pub fn prepend(&mut self, segment: impl Into<String>) {
        if let Some(segment) = Self::normalize(segment.into()) {
            self.segments.insert(0, segment);
        }
    }

    /// Return a copy of this name nested under `outer`.
    #[must_use]
    pub fn qualified_by(mut self, outer: Option<&str>) -> Self {
        if let Some(outer) = outer {
            self.prepend(outer);
        }
        self
    }

    /// The segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The innermost segment (method or type name).
    #[must_use]
    pub fn leaf_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns `true` if no segment has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join the segments with `.`.
    #[must_use]
    pub fn join(&self) -> String {
        self.segments.join(Self::SEPARATOR)
    }

    fn normalize(segment: String) -> Option<String> {
        if segment.trim().is_empty() {
            tracing::trace!("Dropping blank qualified-name segment");
            None
        } else {
            Some(segment)
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.join())
    }
}

impl<S: Into<String>> FromIterator<S> for QualifiedName {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut qualified = Self::default();
        for segment in iter {
            qualified.push(segment);
        }
        qualified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn joins_segments_with_dots() {
        let name: QualifiedName = ["MyApp.Tests", "CalculatorTests", "Adds"]
            .into_iter()
            .collect();

        assert_eq!(name.to_string(), "MyApp.Tests.CalculatorTests.Adds");
        assert_eq!(name.leaf_name(), Some("Adds"));
    }

    #[test]
    fn prepend_puts_outer_segments_first() {
        let mut name = QualifiedName::leaf("Run");
        name.prepend("Inner");
        name.prepend("Outer");
        name.prepend("Ns");

        assert_eq!(name.segments(), ["Ns", "Outer", "Inner", "Run"]);
    }

    #[test]
    fn blank_segments_are_dropped() {
        let mut name = QualifiedName::leaf("");
        assert!(name.is_empty());

        name.push("Run");
        name.prepend("  ");
        assert_eq!(name.join(), "Run");
    }

    #[test]
    fn qualified_by_none_leaves_name_bare() {
        let name = QualifiedName::leaf("Widget").qualified_by(None);
        assert_eq!(name.join(), "Widget");

        let name = QualifiedName::leaf("Widget").qualified_by(Some("Shop"));
        assert_eq!(name.join(), "Shop.Widget");
    }

    #[test]
    fn serializes_as_joined_string() {
        let name: QualifiedName = ["A", "B"].into_iter().collect();
        let json = serde_json::to_string(&name).expect("serialization should succeed");
        assert_eq!(json, "\"A.B\"");
    }

    #[rstest]
    #[case::first_line_first_column(1, 1, Some(Cursor::new(0, 0)))]
    #[case::later_position(12, 5, Some(Cursor::new(11, 4)))]
    #[case::zero_line(0, 3, None)]
    #[case::zero_column(3, 0, None)]
    fn cursor_from_one_based(
        #[case] line: usize,
        #[case] column: usize,
        #[case] expected: Option<Cursor>,
    ) {
        assert_eq!(Cursor::from_one_based(line, column), expected);
    }

    #[rstest]
    #[case::start(0, Cursor::new(0, 0))]
    #[case::middle_of_first_line(2, Cursor::new(0, 2))]
    #[case::at_newline(3, Cursor::new(0, 3))]
    #[case::after_newline(4, Cursor::new(1, 0))]
    #[case::second_line(6, Cursor::new(1, 2))]
    #[case::past_end(100, Cursor::new(1, 3))]
    fn cursor_from_byte_offset(#[case] offset: usize, #[case] expected: Cursor) {
        assert_eq!(Cursor::from_byte_offset("abc\ndef", offset), expected);
    }

    #[test]
    fn cursor_displays_one_based() {
        assert_eq!(Cursor::new(0, 0).to_string(), "1:1");
        assert_eq!(Cursor::new(9, 4).to_string(), "10:5");
    }
}
