//! Shared tree-sitter utilities.
//!
//! Text extraction and cursor containment over `tree_sitter::Node`. These
//! are the only two questions the resolvers ask of a node besides its kind,
//! its children and its parent.

use crate::types::Cursor;

/// Get text content of a tree-sitter node.
///
/// Returns `None` if the node's byte range is out of bounds for `content`
/// (the tree was parsed from different text) or is not valid UTF-8.
pub fn node_text(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    let Some(bytes) = content.get(node.byte_range()) else {
        tracing::trace!(
            byte_range = ?node.byte_range(),
            content_len = content.len(),
            node_kind = %node.kind(),
            "Node byte range lies outside the source text"
        );
        return None;
    };

    match std::str::from_utf8(bytes) {
        Ok(s) => Some(s.to_string()),
        Err(e) => {
            tracing::trace!(
                byte_range = ?node.byte_range(),
                error = %e,
                node_kind = %node.kind(),
                "Failed to decode node text as UTF-8"
            );
            None
        }
    }
}

/// Check whether `cursor` lies within the node's range.
///
/// Rows strictly between the start and end rows are contained at any
/// column. On the start row the column must be at or after the start
/// column; on the end row it must be at or before the end column. Both
/// ends are inclusive.
pub fn contains_cursor(node: &tree_sitter::Node, cursor: Cursor) -> bool {
    let start = Cursor::from(node.start_position());
    let end = Cursor::from(node.end_position());

    if cursor.row < start.row || cursor.row > end.row {
        return false;
    }
    if cursor.row == start.row && cursor.column < start.column {
        return false;
    }
    if cursor.row == end.row && cursor.column > end.column {
        return false;
    }
    true
}
