//! C# grammar knowledge for pinpoint.
//!
//! Node kind constants, declaration classification and the name queries the
//! resolvers run against tree-sitter-c-sharp trees.

use super::tree_sitter_utils::node_text;

/// Tree-sitter node kind constants for C# grammar.
///
/// These match the node types defined in tree-sitter-c-sharp. Using constants
/// prevents typos and makes supported node types explicit.
pub mod node_kinds {
    // Type declarations
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const STRUCT_DECLARATION: &str = "struct_declaration";
    pub const RECORD_DECLARATION: &str = "record_declaration";

    // Members
    pub const METHOD_DECLARATION: &str = "method_declaration";

    // Namespaces
    pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";
    pub const FILE_SCOPED_NAMESPACE_DECLARATION: &str = "file_scoped_namespace_declaration";

    // Structure
    pub const DECLARATION_LIST: &str = "declaration_list";
}

/// Field names used by the C# grammar.
mod fields {
    pub const NAME: &str = "name";
    pub const BODY: &str = "body";
}

/// C# language support.
pub struct CSharpLanguage;

impl CSharpLanguage {
    /// File extensions this language handles.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        &["cs"]
    }

    /// Returns `true` if `ext` (without the dot) names a C# source file.
    #[must_use]
    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    /// Get the tree-sitter language for parsing.
    #[must_use]
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_c_sharp::LANGUAGE.into()
    }
}

/// Classification of a node by its kind tag.
///
/// Only the kinds that take part in name resolution are distinguished;
/// everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `method_declaration`
    Method,
    /// `class_declaration`, `struct_declaration` or `record_declaration`
    Type,
    /// `namespace N { ... }`
    BlockNamespace,
    /// `namespace N;`
    FileScopedNamespace,
    /// Any other node
    Other,
}

impl DeclarationKind {
    /// Classify a node.
    #[must_use]
    pub fn of(node: &tree_sitter::Node) -> Self {
        Self::from_kind(node.kind())
    }

    /// Classify a raw node kind string.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        use node_kinds::{
            CLASS_DECLARATION, FILE_SCOPED_NAMESPACE_DECLARATION, METHOD_DECLARATION,
            NAMESPACE_DECLARATION, RECORD_DECLARATION, STRUCT_DECLARATION,
        };

        match kind {
            METHOD_DECLARATION => Self::Method,
            CLASS_DECLARATION | STRUCT_DECLARATION | RECORD_DECLARATION => Self::Type,
            NAMESPACE_DECLARATION => Self::BlockNamespace,
            FILE_SCOPED_NAMESPACE_DECLARATION => Self::FileScopedNamespace,
            _ => Self::Other,
        }
    }

    /// Returns `true` for either namespace form.
    #[must_use]
    pub fn is_namespace(self) -> bool {
        matches!(self, Self::BlockNamespace | Self::FileScopedNamespace)
    }
}

/// Extract the name of a method, type or namespace declaration.
///
/// Reads the declaration's `name` field. Namespace names may be qualified
/// (`MyApp.Tests`); they come back as one segment with any interior
/// whitespace removed. Returns `None` when the field is missing or empty,
/// as happens for declarations tree-sitter recovered from syntax errors.
pub fn declaration_name(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    let name_node = node.child_by_field_name(fields::NAME)?;
    let text = node_text(&name_node, content)?;
    let name: String = text.split_whitespace().collect();

    if name.is_empty() {
        tracing::trace!(
            node_kind = %node.kind(),
            line = node.start_position().row + 1,
            "Declaration has an empty name"
        );
        return None;
    }
    Some(name)
}

/// Direct member declarations of a block-scoped namespace.
///
/// Returns the children of the namespace's `body` declaration list, or an
/// empty vector if the body is missing.
pub fn namespace_members<'tree>(
    namespace: &tree_sitter::Node<'tree>,
) -> Vec<tree_sitter::Node<'tree>> {
    let body = namespace
        .child_by_field_name(fields::BODY)
        .or_else(|| {
            children(namespace)
                .into_iter()
                .find(|child| child.kind() == node_kinds::DECLARATION_LIST)
        });

    body.map(|body| children(&body)).unwrap_or_default()
}

/// Direct children of `node`, in source order.
pub fn children<'tree>(node: &tree_sitter::Node<'tree>) -> Vec<tree_sitter::Node<'tree>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
}

/// Find the first file-scoped namespace among the root's direct children.
///
/// File-scoped namespaces are siblings of the declarations they govern, so
/// only the root level is searched.
pub fn file_scoped_namespace(root: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    children(root)
        .into_iter()
        .find(|child| DeclarationKind::of(child) == DeclarationKind::FileScopedNamespace)
        .and_then(|namespace| declaration_name(&namespace, content))
}
