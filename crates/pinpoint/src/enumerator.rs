//! Whole-file type enumeration.
//!
//! Lists the qualified names of the types declared at the top of a file,
//! either directly under the root or directly inside a block-scoped
//! namespace. Nested types are not listed: a filter on the outer type
//! already matches them.

use tracing::{debug, trace};

use crate::languages::csharp::{self, DeclarationKind};
use crate::types::QualifiedName;

/// Enumerate the top-level class, struct and record declarations of a file.
///
/// Only the root's direct children are inspected, in source order:
///
/// - The first file-scoped namespace (`namespace N;`) qualifies every type
///   that follows it. It is a marker, not a container.
/// - A block-scoped namespace (`namespace N { ... }`) qualifies the types
///   declared directly in its body. It is ignored once a file-scoped
///   namespace has been seen. Other declarations inside it, nested
///   namespaces included, are skipped.
/// - A type at the root is qualified by the file-scoped namespace if one
///   has been seen, otherwise it is emitted bare.
///
/// A file without types yields an empty vector.
pub fn enumerate_top_level_types(tree: &tree_sitter::Tree, content: &[u8]) -> Vec<QualifiedName> {
    let root = tree.root_node();
    let mut file_scoped_namespace: Option<String> = None;
    let mut types = Vec::new();

    for child in csharp::children(&root) {
        match DeclarationKind::of(&child) {
            DeclarationKind::FileScopedNamespace if file_scoped_namespace.is_none() => {
                let Some(name) = csharp::declaration_name(&child, content) else {
                    trace!(
                        line = child.start_position().row + 1,
                        "Skipping unnamed file-scoped namespace"
                    );
                    continue;
                };
                trace!(namespace = %name, "Found file-scoped namespace");
                // Some grammar revisions nest the following members inside the
                // declaration instead of leaving them as root siblings.
                collect_types(&csharp::children(&child), Some(name.as_str()), content, &mut types);
                file_scoped_namespace = Some(name);
            }
            DeclarationKind::BlockNamespace if file_scoped_namespace.is_none() => {
                let Some(name) = csharp::declaration_name(&child, content) else {
                    trace!(
                        line = child.start_position().row + 1,
                        "Skipping unnamed namespace"
                    );
                    continue;
                };
                trace!(namespace = %name, "Found block-scoped namespace");
                collect_types(
                    &csharp::namespace_members(&child),
                    Some(name.as_str()),
                    content,
                    &mut types,
                );
            }
            DeclarationKind::Type => {
                collect_types(
                    std::slice::from_ref(&child),
                    file_scoped_namespace.as_deref(),
                    content,
                    &mut types,
                );
            }
            _ => {}
        }
    }

    debug!(type_count = types.len(), "Enumerated top-level types");
    types
}

/// Push the qualified name of every type declaration among `nodes`.
fn collect_types(
    nodes: &[tree_sitter::Node],
    namespace: Option<&str>,
    content: &[u8],
    types: &mut Vec<QualifiedName>,
) {
    for node in nodes {
        if DeclarationKind::of(node) != DeclarationKind::Type {
            continue;
        }
        match csharp::declaration_name(node, content) {
            Some(name) => types.push(QualifiedName::leaf(name).qualified_by(namespace)),
            None => trace!(
                node_kind = %node.kind(),
                line = node.start_position().row + 1,
                "Skipping unnamed type declaration"
            ),
        }
    }
}
