//! Cursor-to-method resolution.
//!
//! Finds the innermost `method_declaration` whose range contains a cursor and
//! qualifies its name with the enclosing types and namespace:
//!
//! ```text
//! namespace Shop.Tests {            // block-scoped namespace  -> "Shop.Tests"
//!     public class CartTests {      // container               -> "CartTests"
//!         [Fact]
//!         public void Adds() { | }  // method at cursor        -> "Adds"
//!     }
//! }
//!                                      => Shop.Tests.CartTests.Adds
//! ```
//!
//! A file-scoped namespace (`namespace Shop.Tests;`) is a sibling of the
//! types it governs rather than an ancestor, so it is looked up among the
//! root's children when the ancestor walk finds no namespace.

use tracing::{debug, trace};

use crate::error::NotFound;
use crate::languages::csharp::{self, DeclarationKind};
use crate::languages::tree_sitter_utils::contains_cursor;
use crate::types::{Cursor, QualifiedName};

/// Resolve the qualified name of the method enclosing `cursor`.
///
/// `content` must be the text `tree` was parsed from. The cursor uses
/// 0-indexed rows and byte columns (see [`Cursor`]).
///
/// # Errors
///
/// Returns [`NotFound::NotInMethod`] when no method contains the cursor and
/// [`NotFound::UnnamedMethod`] when the enclosing method has no name.
pub fn locate_enclosing_method(
    tree: &tree_sitter::Tree,
    content: &[u8],
    cursor: Cursor,
) -> Result<QualifiedName, NotFound> {
    let root = tree.root_node();

    let Some(method) = innermost_method(&root, cursor) else {
        debug!(row = cursor.row, column = cursor.column, "No method contains cursor");
        return Err(NotFound::NotInMethod);
    };

    let Some(method_name) = csharp::declaration_name(&method, content) else {
        debug!(
            line = method.start_position().row + 1,
            "Method at cursor has no name"
        );
        return Err(NotFound::UnnamedMethod);
    };

    let mut qualified = QualifiedName::leaf(method_name);
    let namespace_found = qualify_with_ancestors(&method, content, &mut qualified);

    if !namespace_found
        && let Some(namespace) = csharp::file_scoped_namespace(&root, content)
    {
        trace!(namespace = %namespace, "Applying file-scoped namespace");
        qualified.prepend(namespace);
    }

    debug!(
        row = cursor.row,
        column = cursor.column,
        name = %qualified,
        "Resolved method at cursor"
    );
    Ok(qualified)
}

/// Depth-first search for the deepest method declaration containing `cursor`.
///
/// Children of a containing node are searched before the node itself is
/// accepted, so a nested match always wins over its ancestor. Among
/// siblings that both contain the cursor the first in source order wins.
/// Because both range ends are inclusive this happens when one method ends
/// on the byte where the next begins (`void A(){}void B(){}`), as well as in
/// malformed trees. Subtrees whose range excludes the cursor are skipped:
/// a node's range encloses all of its descendants.
fn innermost_method<'tree>(
    node: &tree_sitter::Node<'tree>,
    cursor: Cursor,
) -> Option<tree_sitter::Node<'tree>> {
    if !contains_cursor(node, cursor) {
        return None;
    }

    let nested = csharp::children(node)
        .iter()
        .find_map(|child| innermost_method(child, cursor));

    nested.or_else(|| (DeclarationKind::of(node) == DeclarationKind::Method).then_some(*node))
}

/// Prepend the names of every enclosing type and namespace of `method`.
///
/// Returns `true` if a namespace was among the ancestors.
fn qualify_with_ancestors(
    method: &tree_sitter::Node,
    content: &[u8],
    qualified: &mut QualifiedName,
) -> bool {
    let mut namespace_found = false;
    let mut current = method.parent();

    while let Some(ancestor) = current {
        let kind = DeclarationKind::of(&ancestor);
        if kind == DeclarationKind::Type || kind.is_namespace() {
            match csharp::declaration_name(&ancestor, content) {
                Some(name) => {
                    trace!(kind = ?kind, name = %name, "Prepending enclosing declaration");
                    qualified.prepend(name);
                    namespace_found |= kind.is_namespace();
                }
                None => {
                    trace!(
                        node_kind = %ancestor.kind(),
                        line = ancestor.start_position().row + 1,
                        "Skipping unnamed enclosing declaration"
                    );
                }
            }
        }
        current = ancestor.parent();
    }

    namespace_found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_csharp(code: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .expect("tree-sitter-c-sharp language should be valid");
        parser
            .parse(code, None)
            .expect("parsing test code should succeed")
    }

    /// Cursor at the first occurrence of `needle` in `code`.
    fn cursor_at(code: &str, needle: &str) -> Cursor {
        let offset = code
            .find(needle)
            .unwrap_or_else(|| panic!("fixture should contain {needle:?}"));
        Cursor::from_byte_offset(code, offset)
    }

    fn locate(code: &str, needle: &str) -> Result<String, NotFound> {
        let tree = parse_csharp(code);
        locate_enclosing_method(&tree, code.as_bytes(), cursor_at(code, needle))
            .map(|name| name.join())
    }

    #[test]
    fn block_namespace_class_and_method() {
        let code = r"
namespace Shop.Tests
{
    public class CartTests
    {
        [Fact]
        public void AddsItem()
        {
            var cart = new Cart();
        }
    }
}
";
        assert_eq!(
            locate(code, "var cart"),
            Ok("Shop.Tests.CartTests.AddsItem".to_string())
        );
    }

    #[test]
    fn file_scoped_namespace_matches_block_form() {
        let code = r"
namespace Shop.Tests;

public class CartTests
{
    [Fact]
    public void AddsItem()
    {
        var cart = new Cart();
    }
}
";
        assert_eq!(
            locate(code, "var cart"),
            Ok("Shop.Tests.CartTests.AddsItem".to_string())
        );
    }

    #[test]
    fn nested_types_are_ordered_outer_to_inner() {
        let code = r"
namespace N
{
    public class Outer
    {
        public class Inner
        {
            public void Run() { Go(); }
        }
    }
}
";
        assert_eq!(locate(code, "Go()"), Ok("N.Outer.Inner.Run".to_string()));
    }

    #[test]
    fn nested_block_namespaces_each_contribute_a_segment() {
        let code = r"
namespace Outer
{
    namespace Inner
    {
        class A { void M() { Work(); } }
    }
}
";
        assert_eq!(locate(code, "Work()"), Ok("Outer.Inner.A.M".to_string()));
    }

    #[test]
    fn struct_and_record_containers_are_named() {
        let code = r"
public struct Point { public void Move() { Step(); } }
public record Person(string Name) { public void Greet() { Wave(); } }
";
        assert_eq!(locate(code, "Step()"), Ok("Point.Move".to_string()));
        assert_eq!(locate(code, "Wave()"), Ok("Person.Greet".to_string()));
    }

    #[test]
    fn cursor_on_attribute_line_belongs_to_method() {
        let code = r"
class A
{
    [Theory]
    public void Checks(int x) { }
}
";
        assert_eq!(locate(code, "[Theory]"), Ok("A.Checks".to_string()));
    }

    #[test]
    fn cursor_on_method_name_resolves() {
        let code = "class A { public void Checks() { } }";
        assert_eq!(locate(code, "Checks"), Ok("A.Checks".to_string()));
    }

    #[test]
    fn sibling_methods_resolve_independently() {
        let code = r"
class A
{
    void First() { One(); }
    void Second() { Two(); }
}
";
        assert_eq!(locate(code, "One()"), Ok("A.First".to_string()));
        assert_eq!(locate(code, "Two()"), Ok("A.Second".to_string()));
    }

    #[test]
    fn cursor_between_methods_is_not_in_method() {
        let code = r"
class A
{
    void First() { }

    int field;
    void Second() { }
}
";
        assert_eq!(locate(code, "int field"), Err(NotFound::NotInMethod));
    }

    #[test]
    fn cursor_in_namespace_outside_types_is_not_in_method() {
        let code = "namespace N { class A { void M() { } } }";
        assert_eq!(locate(code, "namespace"), Err(NotFound::NotInMethod));
    }

    #[test]
    fn cursor_in_constructor_is_not_in_method() {
        let code = "class A { public A() { Init(); } }";
        assert_eq!(locate(code, "Init()"), Err(NotFound::NotInMethod));
    }

    #[test]
    fn empty_file_is_not_in_method() {
        let tree = parse_csharp("");
        assert_eq!(
            locate_enclosing_method(&tree, b"", Cursor::new(0, 0)),
            Err(NotFound::NotInMethod)
        );
    }

    #[test]
    fn touching_sibling_methods_resolve_to_the_first() {
        let code = "class A { void First(){}void Second(){} }";
        let tree = parse_csharp(code);
        let boundary = code.find("void Second").expect("fixture should contain Second");

        assert_eq!(
            locate_enclosing_method(&tree, code.as_bytes(), Cursor::new(0, boundary))
                .map(|name| name.join()),
            Ok("A.First".to_string())
        );
        assert_eq!(
            locate_enclosing_method(&tree, code.as_bytes(), Cursor::new(0, boundary + 1))
                .map(|name| name.join()),
            Ok("A.Second".to_string())
        );
    }

    #[test]
    fn method_name_missing_from_content_is_unnamed() {
        let code = "class A { void M() { X(); } }";
        let tree = parse_csharp(code);

        // The tree's byte ranges point past the end of the empty text.
        assert_eq!(
            locate_enclosing_method(&tree, b"", cursor_at(code, "X()")),
            Err(NotFound::UnnamedMethod)
        );
    }

    #[test]
    fn cursor_past_end_of_file_is_not_in_method() {
        let code = "class A { void M() { } }\n";
        let tree = parse_csharp(code);
        assert_eq!(
            locate_enclosing_method(&tree, code.as_bytes(), Cursor::new(50, 0)),
            Err(NotFound::NotInMethod)
        );
    }

    #[test]
    fn file_scoped_namespace_not_applied_when_block_namespace_encloses() {
        // Not valid C#, but the walk must still prefer the enclosing namespace.
        let code = r"
namespace FileWide;

namespace Block
{
    class A { void M() { Work(); } }
}
";
        let result = locate(code, "Work()").expect("method should resolve");
        assert!(result.starts_with("Block."), "got {result}");
        assert!(!result.contains("FileWide"), "got {result}");
    }

    #[test]
    fn syntax_errors_elsewhere_do_not_prevent_resolution() {
        let code = r"
class Broken {
    void Oops( {
}

class A
{
    void Works() { Fine(); }
}
";
        let tree = parse_csharp(code);
        let result = locate_enclosing_method(&tree, code.as_bytes(), cursor_at(code, "Fine()"));
        // Recovery may attach `A` in different ways; it must not panic and,
        // when it finds the method, the leaf must be right.
        if let Ok(name) = result {
            assert_eq!(name.leaf_name(), Some("Works"));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let code = "namespace N; class A { void M() { X(); } }";
        let tree = parse_csharp(code);
        let cursor = cursor_at(code, "X()");

        let first = locate_enclosing_method(&tree, code.as_bytes(), cursor);
        let second = locate_enclosing_method(&tree, code.as_bytes(), cursor);
        assert_eq!(first, second);
        assert_eq!(first.map(|n| n.join()), Ok("N.A.M".to_string()));
    }
}
