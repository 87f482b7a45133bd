//! Go syntax frontend for `gowords`: the tree-sitter Go grammar, lowered to a declarations-only AST.
//!
//! ## Notes
//! - Parsing is done by [`tree_sitter`] with the `tree-sitter-go` grammar. This crate only reads the children of the
//!   `source_file` root: the package clause and every top-level declaration. Bodies, types, and initializers are
//!   never visited.
//! - A tree with any `ERROR` or `MISSING` node is a failed parse; nothing is lowered from it.
//!
//! ## Examples
//! ```rust
//! use gowords_syntax::{ast::Decl, parse_source};
//!
//! let file = parse_source("package demo\n\nfunc Hello() {}\n").unwrap();
//! assert_eq!(file.package.node, "demo");
//! assert!(matches!(file.decls[0].node, Decl::Func(_)));
//! ```

pub mod ast;
pub mod diagnostics;
mod lower;

use ast::Span;
use diagnostics::SyntaxError;
use tree_sitter::{Language, Parser, Tree};

pub use tree_sitter::Node;

/// The Go grammar.
pub fn language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Run the Go grammar over `source` and return the raw syntax tree, error nodes included.
///
/// ## Errors
/// - The grammar cannot be loaded (an ABI mismatch between `tree-sitter` and `tree-sitter-go`).
/// - The parser returns no tree.
pub fn parse_tree(source: &str) -> Result<Tree, SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language())
        .map_err(|e| SyntaxError::syntax(format!("cannot load the Go grammar: {e}"), Span::default()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| SyntaxError::syntax("the Go parser produced no tree", Span::default()))
}

/// Parse one Go source file and lower its top level.
///
/// ## Errors
/// - Every `ERROR` and `MISSING` node in the tree, if there are any.
/// - Otherwise a file-level problem: no package clause, a repeated one, or one that is not first.
pub fn parse_source(source: &str) -> Result<ast::File, Vec<SyntaxError>> {
    let tree = parse_tree(source).map_err(|e| vec![e])?;
    lower::lower(&tree, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_keeps_error_nodes() {
        let tree = parse_tree("package demo\n\nfunc (\n").unwrap();
        assert!(tree.root_node().has_error());
        assert_eq!(tree.root_node().kind(), "source_file");
    }

    #[test]
    fn test_grammar_knows_declaration_kinds() {
        let language = language();
        for kind in ["package_clause", "function_declaration", "method_declaration", "type_alias", "var_spec"] {
            assert_ne!(language.id_for_node_kind(kind, true), 0, "{kind}");
        }
    }
}
