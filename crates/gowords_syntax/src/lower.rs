//! Lowering of a tree-sitter Go tree into the declaration-only [`ast`](crate::ast).
//!
//! Only the children of `source_file` and the specs inside them are visited. A tree holding any `ERROR` or
//! `MISSING` node is rejected before lowering starts.

use tree_sitter::{Node, Tree};

use crate::ast::{
    Decl, DeclKeyword, File, FuncDecl, GenDecl, Ident, ImportName, ImportSpec, Receiver, Span, Spanned, Spec,
    TypeSpec, ValueSpec,
};
use crate::diagnostics::SyntaxError;

/// Longest excerpt of offending source quoted in an error message, in characters.
const EXCERPT_LEN: usize = 24;

/// Lower a parsed tree.
///
/// ## Errors
/// - One error per `ERROR` or `MISSING` node, in source order.
/// - Otherwise, a single error for a missing, misplaced, or repeated package clause, or a declaration without a name.
pub fn lower(tree: &Tree, source: &str) -> Result<File, Vec<SyntaxError>> {
    let root = tree.root_node();
    let errors = collect_errors(root, source);
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "syntax tree contains errors");
        return Err(errors);
    }

    let mut package = None;
    let mut decls = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        // comments
        if child.is_extra() {
            continue;
        }
        if child.kind() == "package_clause" {
            if package.is_some() {
                return Err(vec![SyntaxError::syntax("duplicate package clause", span_of(child))]);
            }
            package = Some(package_name(child, source).map_err(|e| vec![e])?);
            continue;
        }
        if package.is_none() {
            let err = SyntaxError::syntax(
                format!("expected package clause, found {}", describe(child)),
                span_of(child),
            )
            .with_note("a Go source file starts with `package <name>`");
            return Err(vec![err]);
        }
        decls.push(lower_decl(child, source).map_err(|e| vec![e])?);
    }

    match package {
        Some(package) => Ok(File { package, decls }),
        None => Err(vec![SyntaxError::syntax(
            "expected package clause",
            Span::new(source.len(), source.len()),
        )]),
    }
}

/// Every `ERROR` and `MISSING` node below `root`, outermost first, in source order.
fn collect_errors(root: Node<'_>, source: &str) -> Vec<SyntaxError> {
    let mut errors = Vec::new();
    if !root.has_error() {
        return errors;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            errors.push(SyntaxError::missing(format!("missing {}", describe(node)), span_of(node)));
        } else if node.is_error() {
            errors.push(SyntaxError::syntax(format!("unexpected {}", excerpt(node, source)), span_of(node)));
        } else if node.has_error() {
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }

    if errors.is_empty() {
        errors.push(SyntaxError::syntax("malformed source", span_of(root)));
    }
    errors
}

fn package_name(clause: Node<'_>, source: &str) -> Result<Spanned<Ident>, SyntaxError> {
    let mut cursor = clause.walk();
    let name = clause
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")
        .map(|n| ident(n, source));
    name.ok_or_else(|| SyntaxError::syntax("package clause without a name", span_of(clause)))
}

fn lower_decl(node: Node<'_>, source: &str) -> Result<Spanned<Decl>, SyntaxError> {
    let decl = match node.kind() {
        "import_declaration" => Decl::Gen(gen_decl(node, DeclKeyword::Import, source)?),
        "const_declaration" => Decl::Gen(gen_decl(node, DeclKeyword::Const, source)?),
        "var_declaration" => Decl::Gen(gen_decl(node, DeclKeyword::Var, source)?),
        "type_declaration" => Decl::Gen(gen_decl(node, DeclKeyword::Type, source)?),
        "function_declaration" => Decl::Func(FuncDecl {
            receiver: None,
            name: field_name(node, source)?,
        }),
        "method_declaration" => Decl::Func(FuncDecl {
            receiver: node.child_by_field_name("receiver").map(|params| receiver(params, source)),
            name: field_name(node, source)?,
        }),
        kind => {
            tracing::trace!(kind, "top-level node outside the declaration model");
            Decl::Unsupported { kind: kind.to_string() }
        }
    };
    Ok(Spanned::new(decl, span_of(node)))
}

/// Collect the specs of an `import`/`const`/`var`/`type` declaration, looking through `*_spec_list` wrappers.
fn gen_decl(node: Node<'_>, keyword: DeclKeyword, source: &str) -> Result<GenDecl, SyntaxError> {
    let mut grouped = false;
    let mut spec_nodes = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "(" => grouped = true,
            kind if kind.ends_with("_spec_list") => {
                grouped = true;
                let mut inner = child.walk();
                spec_nodes.extend(child.named_children(&mut inner).filter(|n| !n.is_extra()));
            }
            _ if child.is_named() && !child.is_extra() => spec_nodes.push(child),
            _ => {}
        }
    }

    let specs = spec_nodes
        .into_iter()
        .map(|spec| lower_spec(spec, source))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GenDecl {
        keyword,
        grouped,
        specs,
    })
}

fn lower_spec(node: Node<'_>, source: &str) -> Result<Spanned<Spec>, SyntaxError> {
    let spec = match node.kind() {
        "import_spec" => Spec::Import(import_spec(node, source)?),
        "const_spec" | "var_spec" => {
            let mut cursor = node.walk();
            let names = node
                .children_by_field_name("name", &mut cursor)
                .map(|n| ident(n, source))
                .collect();
            Spec::Value(ValueSpec {
                names,
                has_type: node.child_by_field_name("type").is_some(),
                has_values: node.child_by_field_name("value").is_some(),
            })
        }
        "type_spec" => Spec::Type(TypeSpec {
            name: field_name(node, source)?,
            alias: false,
        }),
        "type_alias" => Spec::Type(TypeSpec {
            name: field_name(node, source)?,
            alias: true,
        }),
        kind => Spec::Unsupported { kind: kind.to_string() },
    };
    Ok(Spanned::new(spec, span_of(node)))
}

fn import_spec(node: Node<'_>, source: &str) -> Result<ImportSpec, SyntaxError> {
    let name = node.child_by_field_name("name").map(|n| match n.kind() {
        "dot" => ImportName::Dot(span_of(n)),
        "blank_identifier" => ImportName::Blank(span_of(n)),
        _ => ImportName::Named(ident(n, source)),
    });
    let path = node
        .child_by_field_name("path")
        .ok_or_else(|| SyntaxError::syntax("import without a path", span_of(node)))?;

    Ok(ImportSpec {
        name,
        path: Spanned::new(unquote(text(path, source)).to_string(), span_of(path)),
    })
}

/// Reduce a receiver parameter list to its base type: `(r *T)`, `(T)`, and `(s *Set[K])` all give `T`/`Set`.
fn receiver(params: Node<'_>, source: &str) -> Receiver {
    let mut cursor = params.walk();
    let mut current = params
        .named_children(&mut cursor)
        .find(|n| n.kind() == "parameter_declaration")
        .and_then(|param| param.child_by_field_name("type"));

    let mut receiver = Receiver {
        type_name: None,
        pointer: false,
    };
    while let Some(node) = current {
        current = match node.kind() {
            "pointer_type" => {
                receiver.pointer = true;
                first_named_child(node)
            }
            "parenthesized_type" => first_named_child(node),
            "generic_type" => node.child_by_field_name("type"),
            _ => {
                receiver.type_name = Some(text(node, source).to_string());
                None
            }
        };
    }
    receiver
}

// --- helpers -----------------------------------------------------------------

fn field_name(node: Node<'_>, source: &str) -> Result<Spanned<Ident>, SyntaxError> {
    node.child_by_field_name("name")
        .map(|n| ident(n, source))
        .ok_or_else(|| SyntaxError::syntax(format!("{} without a name", describe(node)), span_of(node)))
}

fn first_named_child<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).next()
}

fn ident(node: Node<'_>, source: &str) -> Spanned<Ident> {
    Spanned::new(text(node, source).to_string(), span_of(node))
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

fn span_of(node: Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// `function declaration` for named nodes, `` `)` `` for tokens.
fn describe(node: Node<'_>) -> String {
    if node.is_named() {
        node.kind().replace('_', " ")
    } else {
        format!("`{}`", node.kind())
    }
}

/// The first line of a node's text, quoted and shortened.
fn excerpt(node: Node<'_>, source: &str) -> String {
    let snippet = text(node, source).trim();
    let line = snippet.lines().next().unwrap_or("");
    if line.is_empty() {
        return "input".to_string();
    }
    let short: String = line.chars().take(EXCERPT_LEN).collect();
    if short.len() < snippet.len() {
        format!("`{short}…`")
    } else {
        format!("`{short}`")
    }
}

fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
        .unwrap_or(literal)
}
