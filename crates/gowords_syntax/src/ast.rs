//! Syntax tree for the top level of one Go source file.
//!
//! Only what sits at file scope is modelled: the package clause and the `import`, `const`, `var`, `type`, and `func`
//! declarations, each reduced to the names it declares. Types, initializers, signatures, and bodies are not kept.
//!
//! [`Decl`] and [`Spec`] are `#[non_exhaustive]`: consumers outside this crate must handle unknown shapes explicitly.
//! Grammar nodes with no place in this model are kept as `Unsupported` and carry their tree-sitter node kind.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier as written in the source.
pub type Ident = String;

/// One parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    /// Name from the `package` clause.
    pub package: Spanned<Ident>,
    pub decls: Vec<Spanned<Decl>>,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Decl {
    /// `import`, `const`, `var`, or `type`, possibly grouped with parentheses.
    Gen(GenDecl),
    /// Function or method.
    Func(FuncDecl),
    /// Anything else the grammar accepts at file scope, such as a bare statement.
    Unsupported { kind: String },
}

/// The keyword that introduces a [`GenDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKeyword {
    Import,
    Const,
    Var,
    Type,
}

impl DeclKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKeyword::Import => "import",
            DeclKeyword::Const => "const",
            DeclKeyword::Var => "var",
            DeclKeyword::Type => "type",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub keyword: DeclKeyword,
    /// `true` for the `keyword ( ... )` form.
    pub grouped: bool,
    pub specs: Vec<Spanned<Spec>>,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Spec {
    Import(ImportSpec),
    /// `const` and `var` specs.
    Value(ValueSpec),
    Type(TypeSpec),
    Unsupported { kind: String },
}

/// Local name given to an import.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportName {
    /// `import name "path"`
    Named(Spanned<Ident>),
    /// `import . "path"`
    Dot(Span),
    /// `import _ "path"`
    Blank(Span),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub name: Option<ImportName>,
    /// Literal contents without quotes.
    pub path: Spanned<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub names: Vec<Spanned<Ident>>,
    pub has_type: bool,
    pub has_values: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: Spanned<Ident>,
    /// `type A = B`
    pub alias: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub receiver: Option<Receiver>,
    pub name: Spanned<Ident>,
}

/// Method receiver, reduced to its base type.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    /// `T` in `(r *T)`, `(T)`, or `(s T[K, V])`.
    pub type_name: Option<Ident>,
    pub pointer: bool,
}

// ============================================================================
// Display (one line per spec; used by the `--parse` debug dump)
// ============================================================================

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {}", self.package.node)?;
        for decl in &self.decls {
            write!(f, "{}", decl.node)?;
        }
        Ok(())
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Gen(gen_decl) => {
                for spec in &gen_decl.specs {
                    writeln!(f, "{} {}", gen_decl.keyword.as_str(), spec.node)?;
                }
                Ok(())
            }
            Decl::Func(func) => writeln!(f, "{func}"),
            Decl::Unsupported { kind } => writeln!(f, "? {kind}"),
        }
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::Import(import) => match &import.name {
                Some(ImportName::Named(name)) => write!(f, "{} {:?}", name.node, import.path.node),
                Some(ImportName::Dot(_)) => write!(f, ". {:?}", import.path.node),
                Some(ImportName::Blank(_)) => write!(f, "_ {:?}", import.path.node),
                None => write!(f, "{:?}", import.path.node),
            },
            Spec::Value(value) => {
                let names: Vec<&str> = value.names.iter().map(|n| n.node.as_str()).collect();
                write!(f, "{}", names.join(", "))
            }
            Spec::Type(ty) => {
                write!(f, "{}", ty.name.node)?;
                if ty.alias {
                    write!(f, " =")?;
                }
                Ok(())
            }
            Spec::Unsupported { kind } => write!(f, "? {kind}"),
        }
    }
}

impl fmt::Display for FuncDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func ")?;
        if let Some(recv) = &self.receiver {
            let star = if recv.pointer { "*" } else { "" };
            write!(f, "({star}{}) ", recv.type_name.as_deref().unwrap_or("?"))?;
        }
        write!(f, "{}", self.name.node)
    }
}
