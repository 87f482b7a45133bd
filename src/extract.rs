//! Identifier extraction from parsed Go files
//!
//! Walks the top-level declarations of one [`File`] and collects the names they introduce:
//! - import specs: the local alias, when it is a plain identifier
//! - const/var specs: every declared name
//! - type specs: the type name
//! - func decls: the function or method name
//!
//! Blank (`_`) imports and imports without an alias contribute nothing.
//!
//! ## Notes
//! - `Decl` and `Spec` are non-exhaustive. A shape this module does not know is an error, never silently skipped.
//! - A dot import (`import . "path"`) and any name containing `.` are rejected as qualified identifiers: a
//!   declaration must introduce a plain identifier.

use gowords_syntax::ast::{Decl, File, ImportName, Span, Spanned, Spec};
use thiserror::Error;

/// Errors raised while walking declarations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("unsupported top-level declaration")]
    UnsupportedDecl { span: Span },

    #[error("unsupported `{keyword}` spec")]
    UnsupportedSpec { keyword: &'static str, span: Span },

    #[error("qualified identifier `{name}` where a plain name was expected")]
    QualifiedIdent { name: String, span: Span },
}

impl ExtractError {
    /// Location of the offending declaration or name.
    pub fn span(&self) -> Span {
        match self {
            ExtractError::UnsupportedDecl { span }
            | ExtractError::UnsupportedSpec { span, .. }
            | ExtractError::QualifiedIdent { span, .. } => *span,
        }
    }
}

/// Collect every identifier declared at file scope, in source order.
///
/// ## Errors
/// - [`ExtractError::UnsupportedDecl`] / [`ExtractError::UnsupportedSpec`] for unknown declaration shapes.
/// - [`ExtractError::QualifiedIdent`] for a dot import or a declared name containing `.`.
pub fn extract(file: &File) -> Result<Vec<Spanned<String>>, ExtractError> {
    let mut names = Vec::new();

    for decl in &file.decls {
        match &decl.node {
            Decl::Gen(gen_decl) => {
                for spec in &gen_decl.specs {
                    match &spec.node {
                        Spec::Import(import) => match &import.name {
                            Some(ImportName::Named(alias)) => names.push(alias.clone()),
                            Some(ImportName::Dot(span)) => {
                                return Err(ExtractError::QualifiedIdent {
                                    name: ".".to_string(),
                                    span: *span,
                                });
                            }
                            Some(ImportName::Blank(_)) | None => {}
                        },
                        Spec::Value(value) => names.extend(value.names.iter().cloned()),
                        Spec::Type(ty) => names.push(ty.name.clone()),
                        _ => {
                            return Err(ExtractError::UnsupportedSpec {
                                keyword: gen_decl.keyword.as_str(),
                                span: spec.span,
                            });
                        }
                    }
                }
            }
            Decl::Func(func) => names.push(func.name.clone()),
            _ => return Err(ExtractError::UnsupportedDecl { span: decl.span }),
        }
    }

    if let Some(qualified) = names.iter().find(|n| n.node.contains('.')) {
        return Err(ExtractError::QualifiedIdent {
            name: qualified.node.clone(),
            span: qualified.span,
        });
    }

    Ok(names)
}

/// Return `true` if `name` is exported: its first character is an uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// [`extract`], keeping only exported names.
pub fn exported_identifiers(file: &File) -> Result<Vec<Spanned<String>>, ExtractError> {
    let names = extract(file)?;
    Ok(names
        .into_iter()
        .filter(|name| {
            let exported = is_exported(&name.node);
            if !exported {
                tracing::trace!(name = %name.node, "skipping unexported identifier");
            }
            exported
        })
        .collect())
}
