//! Fatal harvest errors.
//!
//! Every variant aborts the run. The CLI renders them through a [`miette::Report`], so parse failures show the file
//! name, the offending line, and a label.

use std::path::{Path, PathBuf};

use gowords_syntax::diagnostics::{ErrorKind, SyntaxError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::extract::ExtractError;

/// Errors that abort a harvest run
#[derive(Debug, Error, Diagnostic)]
pub enum HarvestError {
    #[error("cannot list library packages")]
    #[diagnostic(
        code(gowords::list_packages),
        help("is the `go` tool installed? Use --go to point at a specific binary")
    )]
    ListPackages(#[source] CatalogError),

    #[error("cannot resolve package `{import_path}`")]
    #[diagnostic(code(gowords::resolve))]
    Resolve {
        import_path: String,
        #[source]
        source: CatalogError,
    },

    #[error("cannot read `{}`", path.display())]
    #[diagnostic(code(gowords::read_source))]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is too large ({size} bytes, max {max} bytes)", path.display())]
    #[diagnostic(code(gowords::source_too_large))]
    SourceTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{kind} in `{file}`")]
    #[diagnostic(code(gowords::parse))]
    Parse {
        file: String,
        kind: ErrorKind,
        #[source_code]
        source_code: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
        #[help]
        help: Option<String>,
    },

    #[error("{reason} in `{file}`")]
    #[diagnostic(code(gowords::extract), help("only plain top-level declarations are supported"))]
    Extract {
        file: String,
        reason: ExtractError,
        #[source_code]
        source_code: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl HarvestError {
    /// Build a parse failure from the syntax errors of one file.
    ///
    /// The first error is labelled in the source; the rest are summarized in the help text.
    pub fn parse(path: &Path, source: String, errors: Vec<SyntaxError>) -> Self {
        let file = path.display().to_string();
        let mut errors = errors.into_iter();
        let Some(first) = errors.next() else {
            return HarvestError::Parse {
                source_code: NamedSource::new(&file, source),
                file,
                kind: ErrorKind::Syntax,
                span: (0, 0).into(),
                reason: "unknown syntax error".to_string(),
                help: None,
            };
        };

        let remaining = errors.count();
        let mut help: Vec<String> = first.notes.clone();
        if remaining > 0 {
            help.push(format!(
                "{remaining} more error{} in this file",
                if remaining == 1 { "" } else { "s" }
            ));
        }

        HarvestError::Parse {
            source_code: NamedSource::new(&file, source),
            file,
            kind: first.kind,
            span: first.source_span(),
            reason: first.message,
            help: (!help.is_empty()).then(|| help.join("\n")),
        }
    }

    /// Build an extraction failure pointing into `source`.
    pub fn extract(path: &Path, source: String, reason: ExtractError) -> Self {
        let file = path.display().to_string();
        let span = reason.span();
        HarvestError::Extract {
            source_code: NamedSource::new(&file, source),
            file,
            span: (span.start, span.len()).into(),
            reason,
        }
    }
}
