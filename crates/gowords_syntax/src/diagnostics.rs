//! Syntax diagnostics.
//!
//! tree-sitter always produces a tree; a malformed file shows up as `ERROR` and `MISSING` nodes inside it. Lowering
//! turns each of those into a [`SyntaxError`] and collects them into a `Vec`; callers decide how to render them.
//! [`SyntaxError::source_span`] bridges to `miette` for rich rendering.

use crate::ast::Span;
use std::fmt;

/// A syntax error with location information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
}

impl SyntaxError {
    /// Input the grammar could not place (an `ERROR` node), or a file-level structure problem.
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
        }
    }

    /// A token the grammar had to assume (a `MISSING` node).
    pub fn missing(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Missing,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The error location as a `miette` span.
    pub fn source_span(&self) -> miette::SourceSpan {
        (self.span.start, self.span.len()).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Missing,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Missing => write!(f, "incomplete source"),
        }
    }
}

/// Compute `(line, column)` (both 1-based) for a byte offset.
///
/// ## Notes
/// - Columns count characters, not bytes.
/// - Offsets past the end clamp to the last position.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = source[line_start..offset].chars().count() + 1;
    (line, col)
}
