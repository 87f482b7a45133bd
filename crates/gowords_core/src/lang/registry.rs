//! Shareable metadata for `gowords_core::lang` registries.
//!
//! Every vocabulary in `gowords_core::lang` is a `const` table of small `Copy` records. This submodule provides the
//! metadata types those tables share.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; syntax rules are enforced by the Go grammar in `gowords_syntax`.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::builtins`]
//! - [`crate::lang::extras`]

use std::fmt;

/// The Go release a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use gowords_core::lang::registry::Since;
///
/// assert_eq!(Since(1, 18).to_string(), "go1.18");
/// assert!(Since(1, 0) < Since(1, 21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl Since {
    /// Go 1.0, the baseline for most of the language.
    pub const GO1: Since = Since(1, 0);
}

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "go{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Registries that need extra per-item data (e.g. keyword category, builtin kind) wrap or extend this shape.
///
/// ## Notes
/// - `description` is intentionally mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id, Kind> {
    pub id: Id,
    pub canonical: &'static str,
    pub kind: Kind,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
}
