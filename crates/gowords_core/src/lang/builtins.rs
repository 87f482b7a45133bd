//! Predeclared identifier vocabulary of Go (the `builtin` pseudo-package).
//!
//! These names are not reserved (they can be shadowed), but every Go program sees them in the universe scope, so they
//! belong in the dictionary.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Entries record the Go release that introduced them; `any`, `comparable`, `clear`, `min`, and `max` are newer
//!   than Go 1.0.
//!
//! ## Examples
//! ```rust
//! use gowords_core::lang::builtins::{self, BuiltinId, BuiltinKind};
//!
//! assert_eq!(builtins::from_str("append"), Some(BuiltinId::Append));
//! assert_eq!(builtins::kind(BuiltinId::Iota), BuiltinKind::Constant);
//! ```

use super::registry::{LangItemInfo, Since, Stability};

/// Stable identifier for a predeclared identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinId {
    // Constants and the zero value
    True,
    False,
    Iota,
    Nil,

    // Functions
    Append,
    Cap,
    Clear,
    Close,
    Complex,
    Copy,
    Delete,
    Imag,
    Len,
    Make,
    Max,
    Min,
    New,
    Panic,
    Print,
    Println,
    Real,
    Recover,

    // Types
    Any,
    Bool,
    Byte,
    Comparable,
    Complex128,
    Complex64,
    Error,
    Float32,
    Float64,
    Int,
    Int16,
    Int32,
    Int64,
    Int8,
    Rune,
    String,
    Uint,
    Uint16,
    Uint32,
    Uint64,
    Uint8,
    Uintptr,
}

/// What a predeclared identifier denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Constant,
    ZeroValue,
    Function,
    Type,
}

/// Metadata for a predeclared identifier.
pub type BuiltinInfo = LangItemInfo<BuiltinId, BuiltinKind>;

/// Registry of all predeclared identifiers.
pub const BUILTINS: &[BuiltinInfo] = &[
    info(BuiltinId::True, "true", BuiltinKind::Constant, "Untyped boolean true.", Since::GO1),
    info(BuiltinId::False, "false", BuiltinKind::Constant, "Untyped boolean false.", Since::GO1),
    info(
        BuiltinId::Iota,
        "iota",
        BuiltinKind::Constant,
        "Index of the current const spec.",
        Since::GO1,
    ),
    info(
        BuiltinId::Nil,
        "nil",
        BuiltinKind::ZeroValue,
        "Zero value for pointer, channel, func, interface, map, or slice types.",
        Since::GO1,
    ),
    info(
        BuiltinId::Append,
        "append",
        BuiltinKind::Function,
        "Append elements to a slice.",
        Since::GO1,
    ),
    info(BuiltinId::Cap, "cap", BuiltinKind::Function, "Capacity of a value.", Since::GO1),
    info(
        BuiltinId::Clear,
        "clear",
        BuiltinKind::Function,
        "Delete all map entries or zero all slice elements.",
        Since(1, 21),
    ),
    info(BuiltinId::Close, "close", BuiltinKind::Function, "Close a channel.", Since::GO1),
    info(
        BuiltinId::Complex,
        "complex",
        BuiltinKind::Function,
        "Construct a complex value from two floats.",
        Since::GO1,
    ),
    info(
        BuiltinId::Copy,
        "copy",
        BuiltinKind::Function,
        "Copy elements between slices.",
        Since::GO1,
    ),
    info(BuiltinId::Delete, "delete", BuiltinKind::Function, "Delete a map entry.", Since::GO1),
    info(
        BuiltinId::Imag,
        "imag",
        BuiltinKind::Function,
        "Imaginary part of a complex value.",
        Since::GO1,
    ),
    info(BuiltinId::Len, "len", BuiltinKind::Function, "Length of a value.", Since::GO1),
    info(
        BuiltinId::Make,
        "make",
        BuiltinKind::Function,
        "Allocate and initialize a slice, map, or channel.",
        Since::GO1,
    ),
    info(BuiltinId::Max, "max", BuiltinKind::Function, "Largest of ordered values.", Since(1, 21)),
    info(BuiltinId::Min, "min", BuiltinKind::Function, "Smallest of ordered values.", Since(1, 21)),
    info(
        BuiltinId::New,
        "new",
        BuiltinKind::Function,
        "Allocate a zeroed value and return a pointer to it.",
        Since::GO1,
    ),
    info(BuiltinId::Panic, "panic", BuiltinKind::Function, "Stop normal execution.", Since::GO1),
    info(
        BuiltinId::Print,
        "print",
        BuiltinKind::Function,
        "Bootstrap printing to standard error.",
        Since::GO1,
    ),
    info(
        BuiltinId::Println,
        "println",
        BuiltinKind::Function,
        "Bootstrap printing with spaces and a newline.",
        Since::GO1,
    ),
    info(
        BuiltinId::Real,
        "real",
        BuiltinKind::Function,
        "Real part of a complex value.",
        Since::GO1,
    ),
    info(
        BuiltinId::Recover,
        "recover",
        BuiltinKind::Function,
        "Regain control of a panicking goroutine.",
        Since::GO1,
    ),
    info(BuiltinId::Any, "any", BuiltinKind::Type, "Alias for interface{}.", Since(1, 18)),
    info(BuiltinId::Bool, "bool", BuiltinKind::Type, "Boolean type.", Since::GO1),
    info(BuiltinId::Byte, "byte", BuiltinKind::Type, "Alias for uint8.", Since::GO1),
    info(
        BuiltinId::Comparable,
        "comparable",
        BuiltinKind::Type,
        "Constraint satisfied by comparable types.",
        Since(1, 18),
    ),
    info(
        BuiltinId::Complex128,
        "complex128",
        BuiltinKind::Type,
        "Complex numbers with float64 parts.",
        Since::GO1,
    ),
    info(
        BuiltinId::Complex64,
        "complex64",
        BuiltinKind::Type,
        "Complex numbers with float32 parts.",
        Since::GO1,
    ),
    info(
        BuiltinId::Error,
        "error",
        BuiltinKind::Type,
        "Conventional error interface.",
        Since::GO1,
    ),
    info(BuiltinId::Float32, "float32", BuiltinKind::Type, "IEEE-754 32-bit float.", Since::GO1),
    info(BuiltinId::Float64, "float64", BuiltinKind::Type, "IEEE-754 64-bit float.", Since::GO1),
    info(BuiltinId::Int, "int", BuiltinKind::Type, "Signed machine integer.", Since::GO1),
    info(BuiltinId::Int16, "int16", BuiltinKind::Type, "Signed 16-bit integer.", Since::GO1),
    info(BuiltinId::Int32, "int32", BuiltinKind::Type, "Signed 32-bit integer.", Since::GO1),
    info(BuiltinId::Int64, "int64", BuiltinKind::Type, "Signed 64-bit integer.", Since::GO1),
    info(BuiltinId::Int8, "int8", BuiltinKind::Type, "Signed 8-bit integer.", Since::GO1),
    info(BuiltinId::Rune, "rune", BuiltinKind::Type, "Alias for int32.", Since::GO1),
    info(BuiltinId::String, "string", BuiltinKind::Type, "UTF-8 byte string.", Since::GO1),
    info(BuiltinId::Uint, "uint", BuiltinKind::Type, "Unsigned machine integer.", Since::GO1),
    info(BuiltinId::Uint16, "uint16", BuiltinKind::Type, "Unsigned 16-bit integer.", Since::GO1),
    info(BuiltinId::Uint32, "uint32", BuiltinKind::Type, "Unsigned 32-bit integer.", Since::GO1),
    info(BuiltinId::Uint64, "uint64", BuiltinKind::Type, "Unsigned 64-bit integer.", Since::GO1),
    info(BuiltinId::Uint8, "uint8", BuiltinKind::Type, "Unsigned 8-bit integer.", Since::GO1),
    info(
        BuiltinId::Uintptr,
        "uintptr",
        BuiltinKind::Type,
        "Integer large enough to hold a pointer.",
        Since::GO1,
    ),
];

/// Canonical spelling.
pub fn as_str(id: BuiltinId) -> &'static str {
    info_for(id).canonical
}

/// Kind of entity the identifier denotes.
pub fn kind(id: BuiltinId) -> BuiltinKind {
    info_for(id).kind
}

/// Full metadata.
///
/// ## Notes
/// - A missing row falls back to the first entry; the registry test keeps enum and table in sync.
pub fn info_for(id: BuiltinId) -> &'static BuiltinInfo {
    BUILTINS.iter().find(|b| b.id == id).unwrap_or(&BUILTINS[0])
}

/// Lookup by spelling.
pub fn from_str(name: &str) -> Option<BuiltinId> {
    BUILTINS.iter().find(|b| b.canonical == name).map(|b| b.id)
}

/// Iterate the spellings introduced at or before `release`.
///
/// ## Examples
/// ```rust
/// use gowords_core::lang::builtins;
/// use gowords_core::lang::registry::Since;
///
/// assert!(!builtins::available_in(Since::GO1).any(|s| s == "any"));
/// assert!(builtins::available_in(Since(1, 18)).any(|s| s == "any"));
/// ```
pub fn available_in(release: Since) -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().filter(move |b| b.since <= release).map(|b| b.canonical)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: BuiltinId,
    canonical: &'static str,
    kind: BuiltinKind,
    description: &'static str,
    since: Since,
) -> BuiltinInfo {
    LangItemInfo {
        id,
        canonical,
        kind,
        description,
        since,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_roundtrip() {
        for b in BUILTINS {
            assert_eq!(from_str(b.canonical), Some(b.id));
            assert_eq!(as_str(b.id), b.canonical);
        }
    }

    #[test]
    fn test_spellings_unique() {
        let spellings: HashSet<_> = BUILTINS.iter().map(|b| b.canonical).collect();
        assert_eq!(spellings.len(), BUILTINS.len());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(kind(BuiltinId::Nil), BuiltinKind::ZeroValue);
        assert_eq!(kind(BuiltinId::Recover), BuiltinKind::Function);
        assert_eq!(kind(BuiltinId::Uintptr), BuiltinKind::Type);
    }

    #[test]
    fn test_go1_baseline_has_no_generics_vocabulary() {
        let go1: HashSet<_> = available_in(Since::GO1).collect();
        assert!(go1.contains("uint8"));
        assert!(!go1.contains("comparable"));
        assert!(!go1.contains("clear"));
    }
}
