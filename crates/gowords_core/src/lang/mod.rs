//! Go language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, predeclared identifiers, and
//! extra (non-identifier) words.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `BuiltinId`) and look up spellings/metadata via registry
//! tables instead of scattering string literals across the harvester.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - Syntax is enforced by the tree-sitter grammar in `gowords_syntax`; registries provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use gowords_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

pub mod builtins;
pub mod extras;
pub mod keywords;
pub mod registry;

/// Which seed table a spelling came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedSource {
    Keyword,
    Builtin,
    Extra,
}

/// Iterate every seed spelling: keywords, then builtins, then extras, each in registry order.
///
/// ## Returns
/// - `(SeedSource, &'static str)` pairs with the raw (un-normalized) spelling.
///
/// ## Examples
/// ```rust
/// use gowords_core::lang::{self, SeedSource};
///
/// let first = lang::seed_spellings().next().unwrap();
/// assert_eq!(first.0, SeedSource::Keyword);
/// assert!(lang::seed_spellings().any(|(_, s)| s == "omitempty"));
/// ```
pub fn seed_spellings() -> impl Iterator<Item = (SeedSource, &'static str)> {
    keywords::KEYWORDS
        .iter()
        .map(|k| (SeedSource::Keyword, k.canonical))
        .chain(builtins::BUILTINS.iter().map(|b| (SeedSource::Builtin, b.canonical)))
        .chain(extras::EXTRAS.iter().map(|e| (SeedSource::Extra, e.spelling)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_registries() {
        let total = seed_spellings().count();
        assert_eq!(
            total,
            keywords::KEYWORDS.len() + builtins::BUILTINS.len() + extras::EXTRAS.len()
        );
    }

    #[test]
    fn seed_order_is_keywords_builtins_extras() {
        let sources: Vec<SeedSource> = seed_spellings().map(|(s, _)| s).collect();
        let first_builtin = sources.iter().position(|s| *s == SeedSource::Builtin).unwrap();
        let first_extra = sources.iter().position(|s| *s == SeedSource::Extra).unwrap();
        assert_eq!(first_builtin, keywords::KEYWORDS.len());
        assert_eq!(first_extra, keywords::KEYWORDS.len() + builtins::BUILTINS.len());
    }
}
