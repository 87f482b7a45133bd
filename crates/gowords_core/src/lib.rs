//! Provide the pure, dependency-free core of `gowords`: Go language vocabulary and word normalization.
//!
//! This crate is intentionally small. It contains:
//! - registry tables for Go's reserved keywords, predeclared identifiers, and a curated set of extra words that
//!   show up in Go source without being identifiers (struct tag values, platform names, ...);
//! - the word normalizer that turns a raw identifier into dictionary words.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no syntax-tree types.
//! - The harvester seeds its word set from [`lang::seed_spellings`].

pub mod lang;
pub mod words;

pub use words::{NormalizeMode, NormalizePolicy, normalize, normalize_one};
