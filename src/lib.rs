#![forbid(unsafe_code)]
//! gowords: the known-words dictionary of Go
//!
//! Builds a deduplicated, normalized word list from Go's keywords, its predeclared identifiers, and every exported
//! identifier declared at file scope across the standard library. The list is meant as an allow-list for tools that
//! spell-check source code.
//!
//! ## Layout
//!
//! - [`catalog`] - which packages exist and where their files live (`go list`, or an in-memory table)
//! - [`extract`] - names declared by the top-level declarations of a parsed file
//! - [`word_set`] - the deduplicated accumulator
//! - [`harvest`] - the pipeline tying the above together
//! - [`report`] - sorted output
//! - [`cli`] - the command-line front end
//!
//! Vocabulary registries and normalization live in `gowords_core`; Go parsing (tree-sitter) in `gowords_syntax`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! use gowords::catalog::FixedCatalog;
//! use gowords::config::HarvestConfig;
//! use gowords::harvest::Harvester;
//!
//! let words = Harvester::new(HarvestConfig::default()).run(&FixedCatalog::default()).unwrap();
//! assert!(words.contains("fallthrough"));
//! assert!(words.contains("uint"));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod harvest;
pub mod report;
pub mod word_set;

pub use catalog::{LibraryCatalog, PackageDescriptor};
pub use config::{HarvestConfig, ToolchainOptions};
pub use errors::HarvestError;
pub use harvest::{HarvestStats, Harvester};
pub use word_set::WordSet;
