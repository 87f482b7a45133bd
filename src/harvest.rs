//! The harvest pipeline: seed vocabulary, enumerate packages, extract exported names.
//!
//! ## Flow
//!
//! ```text
//! seed_spellings() ──────────────────────────────┐
//!                                                ▼
//! LibraryCatalog ─► enumerate ─► per package ─► WordSet
//!                                  │   ▲
//!                                  │   └─ package name
//!                                  └─► per file: read ─► parse ─► exported_identifiers
//! ```
//!
//! Packages are processed one at a time in catalog order, files in listed order. The first fatal error ends the run.

use std::fs;
use std::path::Path;

use gowords_core::lang;

use crate::catalog::{self, LibraryCatalog, PackageDescriptor};
use crate::config::HarvestConfig;
use crate::errors::HarvestError;
use crate::extract;
use crate::word_set::WordSet;

/// Counters for one run, logged when it finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestStats {
    pub packages_scanned: usize,
    pub packages_skipped: usize,
    pub files_parsed: usize,
    pub identifiers_seen: usize,
}

/// Runs the pipeline against a catalog.
#[derive(Debug, Clone, Default)]
pub struct Harvester {
    config: HarvestConfig,
    stats: HarvestStats,
}

impl Harvester {
    pub fn new(config: HarvestConfig) -> Self {
        Self {
            config,
            stats: HarvestStats::default(),
        }
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> HarvestStats {
        self.stats
    }

    /// Build the complete word set.
    ///
    /// ## Errors
    /// The first [`HarvestError`] from enumeration, reading, parsing, or extraction.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self, catalog: &dyn LibraryCatalog) -> Result<WordSet, HarvestError> {
        let mut words = WordSet::new(self.config.policy);
        self.seed(&mut words);

        let (packages, skipped) = catalog::enumerate_counted(catalog)?;
        self.stats.packages_skipped += skipped;

        for package in &packages {
            self.harvest_package(&mut words, package)?;
        }

        tracing::info!(
            packages = self.stats.packages_scanned,
            skipped = self.stats.packages_skipped,
            files = self.stats.files_parsed,
            identifiers = self.stats.identifiers_seen,
            words = words.len(),
            "harvest complete"
        );
        Ok(words)
    }

    /// Add keywords, builtins, and extra words.
    pub fn seed(&mut self, words: &mut WordSet) {
        let added = words.add_words(lang::seed_spellings().map(|(_, spelling)| spelling));
        tracing::debug!(added, "seeded vocabulary");
    }

    /// Add one package: its declared name, then the exported identifiers of each of its files.
    #[tracing::instrument(skip_all, fields(import_path = %package.import_path))]
    pub fn harvest_package(&mut self, words: &mut WordSet, package: &PackageDescriptor) -> Result<(), HarvestError> {
        tracing::debug!("processing package");
        words.add_words([package.name.as_str()]);

        for path in package.source_paths(self.config.include_cgo) {
            let source = read_source(&path, self.config.max_source_size)?;
            self.harvest_source(words, &path, source)?;
        }

        self.stats.packages_scanned += 1;
        Ok(())
    }

    /// Parse one file and add its exported identifiers.
    pub fn harvest_source(&mut self, words: &mut WordSet, path: &Path, source: String) -> Result<(), HarvestError> {
        let file = match gowords_syntax::parse_source(&source) {
            Ok(file) => file,
            Err(errors) => return Err(HarvestError::parse(path, source, errors)),
        };

        let names = match extract::exported_identifiers(&file) {
            Ok(names) => names,
            Err(reason) => return Err(HarvestError::extract(path, source, reason)),
        };

        self.stats.files_parsed += 1;
        self.stats.identifiers_seen += names.len();
        words.add_words(names.iter().map(|name| name.node.as_str()));
        Ok(())
    }
}

/// Read one source file, refusing files larger than `max_size` bytes.
///
/// ## Errors
/// - [`HarvestError::SourceTooLarge`] when the file exceeds `max_size`.
/// - [`HarvestError::ReadSource`] when the file cannot be inspected or read, or is not UTF-8.
pub fn read_source(path: &Path, max_size: u64) -> Result<String, HarvestError> {
    let read_error = |source| HarvestError::ReadSource {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(read_error)?.len();
    if size > max_size {
        return Err(HarvestError::SourceTooLarge {
            path: path.to_path_buf(),
            size,
            max: max_size,
        });
    }
    fs::read_to_string(path).map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixedCatalog;
    use gowords_core::NormalizePolicy;

    #[test]
    fn test_seed_covers_keywords_builtins_extras() {
        let mut words = WordSet::new(NormalizePolicy::strict());
        Harvester::default().seed(&mut words);
        for word in ["func", "fallthrough", "append", "uint", "complex", "omitempty", "any", "clear"] {
            assert!(words.contains(word), "missing {word}");
        }
        assert!(!words.contains("uint8"));
    }

    #[test]
    fn test_harvest_source_adds_exported_only() {
        let mut words = WordSet::new(NormalizePolicy::strict());
        let mut harvester = Harvester::default();
        harvester
            .harvest_source(
                &mut words,
                Path::new("demo.go"),
                "package demo\nfunc DoThing() {}\nvar helper int\n".to_string(),
            )
            .unwrap();
        assert!(words.contains("dothing"));
        assert!(!words.contains("helper"));
        assert!(!words.contains("demo"), "the package clause is not an identifier source");
        assert_eq!(harvester.stats().files_parsed, 1);
        assert_eq!(harvester.stats().identifiers_seen, 1);
    }

    #[test]
    fn test_harvest_source_parse_error() {
        let mut words = WordSet::default();
        let err = Harvester::default()
            .harvest_source(&mut words, Path::new("bad.go"), "package bad\nfunc {\n".to_string())
            .unwrap_err();
        assert!(matches!(err, HarvestError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let catalog = FixedCatalog::new([PackageDescriptor::new("ghost", "ghost", "/nonexistent/gowords/ghost")
            .with_go_files(["ghost.go"])]);
        let err = Harvester::default().run(&catalog).unwrap_err();
        assert!(matches!(err, HarvestError::ReadSource { .. }), "got {err:?}");
    }

    #[test]
    fn test_oversized_file_aborts_run() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/std/widget");
        let catalog =
            FixedCatalog::new([PackageDescriptor::new("example/widget", "widget", dir).with_go_files(["widget.go"])]);

        let err = Harvester::new(HarvestConfig::default().with_max_source_size(16))
            .run(&catalog)
            .unwrap_err();
        match err {
            HarvestError::SourceTooLarge { path, size, max } => {
                assert!(path.ends_with("widget.go"));
                assert!(size > 16);
                assert_eq!(max, 16);
            }
            other => panic!("expected size error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_source_within_limit() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/std/widget/widget.go");
        let source = read_source(&path, crate::config::MAX_SOURCE_SIZE).unwrap();
        assert!(source.contains("package widget"));
        assert!(matches!(read_source(&path, 0), Err(HarvestError::SourceTooLarge { .. })));
    }

    #[test]
    fn test_run_adds_package_names_and_counts_skips() {
        let catalog = FixedCatalog::new([
            PackageDescriptor::new("unicode/utf8", "utf8", "/none"),
            PackageDescriptor::new("internal/bytealg", "bytealg", "/none"),
        ]);
        let mut harvester = Harvester::default();
        let words = harvester.run(&catalog).unwrap();
        assert!(words.contains("utf"));
        assert!(!words.contains("bytealg"));
        assert_eq!(
            harvester.stats(),
            HarvestStats {
                packages_scanned: 1,
                packages_skipped: 1,
                files_parsed: 0,
                identifiers_seen: 0,
            }
        );
    }
}
