//! Library catalog: which packages make up the standard library, and where their sources live
//!
//! This module defines the I/O boundary between the harvester and whatever knows about Go packages:
//! - Listing import paths ([`LibraryCatalog::list_packages`])
//! - Resolving an import path to a [`PackageDescriptor`] ([`LibraryCatalog::resolve`])
//!
//! ## Providers
//!
//! - [`GoToolchain`] - asks the `go` tool (`go list std`, `go list -json`)
//! - [`FixedCatalog`] - an in-memory table, for tests and embedding
//!
//! ## Notes
//! - [`enumerate`] resolves every listed package first and filters internal packages afterwards, so a package that
//!   cannot be resolved aborts the run even if it would have been skipped.

pub mod fixed;
pub mod toolchain;

use std::path::PathBuf;
use std::process::ExitStatus;

use serde::Deserialize;
use thiserror::Error;

use crate::errors::HarvestError;

pub use fixed::FixedCatalog;
pub use toolchain::GoToolchain;

/// Errors raised by a catalog provider
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    Command {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{command}` printed non-UTF-8 output")]
    Utf8 {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("malformed package metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("unknown package `{0}`")]
    UnknownPackage(String),
}

/// One resolved library package.
///
/// Field names follow `go list -json`, so the toolchain provider decodes straight into this type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageDescriptor {
    /// Full import path, e.g. `net/http`
    pub import_path: String,
    /// Declared package name, e.g. `http`
    pub name: String,
    /// Directory holding the sources
    pub dir: PathBuf,
    /// Go files selected for the target platform, relative to `dir`
    pub go_files: Vec<String>,
    /// Files that `import "C"`, relative to `dir`
    pub cgo_files: Vec<String>,
}

impl PackageDescriptor {
    pub fn new(import_path: impl Into<String>, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            import_path: import_path.into(),
            name: name.into(),
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn with_go_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.go_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cgo_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cgo_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this package belongs to a non-public subtree.
    pub fn is_internal(&self) -> bool {
        is_internal(&self.import_path)
    }

    /// Absolute paths of the files to read, in listed order.
    pub fn source_paths(&self, include_cgo: bool) -> impl Iterator<Item = PathBuf> + '_ {
        let cgo: &[String] = if include_cgo { &self.cgo_files } else { &[] };
        self.go_files.iter().chain(cgo).map(|file| self.dir.join(file))
    }
}

/// Return `true` if `import_path` mentions `internal` anywhere.
///
/// ## Notes
/// - This is a plain substring test: `internal/trace`, `net/http/internal`, and `crypto/internal/fips140/aes` all
///   match.
pub fn is_internal(import_path: &str) -> bool {
    import_path.contains("internal")
}

// ============================================================================
// Provider interface
// ============================================================================

/// Source of library package metadata.
///
/// Implementations perform read-only queries. They must be deterministic for a given environment so that two runs
/// produce the same word list.
pub trait LibraryCatalog {
    /// Import paths of every package in the library, in the order they should be processed.
    fn list_packages(&self) -> Result<Vec<String>, CatalogError>;

    /// Resolve one import path.
    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, CatalogError>;

    /// Resolve many import paths, returning descriptors in input order.
    ///
    /// The default calls [`LibraryCatalog::resolve`] once per path. Providers may batch, but must keep the order and
    /// report the first path that failed.
    fn resolve_all(&self, import_paths: &[String]) -> Result<Vec<PackageDescriptor>, (String, CatalogError)> {
        import_paths
            .iter()
            .map(|path| self.resolve(path).map_err(|e| (path.clone(), e)))
            .collect()
    }
}

/// List, resolve, and filter the library's packages.
///
/// ## Returns
/// - Descriptors of every non-internal package, in catalog order.
///
/// ## Errors
/// - [`HarvestError::ListPackages`] if listing fails.
/// - [`HarvestError::Resolve`] if any listed package cannot be resolved, internal ones included.
#[tracing::instrument(skip_all)]
pub fn enumerate(catalog: &dyn LibraryCatalog) -> Result<Vec<PackageDescriptor>, HarvestError> {
    enumerate_counted(catalog).map(|(packages, _)| packages)
}

/// [`enumerate`], also returning how many packages were skipped as internal.
pub fn enumerate_counted(catalog: &dyn LibraryCatalog) -> Result<(Vec<PackageDescriptor>, usize), HarvestError> {
    let paths = catalog.list_packages().map_err(HarvestError::ListPackages)?;
    tracing::debug!(count = paths.len(), "listed library packages");

    let descriptors = catalog
        .resolve_all(&paths)
        .map_err(|(import_path, source)| HarvestError::Resolve { import_path, source })?;

    let (internal, public): (Vec<_>, Vec<_>) = descriptors.into_iter().partition(PackageDescriptor::is_internal);
    for pkg in &internal {
        tracing::debug!(import_path = %pkg.import_path, "skipping internal package");
    }
    Ok((public, internal.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_substring_anywhere() {
        assert!(is_internal("internal/trace"));
        assert!(is_internal("net/http/internal"));
        assert!(is_internal("crypto/internal/fips140/aes"));
        assert!(!is_internal("net/http"));
        assert!(!is_internal("go/types"));
    }

    #[test]
    fn test_source_paths_respect_cgo_flag() {
        let pkg = PackageDescriptor::new("os/user", "user", "/go/src/os/user")
            .with_go_files(["user.go", "lookup.go"])
            .with_cgo_files(["cgo_lookup_unix.go"]);

        let plain: Vec<_> = pkg.source_paths(false).collect();
        assert_eq!(
            plain,
            vec![PathBuf::from("/go/src/os/user/user.go"), PathBuf::from("/go/src/os/user/lookup.go")]
        );
        let with_cgo: Vec<_> = pkg.source_paths(true).collect();
        assert_eq!(with_cgo.len(), 3);
        assert_eq!(with_cgo[2], PathBuf::from("/go/src/os/user/cgo_lookup_unix.go"));
    }

    #[test]
    fn test_descriptor_decodes_go_list_json() {
        let json = r#"{
            "Dir": "/usr/lib/go/src/strings",
            "ImportPath": "strings",
            "Name": "strings",
            "Goroot": true,
            "Standard": true,
            "GoFiles": ["builder.go", "strings.go"]
        }"#;
        let pkg: PackageDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.import_path, "strings");
        assert_eq!(pkg.go_files, vec!["builder.go", "strings.go"]);
        assert!(pkg.cgo_files.is_empty());
    }

    #[test]
    fn test_enumerate_filters_after_resolving() {
        let catalog = FixedCatalog::new([
            PackageDescriptor::new("bytes", "bytes", "/src/bytes"),
            PackageDescriptor::new("internal/abi", "abi", "/src/internal/abi"),
            PackageDescriptor::new("net/http/internal", "internal", "/src/net/http/internal"),
            PackageDescriptor::new("strings", "strings", "/src/strings"),
        ]);
        let pkgs = enumerate(&catalog).unwrap();
        let paths: Vec<_> = pkgs.iter().map(|p| p.import_path.as_str()).collect();
        assert_eq!(paths, vec!["bytes", "strings"]);
    }

    #[test]
    fn test_enumerate_resolve_failure_is_fatal_even_for_internal() {
        let catalog = FixedCatalog::new([PackageDescriptor::new("bytes", "bytes", "/src/bytes")])
            .with_unresolvable("internal/missing");
        let err = enumerate(&catalog).unwrap_err();
        match err {
            HarvestError::Resolve { import_path, source } => {
                assert_eq!(import_path, "internal/missing");
                assert!(matches!(source, CatalogError::UnknownPackage(_)));
            }
            other => panic!("expected resolve error, got {other:?}"),
        }
    }
}
