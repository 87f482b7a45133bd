//! Run configuration for `gowords`
//!
//! Two plain settings structs, each with `Default` plus `with_*` builders:
//! - [`HarvestConfig`]: how words are normalized and which files of a package are read.
//! - [`ToolchainOptions`]: how the `go` tool is invoked to list and resolve packages.

use std::path::PathBuf;

use gowords_core::{NormalizeMode, NormalizePolicy};

/// Default cap on the size of one source file (16 MB).
///
/// The largest files in the Go tree are generated tables well under this.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Harvest configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// Normalization applied to every word before it enters the word set
    pub policy: NormalizePolicy,
    /// Whether `CgoFiles` are parsed in addition to `GoFiles`
    pub include_cgo: bool,
    /// Files larger than this many bytes abort the run
    pub max_source_size: u64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            policy: NormalizePolicy::strict(),
            include_cgo: false,
            max_source_size: MAX_SOURCE_SIZE,
        }
    }
}

impl HarvestConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the normalization policy
    pub fn with_policy(mut self, policy: NormalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the normalization mode, keeping the case-folding setting
    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.policy = self.policy.with_mode(mode);
        self
    }

    /// Enable or disable ASCII case folding (strict mode only)
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.policy = self.policy.with_fold_case(fold_case);
        self
    }

    /// Include cgo source files
    pub fn with_cgo(mut self, include_cgo: bool) -> Self {
        self.include_cgo = include_cgo;
        self
    }

    /// Set the largest source file accepted, in bytes
    pub fn with_max_source_size(mut self, max_source_size: u64) -> Self {
        self.max_source_size = max_source_size;
        self
    }
}

/// Options for running the `go` tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainOptions {
    /// Path or name of the `go` binary
    pub go_binary: PathBuf,
    /// `GOOS` override; the tool's default when `None`
    pub goos: Option<String>,
    /// `GOARCH` override; the tool's default when `None`
    pub goarch: Option<String>,
    /// Build tags passed as `-tags a,b`
    pub tags: Vec<String>,
}

impl Default for ToolchainOptions {
    fn default() -> Self {
        Self {
            go_binary: PathBuf::from("go"),
            goos: None,
            goarch: None,
            tags: Vec::new(),
        }
    }
}

impl ToolchainOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `go` binary
    pub fn with_go_binary(mut self, go_binary: impl Into<PathBuf>) -> Self {
        self.go_binary = go_binary.into();
        self
    }

    /// Set the target operating system
    pub fn with_goos(mut self, goos: impl Into<String>) -> Self {
        self.goos = Some(goos.into());
        self
    }

    /// Set the target architecture
    pub fn with_goarch(mut self, goarch: impl Into<String>) -> Self {
        self.goarch = Some(goarch.into());
        self
    }

    /// Set the build tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).filter(|t: &String| !t.is_empty()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // HarvestConfig
    // ========================================

    #[test]
    fn test_default_harvest_config_is_strict_and_folding() {
        let config = HarvestConfig::default();
        assert_eq!(config.policy.mode, NormalizeMode::Strict);
        assert!(config.policy.fold_case);
        assert!(!config.include_cgo);
        assert_eq!(config.max_source_size, MAX_SOURCE_SIZE);
    }

    #[test]
    fn test_harvest_config_builders() {
        let config = HarvestConfig::new()
            .with_mode(NormalizeMode::Verbatim)
            .with_fold_case(false)
            .with_cgo(true)
            .with_max_source_size(1024);
        assert_eq!(config.policy, NormalizePolicy::verbatim().with_fold_case(false));
        assert!(config.include_cgo);
        assert_eq!(config.max_source_size, 1024);
    }

    // ========================================
    // ToolchainOptions
    // ========================================

    #[test]
    fn test_default_toolchain_options() {
        let options = ToolchainOptions::default();
        assert_eq!(options.go_binary, PathBuf::from("go"));
        assert!(options.goos.is_none() && options.goarch.is_none());
        assert!(options.tags.is_empty());
    }

    #[test]
    fn test_with_tags_drops_empty_entries() {
        let options = ToolchainOptions::new().with_tags(["netgo", "", "osusergo"]);
        assert_eq!(options.tags, vec!["netgo", "osusergo"]);
    }

    #[test]
    fn test_target_overrides() {
        let options = ToolchainOptions::new()
            .with_go_binary("/usr/local/go/bin/go")
            .with_goos("windows")
            .with_goarch("arm64");
        assert_eq!(options.goos.as_deref(), Some("windows"));
        assert_eq!(options.goarch.as_deref(), Some("arm64"));
        assert_eq!(options.go_binary, PathBuf::from("/usr/local/go/bin/go"));
    }
}
