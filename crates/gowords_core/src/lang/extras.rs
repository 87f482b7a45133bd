//! Extra known words that appear in Go source without being declared identifiers.
//!
//! Struct tag options, build constraint terms, `GOOS`/`GOARCH` values, and release tags show up all over the standard
//! library (in tags, file suffixes, and `//go:build` lines) but are never declared, so the harvester would not find
//! them on its own.
//!
//! ## Notes
//! - Spellings are raw: `amd64` and `go1.21` are stored as written and normalized like any other token.
//! - A spelling with no leading letter (e.g. `386`) normalizes to nothing under the strict policy.

/// Where an extra word comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraCategory {
    /// Struct tag option values (`json:",omitempty"`).
    TagValue,
    /// Build constraint terms other than platforms and releases.
    BuildTag,
    /// `GOOS` values.
    OperatingSystem,
    /// `GOARCH` values.
    Architecture,
    /// Release tags (`go1.21`).
    VersionTag,
}

/// Metadata for an extra word.
#[derive(Debug, Clone, Copy)]
pub struct ExtraInfo {
    pub spelling: &'static str,
    pub category: ExtraCategory,
}

/// Registry of extra words.
pub const EXTRAS: &[ExtraInfo] = &[
    // Tag values
    extra("omitempty", ExtraCategory::TagValue),
    extra("omitzero", ExtraCategory::TagValue),
    // Build tags
    extra("cgo", ExtraCategory::BuildTag),
    extra("gc", ExtraCategory::BuildTag),
    extra("gccgo", ExtraCategory::BuildTag),
    extra("ignore", ExtraCategory::BuildTag),
    extra("purego", ExtraCategory::BuildTag),
    extra("unix", ExtraCategory::BuildTag),
    // Operating systems
    extra("aix", ExtraCategory::OperatingSystem),
    extra("android", ExtraCategory::OperatingSystem),
    extra("darwin", ExtraCategory::OperatingSystem),
    extra("dragonfly", ExtraCategory::OperatingSystem),
    extra("freebsd", ExtraCategory::OperatingSystem),
    extra("hurd", ExtraCategory::OperatingSystem),
    extra("illumos", ExtraCategory::OperatingSystem),
    extra("ios", ExtraCategory::OperatingSystem),
    extra("js", ExtraCategory::OperatingSystem),
    extra("linux", ExtraCategory::OperatingSystem),
    extra("netbsd", ExtraCategory::OperatingSystem),
    extra("openbsd", ExtraCategory::OperatingSystem),
    extra("plan9", ExtraCategory::OperatingSystem),
    extra("solaris", ExtraCategory::OperatingSystem),
    extra("wasip1", ExtraCategory::OperatingSystem),
    extra("windows", ExtraCategory::OperatingSystem),
    extra("zos", ExtraCategory::OperatingSystem),
    // Architectures
    extra("386", ExtraCategory::Architecture),
    extra("amd64", ExtraCategory::Architecture),
    extra("arm", ExtraCategory::Architecture),
    extra("arm64", ExtraCategory::Architecture),
    extra("loong64", ExtraCategory::Architecture),
    extra("mips", ExtraCategory::Architecture),
    extra("mipsle", ExtraCategory::Architecture),
    extra("mips64", ExtraCategory::Architecture),
    extra("mips64le", ExtraCategory::Architecture),
    extra("ppc64", ExtraCategory::Architecture),
    extra("ppc64le", ExtraCategory::Architecture),
    extra("riscv64", ExtraCategory::Architecture),
    extra("s390x", ExtraCategory::Architecture),
    extra("sparc64", ExtraCategory::Architecture),
    extra("wasm", ExtraCategory::Architecture),
    // Release tags
    extra("go1", ExtraCategory::VersionTag),
    extra("go1.18", ExtraCategory::VersionTag),
    extra("go1.21", ExtraCategory::VersionTag),
];

/// Iterate the spellings in one category.
pub fn in_category(category: ExtraCategory) -> impl Iterator<Item = &'static str> {
    EXTRAS.iter().filter(move |e| e.category == category).map(|e| e.spelling)
}

const fn extra(spelling: &'static str, category: ExtraCategory) -> ExtraInfo {
    ExtraInfo { spelling, category }
}
