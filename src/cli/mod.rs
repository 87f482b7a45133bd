//! CLI module for `gowords`
//!
//! This module provides the command-line interface: harvest the Go standard library and print the sorted word list.
//!
//! ## Actions
//!
//! - (default) - harvest and print one word per line on stdout
//! - `--tree FILE` - print the tree-sitter syntax tree of one Go file (debug)
//! - `--parse FILE` - print the top-level declarations of one Go file (debug)
//! - `--extract FILE` - print the exported identifiers of one Go file (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gowords_core::NormalizeMode;

use crate::catalog::GoToolchain;
use crate::config::{HarvestConfig, ToolchainOptions};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Print the known-words dictionary of the Go standard library
#[derive(Parser, Debug)]
#[command(name = "gowords")]
#[command(version = VERSION)]
#[command(
    about = "Print the known words of Go: keywords, builtins, and exported standard library identifiers",
    long_about = None
)]
pub struct Cli {
    /// Enable debug output (RUST_LOG overrides)
    #[arg(long)]
    pub debug: bool,

    /// Keep tokens exactly as written instead of reducing them to their leading letters
    #[arg(long)]
    pub verbatim: bool,

    /// Do not lowercase words
    #[arg(long = "preserve-case")]
    pub preserve_case: bool,

    /// Print the number of distinct words to stderr before the list
    #[arg(long)]
    pub count: bool,

    /// Also read cgo source files
    #[arg(long)]
    pub cgo: bool,

    /// The `go` binary to run
    #[arg(long = "go", value_name = "PATH", default_value = "go")]
    pub go_binary: PathBuf,

    /// Target operating system (GOOS)
    #[arg(long, value_name = "OS")]
    pub goos: Option<String>,

    /// Target architecture (GOARCH)
    #[arg(long, value_name = "ARCH")]
    pub goarch: Option<String>,

    /// Build tags, comma-separated
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub tags: Vec<String>,

    // Debug/development flags
    /// Print the syntax tree of one Go file (debug)
    #[arg(long = "tree", value_name = "FILE", conflicts_with_all = ["parse_file", "extract_file"])]
    pub tree_file: Option<PathBuf>,

    /// Parse one Go file and print its declarations (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "extract_file")]
    pub parse_file: Option<PathBuf>,

    /// Print the exported identifiers of one Go file (debug)
    #[arg(long = "extract", value_name = "FILE")]
    pub extract_file: Option<PathBuf>,
}

impl Cli {
    /// Harvest settings selected by the flags.
    pub fn harvest_config(&self) -> HarvestConfig {
        let mode = if self.verbatim {
            NormalizeMode::Verbatim
        } else {
            NormalizeMode::Strict
        };
        HarvestConfig::new()
            .with_mode(mode)
            .with_fold_case(!self.preserve_case)
            .with_cgo(self.cgo)
    }

    /// `go` tool settings selected by the flags.
    pub fn toolchain_options(&self) -> ToolchainOptions {
        let mut options = ToolchainOptions::new()
            .with_go_binary(self.go_binary.clone())
            .with_tags(self.tags.iter().cloned());
        if let Some(goos) = &self.goos {
            options = options.with_goos(goos);
        }
        if let Some(goarch) = &self.goarch {
            options = options.with_goarch(goarch);
        }
        options
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Handle debug flags first
    if let Some(file) = &cli.tree_file {
        return commands::tree_file(file, &mut out);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file, &mut out);
    }
    if let Some(file) = &cli.extract_file {
        return commands::extract_file(file, &mut out);
    }

    let catalog = GoToolchain::new(cli.toolchain_options());
    commands::harvest(&catalog, cli.harvest_config(), cli.count, &mut out, &mut io::stderr())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["gowords"]).unwrap();
        assert!(!cli.debug && !cli.verbatim && !cli.count);
        assert_eq!(cli.harvest_config(), HarvestConfig::default());
        assert_eq!(cli.toolchain_options(), ToolchainOptions::default());
    }

    #[test]
    fn test_cli_normalization_flags() {
        let cli = Cli::try_parse_from(["gowords", "--preserve-case"]).unwrap();
        let config = cli.harvest_config();
        assert_eq!(config.policy.mode, NormalizeMode::Strict);
        assert!(!config.policy.fold_case);

        let cli = Cli::try_parse_from(["gowords", "--verbatim", "--cgo"]).unwrap();
        let config = cli.harvest_config();
        assert_eq!(config.policy.mode, NormalizeMode::Verbatim);
        assert!(config.include_cgo);
    }

    #[test]
    fn test_cli_toolchain_flags() {
        let cli = Cli::try_parse_from([
            "gowords",
            "--go",
            "/usr/lib/go/bin/go",
            "--goos",
            "windows",
            "--goarch",
            "amd64",
            "--tags",
            "netgo,osusergo",
        ])
        .unwrap();
        let options = cli.toolchain_options();
        assert_eq!(options.go_binary, PathBuf::from("/usr/lib/go/bin/go"));
        assert_eq!(options.goos.as_deref(), Some("windows"));
        assert_eq!(options.goarch.as_deref(), Some("amd64"));
        assert_eq!(options.tags, vec!["netgo", "osusergo"]);
    }

    #[test]
    fn test_cli_parse_debug_file() {
        let cli = Cli::try_parse_from(["gowords", "--parse", "demo.go"]).unwrap();
        assert_eq!(cli.parse_file, Some(PathBuf::from("demo.go")));
    }

    #[test]
    fn test_cli_inspect_flags_conflict() {
        assert!(Cli::try_parse_from(["gowords", "--tree", "a.go", "--parse", "b.go"]).is_err());
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["gowords", "net/http"]).is_err());
    }
}
