//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Output goes to the writers passed in, so commands can be exercised in tests.

use std::io::Write;
use std::path::Path;

use gowords_syntax::diagnostics::{SyntaxError, line_col};

use crate::catalog::LibraryCatalog;
use crate::config::{HarvestConfig, MAX_SOURCE_SIZE};
use crate::errors::HarvestError;
use crate::extract;
use crate::harvest::Harvester;
use crate::report;

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Harvest (default action)
// ============================================================================

/// Harvest `catalog` and print the sorted word list.
///
/// ## Parameters
/// - `count`: also write the number of distinct words to `err`, before the list is printed.
/// - `out`: receives the word list and nothing else.
pub fn harvest(
    catalog: &dyn LibraryCatalog,
    config: HarvestConfig,
    count: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> CliResult<ExitCode> {
    let words = Harvester::new(config).run(catalog).map_err(render)?;

    if count {
        report::report_count(&words, &mut *err).map_err(|e| CliError::failure(format!("Error writing count: {e}")))?;
    }
    report::report(&words, out).map_err(|e| CliError::failure(format!("Error writing word list: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Render a fatal error through miette.
pub fn render(err: HarvestError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

fn render_syntax_errors(file_path: &Path, source: &str, errors: Vec<SyntaxError>) -> CliError {
    let mut msg = String::new();
    for err in errors {
        let rendered = render(HarvestError::parse(file_path, source.to_string(), vec![err]));
        msg.push_str(&rendered.message);
        msg.push('\n');
    }
    CliError::failure(msg.trim_end())
}

// ============================================================================
// Debug commands
// ============================================================================

/// Read source file contents, with the same size cap as a harvest run.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &Path) -> CliResult<String> {
    crate::harvest::read_source(file_path, MAX_SOURCE_SIZE).map_err(render)
}

/// Display the named nodes of the syntax tree, one per line as `line:col<TAB>kind`, indented by depth.
///
/// Error and missing nodes are printed in place and marked, so a broken file still dumps.
pub fn tree_file(file_path: &Path, out: &mut dyn Write) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tree =
        gowords_syntax::parse_tree(&source).map_err(|e| render_syntax_errors(file_path, &source, vec![e]))?;

    let mut stack = vec![(tree.root_node(), 0usize)];
    while let Some((node, depth)) = stack.pop() {
        let (line, col) = line_col(&source, node.start_byte());
        let marker = if node.is_missing() {
            " (missing)"
        } else if node.is_error() {
            " (error)"
        } else {
            ""
        };
        writeln!(out, "{line}:{col}\t{:indent$}{}{marker}", "", node.kind(), indent = depth * 2)
            .map_err(write_error)?;

        let mut cursor = node.walk();
        let children: Vec<gowords_syntax::Node<'_>> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display top-level declarations.
pub fn parse_file(file_path: &Path, out: &mut dyn Write) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let file =
        gowords_syntax::parse_source(&source).map_err(|errs| render_syntax_errors(file_path, &source, errs))?;

    write!(out, "{file}").map_err(write_error)?;
    Ok(ExitCode::SUCCESS)
}

/// Display the exported identifiers of one file as `line:col<TAB>name`.
pub fn extract_file(file_path: &Path, out: &mut dyn Write) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let file =
        gowords_syntax::parse_source(&source).map_err(|errs| render_syntax_errors(file_path, &source, errs))?;
    let names = extract::exported_identifiers(&file)
        .map_err(|reason| render(HarvestError::extract(file_path, source.clone(), reason)))?;

    for name in &names {
        let (line, col) = line_col(&source, name.span.start);
        writeln!(out, "{line}:{col}\t{}", name.node).map_err(write_error)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn write_error(e: std::io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {e}"))
}
