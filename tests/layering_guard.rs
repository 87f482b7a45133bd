//! Layering guardrails for the workspace crates.
//!
//! `gowords_core` holds pure registries and normalization, so it must stay dependency-free.
//! `gowords_syntax` sits below the harvester, parses with the tree-sitter Go grammar, and must never depend on the
//! root `gowords` crate.

/// Collect the crate names listed in the `[dependencies]` table of a manifest.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/gowords_core/Cargo.toml"));
    assert!(deps.is_empty(), "`gowords_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_harvester() {
    let deps = main_dependencies(include_str!("../crates/gowords_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "tree-sitter"));
    assert!(deps.iter().any(|d| d == "tree-sitter-go"));
    assert!(
        !deps.iter().any(|d| d == "gowords"),
        "`gowords_syntax` must not depend on the `gowords` crate"
    );
}

#[test]
fn harvester_uses_the_shared_registries() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "gowords_core"));
    assert!(deps.iter().any(|d| d == "gowords_syntax"));
}
