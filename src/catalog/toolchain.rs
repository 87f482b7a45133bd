//! Library catalog backed by the `go` tool.
//!
//! - `go list [-tags …] std` lists the standard library, one import path per line.
//! - `go list [-tags …] -json <paths…>` resolves packages; the output is a stream of JSON objects, one per package.
//!
//! `GOOS`/`GOARCH` overrides are passed through the environment, so file selection follows the requested target the
//! same way `go build` would.

use std::collections::HashMap;
use std::process::Command;

use super::{CatalogError, LibraryCatalog, PackageDescriptor};
use crate::config::ToolchainOptions;

/// Catalog provider that shells out to `go list`.
#[derive(Debug, Clone, Default)]
pub struct GoToolchain {
    options: ToolchainOptions,
}

impl GoToolchain {
    pub fn new(options: ToolchainOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ToolchainOptions {
        &self.options
    }

    /// Build a `go list` invocation with target overrides and tags applied.
    fn list_command<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Command {
        let mut cmd = Command::new(&self.options.go_binary);
        cmd.arg("list");
        if !self.options.tags.is_empty() {
            cmd.arg("-tags").arg(self.options.tags.join(","));
        }
        cmd.args(args);
        if let Some(goos) = &self.options.goos {
            cmd.env("GOOS", goos);
        }
        if let Some(goarch) = &self.options.goarch {
            cmd.env("GOARCH", goarch);
        }
        cmd
    }

    /// Run a command and return its stdout.
    fn run(&self, mut cmd: Command) -> Result<String, CatalogError> {
        let command_line = describe(&cmd);
        tracing::debug!(command = %command_line, "running go tool");

        let output = cmd.output().map_err(|source| CatalogError::Spawn {
            program: self.options.go_binary.display().to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(CatalogError::Command {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| CatalogError::Utf8 {
            command: command_line,
            source,
        })
    }

    fn resolve_batch(&self, import_paths: &[String]) -> Result<Vec<PackageDescriptor>, CatalogError> {
        let cmd = self.list_command(std::iter::once("-json").chain(import_paths.iter().map(String::as_str)));
        let stdout = self.run(cmd)?;
        decode_packages(&stdout)
    }
}

impl LibraryCatalog for GoToolchain {
    #[tracing::instrument(skip_all)]
    fn list_packages(&self) -> Result<Vec<String>, CatalogError> {
        let stdout = self.run(self.list_command(["std"]))?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, CatalogError> {
        let stdout = self.run(self.list_command(["-json", import_path]))?;
        decode_packages(&stdout)?
            .into_iter()
            .find(|p| p.import_path == import_path)
            .ok_or_else(|| CatalogError::UnknownPackage(import_path.to_string()))
    }

    /// One `go list -json` call for the whole batch.
    ///
    /// ## Notes
    /// - If the batch call fails, paths are resolved one at a time so the error names the offending package.
    #[tracing::instrument(skip_all, fields(count = import_paths.len()))]
    fn resolve_all(&self, import_paths: &[String]) -> Result<Vec<PackageDescriptor>, (String, CatalogError)> {
        if import_paths.is_empty() {
            return Ok(Vec::new());
        }

        match self.resolve_batch(import_paths) {
            Ok(decoded) => in_request_order(import_paths, decoded),
            Err(batch_err) => {
                tracing::debug!(error = %batch_err, "batched resolve failed; resolving packages one at a time");
                let mut descriptors = Vec::with_capacity(import_paths.len());
                for path in import_paths {
                    descriptors.push(self.resolve(path).map_err(|e| (path.clone(), e))?);
                }
                Ok(descriptors)
            }
        }
    }
}

/// Decode the concatenated JSON objects printed by `go list -json`.
pub(crate) fn decode_packages(stdout: &str) -> Result<Vec<PackageDescriptor>, CatalogError> {
    serde_json::Deserializer::from_str(stdout)
        .into_iter::<PackageDescriptor>()
        .map(|pkg| pkg.map_err(CatalogError::from))
        .collect()
}

/// Reorder decoded descriptors to match the requested paths.
fn in_request_order(
    import_paths: &[String],
    decoded: Vec<PackageDescriptor>,
) -> Result<Vec<PackageDescriptor>, (String, CatalogError)> {
    let mut by_path: HashMap<String, PackageDescriptor> =
        decoded.into_iter().map(|p| (p.import_path.clone(), p)).collect();

    import_paths
        .iter()
        .map(|path| {
            by_path
                .remove(path)
                .ok_or_else(|| (path.clone(), CatalogError::UnknownPackage(path.clone())))
        })
        .collect()
}

/// Render a command for logs and error messages.
fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    let args: Vec<String> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
    // Batched resolves list hundreds of packages.
    if args.len() > 8 {
        parts.extend(args[..8].iter().cloned());
        parts.push(format!("… ({} more)", args.len() - 8));
    } else {
        parts.extend(args);
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_list_command_plain() {
        let go = GoToolchain::default();
        let cmd = go.list_command(["std"]);
        assert_eq!(cmd.get_program(), OsStr::new("go"));
        assert_eq!(args(&cmd), vec!["list", "std"]);
        assert_eq!(cmd.get_envs().count(), 0);
    }

    #[test]
    fn test_list_command_with_target_and_tags() {
        let go = GoToolchain::new(
            ToolchainOptions::new()
                .with_go_binary("/opt/go/bin/go")
                .with_goos("plan9")
                .with_goarch("386")
                .with_tags(["netgo", "purego"]),
        );
        let cmd = go.list_command(["-json", "os"]);
        assert_eq!(cmd.get_program(), OsStr::new("/opt/go/bin/go"));
        assert_eq!(args(&cmd), vec!["list", "-tags", "netgo,purego", "-json", "os"]);

        let envs: Vec<(String, String)> = cmd
            .get_envs()
            .filter_map(|(k, v)| Some((k.to_string_lossy().into_owned(), v?.to_string_lossy().into_owned())))
            .collect();
        assert!(envs.contains(&("GOOS".to_string(), "plan9".to_string())));
        assert!(envs.contains(&("GOARCH".to_string(), "386".to_string())));
    }

    #[test]
    fn test_decode_package_stream() {
        let stdout = r#"{
	"Dir": "/go/src/errors",
	"ImportPath": "errors",
	"Name": "errors",
	"GoFiles": ["errors.go", "join.go", "wrap.go"]
}
{
	"Dir": "/go/src/runtime/cgo",
	"ImportPath": "runtime/cgo",
	"Name": "cgo",
	"GoFiles": ["callbacks.go"],
	"CgoFiles": ["cgo.go"]
}
"#;
        let pkgs = decode_packages(stdout).unwrap();
        assert_eq!(pkgs.len(), 2);
        assert_eq!(pkgs[0].go_files.len(), 3);
        assert_eq!(pkgs[1].cgo_files, vec!["cgo.go"]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_packages("{ not json"), Err(CatalogError::Metadata(_))));
    }

    #[test]
    fn test_in_request_order() {
        let decoded = vec![
            PackageDescriptor::new("b", "b", "/b"),
            PackageDescriptor::new("a", "a", "/a"),
        ];
        let paths = vec!["a".to_string(), "b".to_string()];
        let ordered = in_request_order(&paths, decoded).unwrap();
        assert_eq!(ordered[0].import_path, "a");
        assert_eq!(ordered[1].import_path, "b");
    }

    #[test]
    fn test_in_request_order_missing_package() {
        let decoded = vec![PackageDescriptor::new("a", "a", "/a")];
        let paths = vec!["a".to_string(), "gone".to_string()];
        let (path, err) = in_request_order(&paths, decoded).unwrap_err();
        assert_eq!(path, "gone");
        assert!(matches!(err, CatalogError::UnknownPackage(_)));
    }

    #[test]
    fn test_missing_go_binary_is_spawn_error() {
        let go = GoToolchain::new(ToolchainOptions::new().with_go_binary("/nonexistent/gowords-test/go"));
        assert!(matches!(go.list_packages(), Err(CatalogError::Spawn { .. })));
    }

    #[test]
    fn test_describe_truncates_long_commands() {
        let go = GoToolchain::default();
        let paths: Vec<String> = (0..20).map(|i| format!("pkg{i}")).collect();
        let cmd = go.list_command(std::iter::once("-json").chain(paths.iter().map(String::as_str)));
        let text = describe(&cmd);
        assert!(text.starts_with("go list -json pkg0"));
        assert!(text.ends_with("(14 more)"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_reports_command_line() {
        let go = GoToolchain::new(ToolchainOptions::new().with_go_binary("false"));
        match go.list_packages() {
            Err(CatalogError::Command { command, status, .. }) => {
                assert_eq!(command, "false list std");
                assert!(!status.success());
            }
            other => panic!("expected command failure, got {other:?}"),
        }
    }
}
