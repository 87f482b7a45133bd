//! In-memory library catalog.

use super::{CatalogError, LibraryCatalog, PackageDescriptor};

/// A catalog backed by a fixed table of descriptors.
///
/// Packages are listed in insertion order. Paths registered with [`FixedCatalog::with_unresolvable`] are listed but
/// fail to resolve.
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    packages: Vec<PackageDescriptor>,
    unresolvable: Vec<String>,
}

impl FixedCatalog {
    pub fn new(packages: impl IntoIterator<Item = PackageDescriptor>) -> Self {
        Self {
            packages: packages.into_iter().collect(),
            unresolvable: Vec::new(),
        }
    }

    /// Add a package.
    pub fn with_package(mut self, package: PackageDescriptor) -> Self {
        self.packages.push(package);
        self
    }

    /// List `import_path` without a descriptor behind it.
    pub fn with_unresolvable(mut self, import_path: impl Into<String>) -> Self {
        self.unresolvable.push(import_path.into());
        self
    }
}

impl LibraryCatalog for FixedCatalog {
    fn list_packages(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .packages
            .iter()
            .map(|p| p.import_path.clone())
            .chain(self.unresolvable.iter().cloned())
            .collect())
    }

    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, CatalogError> {
        self.packages
            .iter()
            .find(|p| p.import_path == import_path)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownPackage(import_path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_in_insertion_order() {
        let catalog = FixedCatalog::default()
            .with_package(PackageDescriptor::new("z/last", "last", "/z"))
            .with_package(PackageDescriptor::new("a/first", "first", "/a"))
            .with_unresolvable("ghost");
        assert_eq!(catalog.list_packages().unwrap(), vec!["z/last", "a/first", "ghost"]);
    }

    #[test]
    fn test_resolve() {
        let catalog = FixedCatalog::new([PackageDescriptor::new("fmt", "fmt", "/src/fmt")]);
        assert_eq!(catalog.resolve("fmt").unwrap().name, "fmt");
        assert!(matches!(catalog.resolve("ghost"), Err(CatalogError::UnknownPackage(p)) if p == "ghost"));
    }

    #[test]
    fn test_default_resolve_all_reports_failing_path() {
        let catalog = FixedCatalog::new([PackageDescriptor::new("fmt", "fmt", "/src/fmt")]);
        let paths = vec!["fmt".to_string(), "ghost".to_string()];
        let (path, _) = catalog.resolve_all(&paths).unwrap_err();
        assert_eq!(path, "ghost");
    }
}
