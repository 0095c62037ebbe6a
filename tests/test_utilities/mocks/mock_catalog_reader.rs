use depend_info::prelude::*;
use std::path::{Path, PathBuf};

/// Mock CatalogReader serving in-memory records in the given order
///
/// Each record gets its own manifest path, so duplicated names stay
/// distinguishable.
pub struct MockCatalogReader {
    records: Vec<(PathBuf, PackageRecord)>,
    missing_root: bool,
    broken_manifest: Option<PathBuf>,
}

impl MockCatalogReader {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let dir = format!("{:03}-{}", idx, record.name());
                (Self::manifest_path(&dir), record)
            })
            .collect();
        Self {
            records,
            missing_root: false,
            broken_manifest: None,
        }
    }

    pub fn with_missing_root() -> Self {
        Self {
            records: Vec::new(),
            missing_root: true,
            broken_manifest: None,
        }
    }

    /// Adds a manifest that is listed but fails to parse
    pub fn with_broken_manifest(mut self, port: &str) -> Self {
        self.broken_manifest = Some(Self::manifest_path(port));
        self
    }

    fn manifest_path(port: &str) -> PathBuf {
        PathBuf::from("ports").join(port).join("port.toml")
    }
}

impl CatalogReader for MockCatalogReader {
    fn list_manifests(&self, catalog_root: &Path) -> Result<Vec<PathBuf>> {
        if self.missing_root {
            anyhow::bail!("Mock catalog not found: {}", catalog_root.display());
        }
        let mut paths: Vec<PathBuf> = self.records.iter().map(|(p, _)| p.clone()).collect();
        paths.extend(self.broken_manifest.clone());
        Ok(paths)
    }

    fn read_manifest(&self, manifest_path: &Path) -> Result<PackageRecord> {
        if self.broken_manifest.as_deref() == Some(manifest_path) {
            anyhow::bail!("Mock manifest parse failure");
        }
        self.records
            .iter()
            .find(|(path, _)| path == manifest_path)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| anyhow::anyhow!("Mock manifest not found: {}", manifest_path.display()))
    }
}
