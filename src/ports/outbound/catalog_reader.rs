use crate::dependency_analysis::domain::PackageRecord;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// CatalogReader port for loading port manifests
///
/// Loading is split in two steps so the use case can report progress per
/// manifest.
pub trait CatalogReader {
    /// Lists the manifest files of a catalog, in catalog order
    ///
    /// # Arguments
    /// * `catalog_root` - Directory holding one subdirectory per port
    ///
    /// # Errors
    /// Returns an error if the catalog root does not exist or cannot be listed
    fn list_manifests(&self, catalog_root: &Path) -> Result<Vec<PathBuf>>;

    /// Reads and parses a single manifest into a package record
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid manifest
    fn read_manifest(&self, manifest_path: &Path) -> Result<PackageRecord>;
}
