use super::manifest::parse_manifest;
use crate::dependency_analysis::domain::PackageRecord;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::DependInfoError;
use crate::shared::security::{read_checked, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a port manifest inside its port directory
pub const MANIFEST_FILENAME: &str = "port.toml";

/// PortsDirectoryReader adapter reading a catalog laid out as
/// `<root>/<port>/port.toml`
///
/// Ports are listed in byte-wise directory name order so catalog order is
/// the same on every platform. Subdirectories without a manifest and plain
/// files at the root are skipped.
pub struct PortsDirectoryReader;

impl PortsDirectoryReader {
    pub fn new() -> Self {
        Self
    }

    fn validate_root(&self, catalog_root: &Path) -> Result<()> {
        if !catalog_root.exists() {
            return Err(DependInfoError::CatalogNotFound {
                path: catalog_root.to_path_buf(),
                suggestion: format!(
                    "Directory \"{}\" does not exist.\n   \
                     Run from a directory containing `ports/`, or pass the catalog with the --ports option.",
                    catalog_root.display()
                ),
            }
            .into());
        }

        if !catalog_root.is_dir() {
            return Err(DependInfoError::CatalogNotFound {
                path: catalog_root.to_path_buf(),
                suggestion: "The catalog must be a directory with one subdirectory per port."
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for PortsDirectoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for PortsDirectoryReader {
    fn list_manifests(&self, catalog_root: &Path) -> Result<Vec<PathBuf>> {
        self.validate_root(catalog_root)?;

        let entries = fs::read_dir(catalog_root).map_err(|e| DependInfoError::FileReadError {
            path: catalog_root.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut port_dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DependInfoError::FileReadError {
                path: catalog_root.to_path_buf(),
                details: e.to_string(),
            })?;
            // file_type() does not follow symlinks, so linked ports are skipped
            let file_type = entry.file_type().map_err(|e| DependInfoError::FileReadError {
                path: entry.path(),
                details: e.to_string(),
            })?;
            if file_type.is_dir() {
                port_dirs.push(entry.path());
            }
        }
        port_dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(port_dirs
            .into_iter()
            .map(|dir| dir.join(MANIFEST_FILENAME))
            .filter(|manifest| manifest.exists())
            .collect())
    }

    fn read_manifest(&self, manifest_path: &Path) -> Result<PackageRecord> {
        if manifest_path.is_symlink() {
            return Err(DependInfoError::SecurityError {
                path: manifest_path.to_path_buf(),
                reason: "Port manifest is a symbolic link".to_string(),
                hint: "Replace the link with a regular port.toml file".to_string(),
            }
            .into());
        }

        let content = read_checked(manifest_path, MANIFEST_FILENAME, MAX_MANIFEST_SIZE).map_err(
            |e| DependInfoError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            },
        )?;

        parse_manifest(&content).map_err(|e| {
            DependInfoError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
