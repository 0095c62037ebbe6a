use crate::dependency_analysis::policies::FeatureLinkPolicy;
use std::path::PathBuf;

/// DependInfoRequest - Request DTO for the dependency query use case
#[derive(Debug, Clone)]
pub struct DependInfoRequest {
    /// Directory holding one subdirectory per port
    pub catalog_root: PathBuf,
    /// Requested root packages; empty means the whole catalog
    pub packages: Vec<String>,
    /// When feature dependencies become graph links
    pub feature_links: FeatureLinkPolicy,
}

impl DependInfoRequest {
    pub fn new(catalog_root: PathBuf, packages: Vec<String>) -> Self {
        Self {
            catalog_root,
            packages,
            feature_links: FeatureLinkPolicy::default(),
        }
    }

    pub fn with_feature_links(mut self, feature_links: FeatureLinkPolicy) -> Self {
        self.feature_links = feature_links;
        self
    }

    /// Whether the graph is restricted to a dependency closure
    pub fn is_filtered(&self) -> bool {
        !self.packages.is_empty()
    }
}
