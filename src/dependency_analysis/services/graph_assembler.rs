use crate::dependency_analysis::domain::{
    Catalog, DependencyClosure, GraphModel, GraphNode, LinkKind, PackageRecord,
};
use crate::dependency_analysis::policies::FeatureLinkPolicy;

/// GraphAssembler service turning a catalog or a closure into a GraphModel
///
/// Assembly decides which nodes and links exist; the renderers only decide
/// how they are spelled.
pub struct GraphAssembler;

impl GraphAssembler {
    /// One node per catalog record, in catalog order
    ///
    /// Duplicate-named records each get their own node, as they would when
    /// walking the catalog sequentially.
    pub fn from_catalog(catalog: &Catalog, policy: FeatureLinkPolicy) -> GraphModel {
        let with_features = policy.includes_features(false);
        let nodes = catalog
            .records()
            .iter()
            .map(|record| {
                let mut node = GraphNode::new(record.name());
                for dependency in record.dependencies() {
                    node.link(dependency.name(), LinkKind::Dependency);
                }
                if with_features {
                    Self::link_features(&mut node, record);
                }
                node
            })
            .collect();
        GraphModel::new(nodes)
    }

    /// One node per closure entry, in closure order
    ///
    /// Dependency links come from the closure itself. Feature links, when
    /// the policy asks for them, are looked up in the catalog and may point
    /// outside the closure.
    pub fn from_closure(
        closure: &DependencyClosure,
        catalog: &Catalog,
        policy: FeatureLinkPolicy,
    ) -> GraphModel {
        let with_features = policy.includes_features(true);
        let nodes = closure
            .entries()
            .iter()
            .map(|entry| {
                let mut node = GraphNode::new(entry.name.as_str());
                for dependency in &entry.dependencies {
                    node.link(dependency.as_str(), LinkKind::Dependency);
                }
                if with_features {
                    if let Some(record) = catalog.find(&entry.name) {
                        Self::link_features(&mut node, record);
                    }
                }
                node
            })
            .collect();
        GraphModel::new(nodes)
    }

    fn link_features(node: &mut GraphNode, record: &PackageRecord) {
        for name in record.feature_dependency_names() {
            node.link(name, LinkKind::Feature);
        }
    }
}
