/// Where a link comes from in the package record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Direct dependency of the package
    Dependency,
    /// Dependency declared by one of the package's optional features
    Feature,
}

/// Outgoing edge of a graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLink {
    pub target: String,
    pub kind: LinkKind,
}

/// Graph node with its outgoing links in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub links: Vec<GraphLink>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            links: Vec::new(),
        }
    }

    pub fn link(&mut self, target: impl Into<String>, kind: LinkKind) {
        self.links.push(GraphLink {
            target: target.into(),
            kind,
        });
    }

    /// Targets of direct-dependency links only
    pub fn dependency_targets(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .filter(|link| link.kind == LinkKind::Dependency)
            .map(|link| link.target.as_str())
    }

    pub fn has_dependencies(&self) -> bool {
        self.dependency_targets().next().is_some()
    }
}

/// Format-independent dependency graph: nodes and edges as plain data.
///
/// Renderers turn this into text; they never look at the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    nodes: Vec<GraphNode>,
}

impl GraphModel {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|node| node.links.len()).sum()
    }

    /// Nodes without direct dependencies
    pub fn singleton_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| !node.has_dependencies())
            .count()
    }
}
