use crate::dependency_analysis::domain::GraphModel;
use crate::ports::outbound::GraphRenderer;

/// PlainTextRenderer adapter producing one `name: dep1, dep2` line per node
///
/// Only direct dependencies are listed. A node without dependencies still
/// gets its line, ending in `": "`.
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for PlainTextRenderer {
    fn render(&self, graph: &GraphModel) -> String {
        graph
            .nodes()
            .iter()
            .map(|node| {
                let dependencies: Vec<&str> = node.dependency_targets().collect();
                format!("{}: {}", node.id, dependencies.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
