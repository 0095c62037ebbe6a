use crate::dependency_analysis::domain::GraphModel;
use crate::ports::outbound::GraphRenderer;

const DOT_HEADER: &str = "digraph G{ rankdir=LR; edge [minlen=3]; overlap=false;";

/// DotRenderer adapter producing a single-line Graphviz digraph
///
/// Nodes with at least one direct dependency are declared together with
/// their edges. Nodes without dependencies are not declared; they are
/// folded into one `empty` node labelled with their count.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Bare DOT identifiers cannot contain `-`
    fn identifier(name: &str) -> String {
        name.replace('-', "_")
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &GraphModel) -> String {
        let mut output = String::from(DOT_HEADER);

        for node in graph.nodes().iter().filter(|node| node.has_dependencies()) {
            let name = Self::identifier(&node.id);
            output.push_str(&format!("{};", name));
            for target in node.dependency_targets() {
                output.push_str(&format!("{} -> {};", name, Self::identifier(target)));
            }
        }

        output.push_str(&format!(
            "empty [label=\"{} singletons...\"]; }}",
            graph.singleton_count()
        ));
        output
    }
}
