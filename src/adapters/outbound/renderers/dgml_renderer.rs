use crate::dependency_analysis::domain::GraphModel;
use crate::ports::outbound::GraphRenderer;

const DGML_PROLOG: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";
const DGML_NAMESPACE: &str = "http://schemas.microsoft.com/vs/2009/dgml";

/// DgmlRenderer adapter producing a Directed Graph Markup Language document
///
/// Every node is emitted under `<Nodes>` with its name unchanged. Every link
/// of the model, direct or feature-scoped, is emitted under `<Links>`.
/// Isolated nodes are listed like any other node.
pub struct DgmlRenderer;

impl DgmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes characters that are not allowed inside a quoted XML attribute
    fn escape_attribute(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for DgmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DgmlRenderer {
    fn render(&self, graph: &GraphModel) -> String {
        let mut nodes = String::new();
        let mut links = String::new();

        for node in graph.nodes() {
            let source = Self::escape_attribute(&node.id);
            nodes.push_str(&format!("<Node Id=\"{}\" />", source));
            for link in &node.links {
                links.push_str(&format!(
                    "<Link Source=\"{}\" Target=\"{}\" />",
                    source,
                    Self::escape_attribute(&link.target)
                ));
            }
        }

        format!(
            "{}<DirectedGraph xmlns=\"{}\"><Nodes>{}</Nodes><Links>{}</Links></DirectedGraph>",
            DGML_PROLOG, DGML_NAMESPACE, nodes, links
        )
    }
}
