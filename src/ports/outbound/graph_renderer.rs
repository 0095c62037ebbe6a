use crate::dependency_analysis::domain::GraphModel;

/// GraphRenderer port for spelling a dependency graph in one output grammar
///
/// Rendering cannot fail: dangling link targets are emitted as they are and
/// left to the consuming tool.
pub trait GraphRenderer {
    /// Renders the whole graph into a single string
    fn render(&self, graph: &GraphModel) -> String;
}
