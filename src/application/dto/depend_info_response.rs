use crate::dependency_analysis::domain::GraphModel;

/// DependInfoResponse - Response DTO from the dependency query use case
///
/// Carries the assembled graph; formatting into a grammar is left to the
/// renderer chosen by the caller.
#[derive(Debug, Clone)]
pub struct DependInfoResponse {
    /// Graph of the whole catalog or of the requested closure
    pub graph: GraphModel,
    /// Number of records loaded from the catalog
    pub catalog_size: usize,
    /// Whether `graph` is restricted to a dependency closure
    pub filtered: bool,
}

impl DependInfoResponse {
    pub fn new(graph: GraphModel, catalog_size: usize, filtered: bool) -> Self {
        Self {
            graph,
            catalog_size,
            filtered,
        }
    }
}
