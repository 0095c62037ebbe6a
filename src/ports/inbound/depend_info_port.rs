use crate::application::dto::{DependInfoRequest, DependInfoResponse};
use crate::shared::Result;

/// DependInfoPort - Inbound port for the dependency query
///
/// The CLI drives the application through this port: it hands over the
/// requested packages and gets back the assembled graph.
pub trait DependInfoPort {
    /// Loads the catalog and assembles the dependency graph for a request
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be listed or a manifest cannot
    /// be read. Unknown package names are not errors.
    fn describe(&self, request: DependInfoRequest) -> Result<DependInfoResponse>;
}
