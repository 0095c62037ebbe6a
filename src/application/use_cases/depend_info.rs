use crate::application::dto::{DependInfoRequest, DependInfoResponse};
use crate::dependency_analysis::domain::Catalog;
use crate::dependency_analysis::services::{ClosureBuilder, GraphAssembler};
use crate::ports::inbound::DependInfoPort;
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// DependInfoUseCase - Core use case answering "what does P depend on?"
///
/// Loads the catalog through the injected reader, optionally restricts it
/// to the closure of the requested packages and assembles the graph.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct DependInfoUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> DependInfoUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    /// Creates a new DependInfoUseCase with injected dependencies
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the dependency query
    ///
    /// # Returns
    /// DependInfoResponse holding the graph of the whole catalog when no
    /// package was requested, or of the requested packages' closure.
    /// Requested names missing from the catalog are skipped silently.
    pub fn execute(&self, request: DependInfoRequest) -> Result<DependInfoResponse> {
        // Step 1: Load the catalog
        let catalog = self.load_catalog(&request.catalog_root)?;

        // Step 2: Assemble the graph
        let graph = if request.is_filtered() {
            self.progress_reporter.report(&format!(
                "🔎 Computing dependency closure of {} package(s)...",
                request.packages.len()
            ));

            let closure = ClosureBuilder::build(&catalog, request.packages.as_slice());

            self.progress_reporter.report(&format!(
                "   - Packages in closure: {}",
                closure.len()
            ));

            GraphAssembler::from_closure(&closure, &catalog, request.feature_links)
        } else {
            GraphAssembler::from_catalog(&catalog, request.feature_links)
        };

        Ok(DependInfoResponse::new(
            graph,
            catalog.len(),
            request.is_filtered(),
        ))
    }

    /// Reads every manifest of the catalog, reporting progress per manifest
    fn load_catalog(&self, catalog_root: &Path) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading port manifests from: {}",
            catalog_root.display()
        ));

        let manifests = self.catalog_reader.list_manifests(catalog_root)?;
        let total = manifests.len();
        let mut records = Vec::with_capacity(total);

        for (idx, manifest) in manifests.iter().enumerate() {
            let record = match self.catalog_reader.read_manifest(manifest) {
                Ok(record) => record,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Failed to load manifest: {}",
                        manifest.display()
                    ));
                    return Err(e);
                }
            };
            self.progress_reporter
                .report_progress(idx + 1, total, Some(record.name()));
            records.push(record);
        }

        self.progress_reporter
            .report_completion(&format!("✅ Loaded {} package(s)", total));

        Ok(Catalog::new(records))
    }
}

impl<CR, PR> DependInfoPort for DependInfoUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    fn describe(&self, request: DependInfoRequest) -> Result<DependInfoResponse> {
        self.execute(request)
    }
}
