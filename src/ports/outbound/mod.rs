/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the console and the output grammars.
pub mod catalog_reader;
pub mod graph_renderer;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use graph_renderer::GraphRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
