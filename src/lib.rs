//! depend-info - dependency closure explorer for port catalogs
//!
//! This library answers "what does package P (transitively) depend on?" for a
//! directory of `port.toml` manifests, and renders the answer as plain text,
//! a Graphviz DOT digraph, or a DGML document. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): catalog, closure builder and graph model
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): manifest reader, renderers, presenters, console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depend_info::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let catalog_reader = PortsDirectoryReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = DependInfoUseCase::new(catalog_reader, progress_reporter);
//!
//! // Execute
//! let request = DependInfoRequest::new(PathBuf::from("ports"), vec!["curl".to_string()]);
//! let response = use_case.execute(request)?;
//!
//! // Render output
//! let renderer = RendererFactory::create(GraphFormat::Dot);
//! println!("{}", renderer.render(&response.graph));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, PortsDirectoryReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::renderers::{DgmlRenderer, DotRenderer, PlainTextRenderer};
    pub use crate::application::dto::{DependInfoRequest, DependInfoResponse, GraphFormat};
    pub use crate::application::factories::{PresenterFactory, PresenterType, RendererFactory};
    pub use crate::application::use_cases::DependInfoUseCase;
    pub use crate::ports::inbound::DependInfoPort;
    pub use crate::ports::outbound::{
        CatalogReader, GraphRenderer, OutputPresenter, ProgressReporter,
    };
    pub use crate::dependency_analysis::domain::{
        Catalog, Dependency, DependencyClosure, Feature, GraphModel, GraphNode, LinkKind,
        PackageName, PackageRecord,
    };
    pub use crate::dependency_analysis::policies::FeatureLinkPolicy;
    pub use crate::dependency_analysis::services::{ClosureBuilder, GraphAssembler};
    pub use crate::shared::Result;
}
