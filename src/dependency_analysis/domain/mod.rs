pub mod catalog;
pub mod dependency_closure;
pub mod graph_model;
pub mod package;

pub use catalog::Catalog;
pub use dependency_closure::{ClosureEntry, DependencyClosure};
pub use graph_model::{GraphLink, GraphModel, GraphNode, LinkKind};
pub use package::{Dependency, Feature, PackageName, PackageRecord};
