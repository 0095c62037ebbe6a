use crate::dependency_analysis::domain::{Catalog, DependencyClosure, PackageRecord};

/// ClosureBuilder service computing the transitive dependencies of a set of roots
///
/// Pure algorithm over an in-memory catalog. Traversal is depth-first in
/// pre-order: a package is keyed in the closure before its dependencies are
/// expanded, and a keyed package is never expanded twice, so cycles end on
/// their own. Names that do not resolve in the catalog are skipped silently.
pub struct ClosureBuilder;

impl ClosureBuilder {
    /// Builds the dependency closure of `roots`
    ///
    /// # Arguments
    /// * `catalog` - The port catalog (first match wins on duplicate names)
    /// * `roots` - Requested package names, used literally
    ///
    /// # Returns
    /// Every resolvable package reachable from `roots`, keyed in discovery
    /// order, each mapped to its declared direct dependency names. An empty
    /// `roots` slice gives an empty closure.
    pub fn build<S: AsRef<str>>(catalog: &Catalog, roots: &[S]) -> DependencyClosure {
        let mut closure = DependencyClosure::new();
        for root in roots {
            Self::expand(catalog, root.as_ref(), &mut closure);
        }
        closure
    }

    /// Walks everything reachable from `name` with an explicit stack of
    /// dependency iterators, one per package still being expanded.
    fn expand(catalog: &Catalog, name: &str, closure: &mut DependencyClosure) {
        let Some(record) = Self::admit(catalog, name, closure) else {
            return;
        };

        let mut pending = vec![record.dependencies().iter()];
        while let Some(dependencies) = pending.last_mut() {
            match dependencies.next() {
                Some(dependency) => {
                    if let Some(child) = Self::admit(catalog, dependency.name(), closure) {
                        pending.push(child.dependencies().iter());
                    }
                }
                None => {
                    pending.pop();
                }
            }
        }
    }

    /// Keys `name` in the closure and returns its record if it is new and
    /// resolvable; `None` means there is nothing to expand.
    fn admit<'a>(
        catalog: &'a Catalog,
        name: &str,
        closure: &mut DependencyClosure,
    ) -> Option<&'a PackageRecord> {
        if closure.contains(name) {
            return None;
        }
        let record = catalog.find(name)?;
        closure.insert(name.to_string(), record.dependency_names());
        Some(record)
    }
}
