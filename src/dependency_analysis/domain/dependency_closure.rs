use std::collections::HashMap;

/// One key of a dependency closure with its direct dependency names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureEntry {
    pub name: String,
    pub dependencies: Vec<String>,
}

/// Mapping from package name to its direct dependency names.
///
/// Keys iterate in insertion order. A key, once present, is never
/// replaced; this is what stops the traversal on cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyClosure {
    entries: Vec<ClosureEntry>,
    positions: HashMap<String, usize>,
}

impl DependencyClosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` unless it is already keyed. Returns whether it was added.
    pub fn insert(&mut self, name: String, dependencies: Vec<String>) -> bool {
        if self.positions.contains_key(&name) {
            return false;
        }
        self.positions.insert(name.clone(), self.entries.len());
        self.entries.push(ClosureEntry { name, dependencies });
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.positions
            .get(name)
            .map(|&position| self.entries[position].dependencies.as_slice())
    }

    pub fn entries(&self) -> &[ClosureEntry] {
        &self.entries
    }

    /// Keys in insertion order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
