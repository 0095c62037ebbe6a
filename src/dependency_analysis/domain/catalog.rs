use super::PackageRecord;
use std::collections::HashMap;

/// Catalog aggregate: the ordered list of port records plus a name index.
///
/// Lookup is first-match-wins, the same answer a linear scan in catalog
/// order would give. Records with a duplicate name stay in `records()`
/// (full-catalog rendering still shows them) but are never returned by
/// `find`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PackageRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            index.entry(record.name().to_string()).or_insert(position);
        }
        Self { records, index }
    }

    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }

    pub fn find(&self, name: &str) -> Option<&PackageRecord> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<PackageRecord>> for Catalog {
    fn from(records: Vec<PackageRecord>) -> Self {
        Self::new(records)
    }
}
