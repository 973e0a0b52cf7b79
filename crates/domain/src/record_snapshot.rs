use crate::record_definition::canonicalize;
use crate::RecordDefinition;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Immutable view of the record file at one point in time.
///
/// A new snapshot is built for every load; readers holding an older
/// `Arc<RecordSnapshot>` keep a consistent view until they drop it.
#[derive(Debug, Default)]
pub struct RecordSnapshot {
    records: FxHashMap<Arc<str>, Arc<RecordDefinition>>,
}

impl RecordSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Later definitions replace earlier ones with the same host.
    pub fn from_definitions(definitions: impl IntoIterator<Item = RecordDefinition>) -> Self {
        let mut records = FxHashMap::default();
        for definition in definitions {
            let key: Arc<str> = Arc::from(definition.fqdn());
            records.insert(key, Arc::new(definition));
        }
        Self { records }
    }

    /// Look up a name with or without the trailing dot, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&Arc<RecordDefinition>> {
        self.records.get(canonicalize(name).as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Canonical names in sorted order.
    pub fn names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.records.keys().cloned().collect();
        names.sort();
        names
    }
}
