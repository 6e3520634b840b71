use crate::store::EmbeddingRecord;
use std::collections::HashMap;

/// Lookup from an (identity, image-number) key to a position in the
/// embedding store. Must be deterministic; a missing key is a fatal
/// input-data error for the run, surfaced by the evaluator.
pub trait Resolver {
    fn resolve(&self, identity: &str, image: u32) -> Option<usize>;
}

/// Resolver backed by a hash map built from the store's records, mapping
/// each record's key to its position in record order.
#[derive(Debug, Default)]
pub struct IndexTable {
    entries: HashMap<(String, u32), usize>,
}

impl IndexTable {
    pub fn from_records(records: &[EmbeddingRecord]) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .map(|(idx, r)| ((r.identity.clone(), r.image), idx))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolver for IndexTable {
    fn resolve(&self, identity: &str, image: u32) -> Option<usize> {
        self.entries.get(&(identity.to_string(), image)).copied()
    }
}
