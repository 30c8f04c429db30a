//! Memoization of select results.
//!
//! Keyed by the query's content signature: the per-clause `(field, value)`
//! pairs. Pattern fields outside a clause's subset never reach the
//! signature, so two requests that select the same records share an entry.
//! The cache is cleared in full on every mutation; entries are never
//! invalidated selectively.

use std::collections::HashMap;

use filecab_types::{FieldValue, QueryClause, Record, RecordField};

pub(crate) type QuerySignature = Vec<Vec<(RecordField, FieldValue)>>;

#[derive(Debug, Default)]
pub(crate) struct QueryCache {
    entries: HashMap<QuerySignature, Vec<Record>>,
}

impl QueryCache {
    pub fn signature(clauses: &[QueryClause]) -> QuerySignature {
        clauses.iter().map(QueryClause::signature).collect()
    }

    pub fn get(&self, signature: &QuerySignature) -> Option<&Vec<Record>> {
        self.entries.get(signature)
    }

    pub fn store(&mut self, signature: QuerySignature, records: Vec<Record>) {
        self.entries.insert(signature, records);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
