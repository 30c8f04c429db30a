use filecab_types::{Record, RecordId};

use crate::error::Error;

/// Immutable point-in-time copy of all records, decoupled from ongoing
/// mutation. Produced for export, consumed by import through `restore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<Record>,
}

impl Snapshot {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of a restore: each snapshot record is applied independently, so
/// one invalid record does not roll back the ones applied before it.
#[derive(Debug, Default)]
pub struct RestoreReport {
    /// Ids upserted, in snapshot order.
    pub applied: Vec<RecordId>,
    /// Records that failed, with the error each one raised.
    pub failures: Vec<(RecordId, Error)>,
}
