use std::fmt;

use chrono::NaiveDate;

use filecab_types::{FieldAssignment, QueryClause, Record, RecordId};

use crate::error::Result;
use crate::snapshot::{RestoreReport, Snapshot};

/// The record-service capability: every query and mutation the command
/// layer can ask for. `MemoryStore` implements it; the logging and timing
/// decorators wrap any implementation behind the same interface.
pub trait RecordService {
    /// Validate and append a record. The id is taken from the record
    /// itself; callers synthesize it from `last_index() + 1`.
    fn create(&mut self, record: Record) -> Result<RecordId>;

    /// Replace an existing record's fields, re-keying every index.
    fn edit(&mut self, record: Record) -> Result<()>;

    /// Upsert keyed on id: edit when the id exists, create otherwise.
    fn insert(&mut self, record: Record) -> Result<RecordId>;

    /// Remove by id. False when the id is absent; no side effects then.
    fn remove(&mut self, id: RecordId) -> bool;

    /// Reclaim space after logical deletes. A contract placeholder for the
    /// in-memory store: returns how many records were purged (always 0).
    fn purge(&mut self) -> usize;

    /// Delete every record matching the clause.
    fn delete(&mut self, query: &QueryClause) -> Result<DeleteReport>;

    /// Overwrite the assigned fields on every record matching the clause.
    /// Returns the ids updated, in store order.
    fn update(
        &mut self,
        assignments: &[FieldAssignment],
        query: &QueryClause,
    ) -> Result<Vec<RecordId>>;

    /// Records matching any one of the clauses; an empty clause list
    /// selects everything. Results are memoized until the next mutation.
    fn select(&mut self, clauses: &[QueryClause]) -> Vec<Record>;

    /// Records sharing a first name, case-insensitively.
    fn find_by_first_name(&self, name: &str) -> Vec<Record>;

    /// Records sharing a last name, case-insensitively.
    fn find_by_last_name(&self, name: &str) -> Vec<Record>;

    /// Records sharing a date of birth.
    fn find_by_birth_date(&self, date: NaiveDate) -> Vec<Record>;

    /// Immutable copy of the full record list.
    fn make_snapshot(&self) -> Snapshot;

    /// Upsert-merge a snapshot, record by record, in snapshot order.
    fn restore(&mut self, snapshot: &Snapshot) -> RestoreReport;

    /// Highest id currently present, or 0 when the store is empty.
    fn last_index(&self) -> RecordId;

    /// Record counts for the `stat` command.
    fn stat(&self) -> StoreStat;
}

/// Counts reported by `stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStat {
    pub total: usize,
    /// Logically deleted records awaiting purge. Always 0 for the
    /// in-memory store.
    pub purgeable: usize,
}

/// Outcome of a delete, carrying the grammar of the user-facing summary.
///
/// `NoCandidates` is the early-exit case: index narrowing found no bucket
/// for the pattern key, so no record was even compared. It is deliberately
/// distinct from `Deleted` with an empty id list, which means candidates
/// existed but none survived the full field comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteReport {
    NoCandidates,
    Deleted(Vec<RecordId>),
}

impl DeleteReport {
    pub fn deleted_ids(&self) -> &[RecordId] {
        match self {
            DeleteReport::NoCandidates => &[],
            DeleteReport::Deleted(ids) => ids,
        }
    }
}

impl fmt::Display for DeleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteReport::NoCandidates => write!(f, "No records were found to delete."),
            DeleteReport::Deleted(ids) if ids.is_empty() => write!(f, "No records are deleted."),
            DeleteReport::Deleted(ids) if ids.len() == 1 => {
                write!(f, "Record #{} is deleted.", ids[0])
            }
            DeleteReport::Deleted(ids) => {
                let listed: Vec<String> = ids.iter().map(|id| format!("#{}", id)).collect();
                write!(f, "Records {} are deleted.", listed.join(", "))
            }
        }
    }
}
