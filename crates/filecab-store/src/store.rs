//! The in-memory record store.
//!
//! `records` is the source of truth, in insertion order. The three
//! secondary indexes and the query cache are derived state: every public
//! operation leaves the indexes agreeing with the list exactly, and every
//! mutation clears the cache in full before returning.

use chrono::NaiveDate;

use filecab_types::{FieldAssignment, QueryClause, Record, RecordField, RecordId};
use filecab_validation::{RecordValidator, RuleSet, RuleSetValidator};

use crate::cache::QueryCache;
use crate::error::{Error, Result};
use crate::index::{name_key, Indexes};
use crate::matcher::matches;
use crate::service::{DeleteReport, RecordService, StoreStat};
use crate::snapshot::{RestoreReport, Snapshot};

/// How a clause's match set is gathered before full field comparison.
enum Candidates {
    /// An index bucket narrowed the set down to these ids.
    Narrowed(Vec<RecordId>),
    /// No indexed field in the subset; scan the whole list.
    FullScan,
}

pub struct MemoryStore {
    validator: Box<dyn RecordValidator>,
    records: Vec<Record>,
    indexes: Indexes,
    cache: QueryCache,
}

impl MemoryStore {
    pub fn new(validator: Box<dyn RecordValidator>) -> Self {
        Self {
            validator,
            records: Vec::new(),
            indexes: Indexes::default(),
            cache: QueryCache::default(),
        }
    }

    /// Store validating against the built-in default rule set.
    pub fn with_default_rules() -> Self {
        Self::new(Box::new(RuleSetValidator::new(RuleSet::default_rules())))
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn record_by_id(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Narrow a clause's candidates through the first applicable index, in
    /// first-name, last-name, date-of-birth priority order.
    fn narrow(&self, query: &QueryClause) -> Candidates {
        if query.fields.contains(&RecordField::FirstName) {
            let key = name_key(query.pattern.first_name.as_deref());
            return Candidates::Narrowed(self.indexes.first_name_ids(&key).to_vec());
        }
        if query.fields.contains(&RecordField::LastName) {
            let key = name_key(query.pattern.last_name.as_deref());
            return Candidates::Narrowed(self.indexes.last_name_ids(&key).to_vec());
        }
        if query.fields.contains(&RecordField::DateOfBirth) {
            return Candidates::Narrowed(
                self.indexes.birth_date_ids(query.pattern.birth_date).to_vec(),
            );
        }
        Candidates::FullScan
    }

    /// Ids matching the clause after narrowing and full comparison, in
    /// store order. `None` is the narrowing early-exit: the index held no
    /// bucket for the pattern key, so nothing was compared at all.
    fn matched_ids(&self, query: &QueryClause) -> Option<Vec<RecordId>> {
        let candidates = match self.narrow(query) {
            Candidates::Narrowed(ids) if ids.is_empty() => return None,
            Candidates::Narrowed(ids) => ids,
            Candidates::FullScan => self.records.iter().map(|record| record.id).collect(),
        };

        let matched = candidates
            .into_iter()
            .filter(|id| {
                self.record_by_id(*id)
                    .is_some_and(|record| matches(&query.fields, &query.pattern, record))
            })
            .collect();
        Some(matched)
    }

    /// Exposed for consistency checks in tests: true iff the record count,
    /// index entries and index keys all agree.
    pub fn indexes_consistent(&self) -> bool {
        self.records.len() * 3 == self.indexes.entry_count()
            && self.records.iter().all(|record| self.indexes.contains(record))
    }

    /// Number of memoized select results currently held.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }
}

impl RecordService for MemoryStore {
    fn create(&mut self, record: Record) -> Result<RecordId> {
        self.validator.validate(&record)?;

        let id = record.id;
        self.indexes.insert(&record);
        self.records.push(record);
        self.cache.clear();
        Ok(id)
    }

    fn edit(&mut self, record: Record) -> Result<()> {
        let position = self.position(record.id).ok_or(Error::NotFound(record.id))?;
        self.validator.validate(&record)?;

        let old = self.records[position].clone();
        self.indexes.remove(&old);
        self.indexes.insert(&record);
        self.records[position] = record;
        self.cache.clear();
        Ok(())
    }

    fn insert(&mut self, record: Record) -> Result<RecordId> {
        if self.position(record.id).is_some() {
            let id = record.id;
            self.edit(record)?;
            Ok(id)
        } else {
            self.create(record)
        }
    }

    fn remove(&mut self, id: RecordId) -> bool {
        match self.position(id) {
            Some(position) => {
                let record = self.records.remove(position);
                self.indexes.remove(&record);
                self.cache.clear();
                true
            }
            None => false,
        }
    }

    fn purge(&mut self) -> usize {
        // Nothing is ever logically deleted in memory.
        0
    }

    fn delete(&mut self, query: &QueryClause) -> Result<DeleteReport> {
        if query.fields.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let matched = match self.matched_ids(query) {
            None => return Ok(DeleteReport::NoCandidates),
            Some(ids) => ids,
        };

        for id in &matched {
            self.remove(*id);
        }
        Ok(DeleteReport::Deleted(matched))
    }

    fn update(
        &mut self,
        assignments: &[FieldAssignment],
        query: &QueryClause,
    ) -> Result<Vec<RecordId>> {
        if assignments
            .iter()
            .any(|assignment| assignment.field == RecordField::Id)
        {
            return Err(Error::IdImmutable);
        }
        if assignments.is_empty() || query.fields.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let matched = self.matched_ids(query).unwrap_or_default();

        // Work from a copy of the matches: edit re-keys the very indexes
        // the search was derived from.
        let originals: Vec<Record> = matched
            .iter()
            .filter_map(|id| self.record_by_id(*id).cloned())
            .collect();

        let mut updated = Vec::with_capacity(originals.len());
        for mut record in originals {
            for assignment in assignments {
                assignment.field.apply(&mut record, &assignment.value)?;
            }
            let id = record.id;
            self.edit(record)?;
            updated.push(id);
        }
        Ok(updated)
    }

    fn select(&mut self, clauses: &[QueryClause]) -> Vec<Record> {
        let signature = QueryCache::signature(clauses);
        if let Some(hit) = self.cache.get(&signature) {
            return hit.clone();
        }

        let selected: Vec<Record> = if clauses.is_empty() {
            self.records.clone()
        } else {
            self.records
                .iter()
                .filter(|record| {
                    clauses
                        .iter()
                        .any(|clause| matches(&clause.fields, &clause.pattern, record))
                })
                .cloned()
                .collect()
        };

        self.cache.store(signature, selected.clone());
        selected
    }

    fn find_by_first_name(&self, name: &str) -> Vec<Record> {
        self.indexes
            .first_name_ids(name)
            .iter()
            .filter_map(|id| self.record_by_id(*id).cloned())
            .collect()
    }

    fn find_by_last_name(&self, name: &str) -> Vec<Record> {
        self.indexes
            .last_name_ids(name)
            .iter()
            .filter_map(|id| self.record_by_id(*id).cloned())
            .collect()
    }

    fn find_by_birth_date(&self, date: NaiveDate) -> Vec<Record> {
        self.indexes
            .birth_date_ids(date)
            .iter()
            .filter_map(|id| self.record_by_id(*id).cloned())
            .collect()
    }

    fn make_snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.clone())
    }

    fn restore(&mut self, snapshot: &Snapshot) -> RestoreReport {
        let mut report = RestoreReport::default();
        for record in snapshot.records() {
            match self.insert(record.clone()) {
                Ok(id) => report.applied.push(id),
                Err(error) => report.failures.push((record.id, error)),
            }
        }
        report
    }

    fn last_index(&self) -> RecordId {
        self.records.iter().map(|record| record.id).max().unwrap_or(0)
    }

    fn stat(&self) -> StoreStat {
        StoreStat {
            total: self.records.len(),
            purgeable: 0,
        }
    }
}
