//! Cross-cutting service wrappers.
//!
//! Logging and timing are layered around the `RecordService` boundary at
//! construction time instead of living inside the store. Both wrappers
//! delegate every call to the inner service unchanged.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDate};

use filecab_types::{FieldAssignment, QueryClause, Record, RecordId};

use crate::error::Result;
use crate::service::{DeleteReport, RecordService, StoreStat};
use crate::snapshot::{RestoreReport, Snapshot};

/// Prints the wall-clock duration of every service call.
pub struct ServiceMeter {
    inner: Box<dyn RecordService>,
}

impl ServiceMeter {
    pub fn new(inner: Box<dyn RecordService>) -> Self {
        Self { inner }
    }

    fn measure<T>(
        &mut self,
        name: &str,
        op: impl FnOnce(&mut dyn RecordService) -> T,
    ) -> T {
        let started = Instant::now();
        let result = op(self.inner.as_mut());
        println!(
            "{} method execution duration is {} us.",
            name,
            started.elapsed().as_micros()
        );
        result
    }
}

impl RecordService for ServiceMeter {
    fn create(&mut self, record: Record) -> Result<RecordId> {
        self.measure("create", |s| s.create(record))
    }

    fn edit(&mut self, record: Record) -> Result<()> {
        self.measure("edit", |s| s.edit(record))
    }

    fn insert(&mut self, record: Record) -> Result<RecordId> {
        self.measure("insert", |s| s.insert(record))
    }

    fn remove(&mut self, id: RecordId) -> bool {
        self.measure("remove", |s| s.remove(id))
    }

    fn purge(&mut self) -> usize {
        self.measure("purge", |s| s.purge())
    }

    fn delete(&mut self, query: &QueryClause) -> Result<DeleteReport> {
        self.measure("delete", |s| s.delete(query))
    }

    fn update(
        &mut self,
        assignments: &[FieldAssignment],
        query: &QueryClause,
    ) -> Result<Vec<RecordId>> {
        self.measure("update", |s| s.update(assignments, query))
    }

    fn select(&mut self, clauses: &[QueryClause]) -> Vec<Record> {
        self.measure("select", |s| s.select(clauses))
    }

    fn find_by_first_name(&self, name: &str) -> Vec<Record> {
        self.inner.find_by_first_name(name)
    }

    fn find_by_last_name(&self, name: &str) -> Vec<Record> {
        self.inner.find_by_last_name(name)
    }

    fn find_by_birth_date(&self, date: NaiveDate) -> Vec<Record> {
        self.inner.find_by_birth_date(date)
    }

    fn make_snapshot(&self) -> Snapshot {
        self.inner.make_snapshot()
    }

    fn restore(&mut self, snapshot: &Snapshot) -> RestoreReport {
        self.measure("restore", |s| s.restore(snapshot))
    }

    fn last_index(&self) -> RecordId {
        self.inner.last_index()
    }

    fn stat(&self) -> StoreStat {
        self.inner.stat()
    }
}

/// Appends a timestamped line per service call to a log file.
pub struct ServiceLogger {
    inner: Box<dyn RecordService>,
    out: File,
}

impl ServiceLogger {
    pub fn new(inner: Box<dyn RecordService>, path: &Path) -> std::io::Result<Self> {
        let out = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { inner, out })
    }

    fn note(&mut self, message: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Err(error) = writeln!(self.out, "{} - {}", stamp, message) {
            eprintln!("service log write failed: {}", error);
        }
    }
}

impl RecordService for ServiceLogger {
    fn create(&mut self, record: Record) -> Result<RecordId> {
        let result = self.inner.create(record);
        match &result {
            Ok(id) => self.note(&format!("create() created record #{}", id)),
            Err(error) => self.note(&format!("create() failed: {}", error)),
        }
        result
    }

    fn edit(&mut self, record: Record) -> Result<()> {
        let id = record.id;
        let result = self.inner.edit(record);
        match &result {
            Ok(()) => self.note(&format!("edit() updated record #{}", id)),
            Err(error) => self.note(&format!("edit() failed for record #{}: {}", id, error)),
        }
        result
    }

    fn insert(&mut self, record: Record) -> Result<RecordId> {
        let result = self.inner.insert(record);
        match &result {
            Ok(id) => self.note(&format!("insert() upserted record #{}", id)),
            Err(error) => self.note(&format!("insert() failed: {}", error)),
        }
        result
    }

    fn remove(&mut self, id: RecordId) -> bool {
        let found = self.inner.remove(id);
        self.note(&format!("remove(#{}) returned {}", id, found));
        found
    }

    fn purge(&mut self) -> usize {
        let purged = self.inner.purge();
        self.note(&format!("purge() removed {} records", purged));
        purged
    }

    fn delete(&mut self, query: &QueryClause) -> Result<DeleteReport> {
        let result = self.inner.delete(query);
        match &result {
            Ok(report) => self.note(&format!("delete() -> {}", report)),
            Err(error) => self.note(&format!("delete() failed: {}", error)),
        }
        result
    }

    fn update(
        &mut self,
        assignments: &[FieldAssignment],
        query: &QueryClause,
    ) -> Result<Vec<RecordId>> {
        let result = self.inner.update(assignments, query);
        match &result {
            Ok(ids) => self.note(&format!("update() touched {} records", ids.len())),
            Err(error) => self.note(&format!("update() failed: {}", error)),
        }
        result
    }

    fn select(&mut self, clauses: &[QueryClause]) -> Vec<Record> {
        let selected = self.inner.select(clauses);
        self.note(&format!(
            "select() with {} clauses returned {} records",
            clauses.len(),
            selected.len()
        ));
        selected
    }

    fn find_by_first_name(&self, name: &str) -> Vec<Record> {
        self.inner.find_by_first_name(name)
    }

    fn find_by_last_name(&self, name: &str) -> Vec<Record> {
        self.inner.find_by_last_name(name)
    }

    fn find_by_birth_date(&self, date: NaiveDate) -> Vec<Record> {
        self.inner.find_by_birth_date(date)
    }

    fn make_snapshot(&self) -> Snapshot {
        self.inner.make_snapshot()
    }

    fn restore(&mut self, snapshot: &Snapshot) -> RestoreReport {
        let report = self.inner.restore(snapshot);
        self.note(&format!(
            "restore() applied {} records, {} failed",
            report.applied.len(),
            report.failures.len()
        ));
        report
    }

    fn last_index(&self) -> RecordId {
        self.inner.last_index()
    }

    fn stat(&self) -> StoreStat {
        self.inner.stat()
    }
}
