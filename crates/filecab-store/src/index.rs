//! Secondary indexes derived from the record list.
//!
//! Three mappings from normalized field value to the ids sharing it. They
//! are never authoritative: after every public store operation they reflect
//! the record list exactly. A key whose bucket empties is removed rather
//! than left behind.

use std::collections::HashMap;

use chrono::NaiveDate;
use filecab_types::{Record, RecordId};

/// Normalized key for the name indexes: uppercase, missing name keyed as
/// the empty string.
pub(crate) fn name_key(name: Option<&str>) -> String {
    name.unwrap_or("").to_uppercase()
}

#[derive(Debug, Default)]
pub(crate) struct Indexes {
    by_first_name: HashMap<String, Vec<RecordId>>,
    by_last_name: HashMap<String, Vec<RecordId>>,
    by_birth_date: HashMap<NaiveDate, Vec<RecordId>>,
}

impl Indexes {
    /// Register a record under its current field values.
    pub fn insert(&mut self, record: &Record) {
        self.by_first_name
            .entry(name_key(record.first_name.as_deref()))
            .or_default()
            .push(record.id);
        self.by_last_name
            .entry(name_key(record.last_name.as_deref()))
            .or_default()
            .push(record.id);
        self.by_birth_date
            .entry(record.birth_date)
            .or_default()
            .push(record.id);
    }

    /// Drop a record from all three indexes under its current field values.
    pub fn remove(&mut self, record: &Record) {
        remove_id(
            &mut self.by_first_name,
            name_key(record.first_name.as_deref()),
            record.id,
        );
        remove_id(
            &mut self.by_last_name,
            name_key(record.last_name.as_deref()),
            record.id,
        );
        remove_id(&mut self.by_birth_date, record.birth_date, record.id);
    }

    /// Ids sharing a first name, case-insensitively.
    pub fn first_name_ids(&self, name: &str) -> &[RecordId] {
        self.by_first_name
            .get(&name.to_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Ids sharing a last name, case-insensitively.
    pub fn last_name_ids(&self, name: &str) -> &[RecordId] {
        self.by_last_name
            .get(&name.to_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Ids sharing a date of birth.
    pub fn birth_date_ids(&self, date: NaiveDate) -> &[RecordId] {
        self.by_birth_date.get(&date).map_or(&[], Vec::as_slice)
    }

    /// True iff `id` is reachable from each index under the keys derived
    /// from `record`'s current values. Used by consistency tests.
    pub fn contains(&self, record: &Record) -> bool {
        self.first_name_ids(&name_key(record.first_name.as_deref()))
            .contains(&record.id)
            && self
                .last_name_ids(&name_key(record.last_name.as_deref()))
                .contains(&record.id)
            && self.birth_date_ids(record.birth_date).contains(&record.id)
    }

    /// Total number of id entries across the three indexes. Equals three
    /// times the record count when the indexes are consistent.
    pub fn entry_count(&self) -> usize {
        self.by_first_name.values().map(Vec::len).sum::<usize>()
            + self.by_last_name.values().map(Vec::len).sum::<usize>()
            + self.by_birth_date.values().map(Vec::len).sum::<usize>()
    }

    /// Number of distinct keys across the three indexes.
    pub fn key_count(&self) -> usize {
        self.by_first_name.len() + self.by_last_name.len() + self.by_birth_date.len()
    }
}

fn remove_id<K: std::hash::Hash + Eq>(map: &mut HashMap<K, Vec<RecordId>>, key: K, id: RecordId) {
    if let Some(bucket) = map.get_mut(&key) {
        bucket.retain(|entry| *entry != id);
        if bucket.is_empty() {
            map.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: RecordId, first: &str, last: &str) -> Record {
        Record {
            id,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            ..Record::default()
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut indexes = Indexes::default();
        indexes.insert(&record(1, "Anna", "Smith"));

        assert_eq!(indexes.first_name_ids("anna"), &[1]);
        assert_eq!(indexes.first_name_ids("ANNA"), &[1]);
        assert_eq!(indexes.last_name_ids("smith"), &[1]);
        assert!(indexes.first_name_ids("anne").is_empty());
    }

    #[test]
    fn test_remove_drops_empty_keys() {
        let mut indexes = Indexes::default();
        let anna = record(1, "Anna", "Smith");
        let jane = record(2, "Jane", "Smith");
        indexes.insert(&anna);
        indexes.insert(&jane);

        indexes.remove(&anna);
        // The shared SMITH key survives, the ANNA key is gone entirely.
        assert_eq!(indexes.last_name_ids("Smith"), &[2]);
        assert_eq!(indexes.key_count(), 3); // JANE, SMITH, one date

        indexes.remove(&jane);
        assert_eq!(indexes.key_count(), 0);
        assert_eq!(indexes.entry_count(), 0);
    }
}
