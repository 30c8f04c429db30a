use chrono::NaiveDate;
use rust_decimal::Decimal;

use filecab_store::{DeleteReport, Error, MemoryStore, RecordService};
use filecab_testing::{record, sample_records};
use filecab_types::{FieldAssignment, FieldValue, QueryClause, Record, RecordField};

fn populated_store() -> MemoryStore {
    let mut store = MemoryStore::with_default_rules();
    for record in sample_records() {
        store.create(record).unwrap();
    }
    store
}

fn clause(pairs: &[(RecordField, FieldValue)]) -> QueryClause {
    QueryClause::from_pairs(pairs.to_vec()).unwrap()
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(Some(value.to_string()))
}

#[test]
fn test_create_appends_and_indexes() {
    let store = populated_store();

    assert_eq!(store.stat().total, 3);
    assert_eq!(store.last_index(), 3);
    assert!(store.indexes_consistent());

    let found = store.find_by_first_name("anna");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_create_rejects_invalid_record_without_side_effects() {
    let mut store = populated_store();

    let mut bad = record(4, "X", "Smith", (1990, 1, 1), 30, 1000, 'M');
    bad.first_name = Some("X".to_string());
    assert!(matches!(store.create(bad), Err(Error::Validation(_))));

    assert_eq!(store.stat().total, 3);
    assert!(store.indexes_consistent());
    // The rejected record never partially entered the indexes.
    assert!(store.find_by_first_name("X").is_empty());
}

#[test]
fn test_edit_rekeys_all_indexes() {
    let mut store = populated_store();

    let mut anna = record(1, "Anne", "Brown", (1991, 6, 2), 31, 1100, 'W');
    anna.id = 1;
    store.edit(anna).unwrap();

    assert!(store.find_by_first_name("anna").is_empty());
    assert_eq!(store.find_by_first_name("anne").len(), 1);
    assert_eq!(store.find_by_last_name("brown").len(), 1);
    assert_eq!(
        store
            .find_by_birth_date(NaiveDate::from_ymd_opt(1991, 6, 2).unwrap())
            .len(),
        1
    );
    assert!(store
        .find_by_birth_date(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
        .is_empty());
    assert!(store.indexes_consistent());
    // Insertion order of the list is preserved by an edit.
    assert_eq!(store.select(&[])[0].id, 1);
}

#[test]
fn test_edit_unknown_id_is_not_found_and_leaves_store_unmodified() {
    let mut store = populated_store();

    let ghost = record(99, "Ghost", "Nobody", (1990, 1, 1), 30, 100, 'M');
    assert!(matches!(store.edit(ghost), Err(Error::NotFound(99))));

    assert_eq!(store.stat().total, 3);
    assert!(store.indexes_consistent());
}

#[test]
fn test_insert_is_create_for_new_id_and_edit_for_existing() {
    let mut store = populated_store();

    // Never-seen id behaves as create.
    let id = store
        .insert(record(4, "Mary", "Poppins", (1992, 7, 7), 28, 1500, 'F'))
        .unwrap();
    assert_eq!(id, 4);
    assert_eq!(store.stat().total, 4);

    // Existing id behaves as edit with all fields overwritten.
    store
        .insert(record(4, "Maria", "Poppins", (1992, 7, 7), 28, 1500, 'F'))
        .unwrap();
    assert_eq!(store.stat().total, 4);
    assert!(store.find_by_first_name("Mary").is_empty());
    assert_eq!(store.find_by_first_name("Maria").len(), 1);
    assert!(store.indexes_consistent());
}

#[test]
fn test_remove_is_idempotent_on_id() {
    let mut store = populated_store();

    assert!(store.remove(2));
    assert_eq!(store.stat().total, 2);
    assert!(store.indexes_consistent());

    assert!(!store.remove(2));
    assert_eq!(store.stat().total, 2);
}

#[test]
fn test_id_uniqueness_is_preserved_across_operations() {
    let mut store = populated_store();
    store.remove(2);
    store
        .insert(record(2, "Jane", "Smith", (1985, 3, 12), 35, 1800, 'F'))
        .unwrap();
    store
        .insert(record(2, "Janet", "Smith", (1985, 3, 12), 35, 1800, 'F'))
        .unwrap();

    let mut ids: Vec<_> = store.select(&[]).iter().map(|r| r.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_select_all_and_or_semantics() {
    let mut store = populated_store();

    assert_eq!(store.select(&[]).len(), 3);

    let clauses = vec![
        clause(&[(RecordField::FirstName, text("Anna"))]),
        clause(&[(RecordField::LastName, text("Doe"))]),
    ];
    let selected = store.select(&clauses);
    let ids: Vec<_> = selected.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_select_within_clause_is_conjunctive() {
    let mut store = populated_store();

    let both = clause(&[
        (RecordField::LastName, text("Smith")),
        (RecordField::FirstName, text("Jane")),
    ]);
    let selected = store.select(&[both]);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, 2);
}

#[test]
fn test_select_is_memoized_until_mutation() {
    let mut store = populated_store();
    let query = vec![clause(&[(RecordField::LastName, text("Smith"))])];

    assert_eq!(store.select(&query).len(), 2);
    assert_eq!(store.cached_queries(), 1);

    // Same signature, different pattern garbage outside the subset.
    let mut noisy_pattern = Record::default();
    noisy_pattern.last_name = Some("Smith".to_string());
    noisy_pattern.age = 77;
    let noisy = vec![QueryClause::new(vec![RecordField::LastName], noisy_pattern)];
    assert_eq!(store.select(&noisy).len(), 2);
    assert_eq!(store.cached_queries(), 1);
}

#[test]
fn test_every_mutation_invalidates_the_cache() {
    let mut store = populated_store();
    let query = vec![clause(&[(RecordField::LastName, text("Smith"))])];

    assert_eq!(store.select(&query).len(), 2);
    store
        .create(record(4, "Sam", "Smith", (1999, 9, 9), 26, 900, 'M'))
        .unwrap();
    assert_eq!(store.cached_queries(), 0);
    assert_eq!(store.select(&query).len(), 3);

    let mut sam = record(4, "Sam", "Jones", (1999, 9, 9), 26, 900, 'M');
    sam.id = 4;
    store.edit(sam).unwrap();
    assert_eq!(store.select(&query).len(), 2);

    store.remove(1);
    assert_eq!(store.select(&query).len(), 1);
}

#[test]
fn test_find_by_first_name_scenario() {
    let mut store = MemoryStore::with_default_rules();
    store
        .create(record(1, "Anna", "Smith", (1990, 5, 1), 30, 1000, 'W'))
        .unwrap();

    let found = store.find_by_first_name("anna");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name.as_deref(), Some("Anna"));

    let mut anne = found[0].clone();
    anne.first_name = Some("Anne".to_string());
    store.edit(anne).unwrap();

    assert!(store.find_by_first_name("anna").is_empty());
    assert_eq!(store.find_by_first_name("anne").len(), 1);
}

#[test]
fn test_delete_by_last_name_names_both_ids_with_plural_grammar() {
    let mut store = populated_store();

    let report = store
        .delete(&clause(&[(RecordField::LastName, text("Smith"))]))
        .unwrap();
    assert_eq!(report, DeleteReport::Deleted(vec![1, 2]));
    assert_eq!(report.to_string(), "Records #1, #2 are deleted.");

    assert_eq!(store.stat().total, 1);
    assert!(store.indexes_consistent());
}

#[test]
fn test_delete_single_match_uses_singular_grammar() {
    let mut store = populated_store();

    let report = store
        .delete(&clause(&[(RecordField::FirstName, text("Anna"))]))
        .unwrap();
    assert_eq!(report.to_string(), "Record #1 is deleted.");
}

#[test]
fn test_delete_narrowing_miss_is_distinct_from_zero_matches() {
    let mut store = populated_store();

    // Indexed field, no bucket for the key: the early-exit report.
    let missed = store
        .delete(&clause(&[(RecordField::FirstName, text("Zoe"))]))
        .unwrap();
    assert_eq!(missed, DeleteReport::NoCandidates);
    assert_eq!(missed.to_string(), "No records were found to delete.");

    // Unindexed field, full scan, zero survivors: the ordinary report.
    let empty = store
        .delete(&clause(&[(RecordField::Age, FieldValue::Age(99))]))
        .unwrap();
    assert_eq!(empty, DeleteReport::Deleted(vec![]));
    assert_eq!(empty.to_string(), "No records are deleted.");

    assert_eq!(store.stat().total, 3);
}

#[test]
fn test_delete_narrows_then_compares_remaining_fields() {
    let mut store = populated_store();

    // Narrowed through the SMITH bucket, but only Jane survives the full
    // comparison.
    let report = store
        .delete(&clause(&[
            (RecordField::LastName, text("Smith")),
            (RecordField::Age, FieldValue::Age(35)),
        ]))
        .unwrap();
    assert_eq!(report, DeleteReport::Deleted(vec![2]));
    assert_eq!(store.stat().total, 2);
}

#[test]
fn test_delete_requires_a_non_empty_subset() {
    let mut store = populated_store();
    let err = store
        .delete(&QueryClause::new(Vec::new(), Record::default()))
        .unwrap_err();
    assert!(matches!(err, Error::EmptyQuery));
    assert_eq!(store.stat().total, 3);
}

#[test]
fn test_update_rewrites_only_the_assigned_fields() {
    let mut store = populated_store();

    let updated = store
        .update(
            &[
                FieldAssignment::new(RecordField::Age, FieldValue::Age(40)),
                FieldAssignment::new(
                    RecordField::Salary,
                    FieldValue::Salary(Decimal::new(2000, 0)),
                ),
            ],
            &clause(&[(RecordField::LastName, text("Smith"))]),
        )
        .unwrap();
    assert_eq!(updated, vec![1, 2]);

    for record in store.find_by_last_name("Smith") {
        assert_eq!(record.age, 40);
        assert_eq!(record.salary, Decimal::new(2000, 0));
    }
    // Unassigned fields survive.
    assert_eq!(store.find_by_first_name("Anna").len(), 1);
    assert!(store.indexes_consistent());
}

#[test]
fn test_update_through_the_index_it_rekeys() {
    let mut store = populated_store();

    // The search narrows through by_last_name while the assignment rewrites
    // that same index; iteration works from a snapshot of the matches.
    let updated = store
        .update(
            &[FieldAssignment::new(RecordField::LastName, text("Miller"))],
            &clause(&[(RecordField::LastName, text("Smith"))]),
        )
        .unwrap();
    assert_eq!(updated.len(), 2);
    assert!(store.find_by_last_name("Smith").is_empty());
    assert_eq!(store.find_by_last_name("Miller").len(), 2);
    assert!(store.indexes_consistent());
}

#[test]
fn test_update_rejects_id_assignment_before_matching() {
    let mut store = populated_store();

    let err = store
        .update(
            &[FieldAssignment::new(RecordField::Id, FieldValue::Id(9))],
            &clause(&[(RecordField::LastName, text("Smith"))]),
        )
        .unwrap_err();
    assert!(matches!(err, Error::IdImmutable));

    // Nothing was touched.
    assert_eq!(store.find_by_last_name("Smith").len(), 2);
    assert_eq!(store.last_index(), 3);
}

#[test]
fn test_update_with_no_matches_returns_no_ids() {
    let mut store = populated_store();
    let updated = store
        .update(
            &[FieldAssignment::new(RecordField::Age, FieldValue::Age(50))],
            &clause(&[(RecordField::LastName, text("Nobody"))]),
        )
        .unwrap();
    assert!(updated.is_empty());
}

#[test]
fn test_purge_is_a_no_op_that_preserves_order() {
    let mut store = populated_store();
    let before: Vec<_> = store.select(&[]).iter().map(|r| r.id).collect();

    assert_eq!(store.purge(), 0);
    let after: Vec<_> = store.select(&[]).iter().map(|r| r.id).collect();
    assert_eq!(before, after);
}

#[test]
fn test_snapshot_is_decoupled_from_later_mutation() {
    let mut store = populated_store();
    let snapshot = store.make_snapshot();

    store.remove(1);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(store.stat().total, 2);
}

#[test]
fn test_restore_upserts_in_snapshot_order() {
    let mut store = populated_store();
    let snapshot = store.make_snapshot();

    let mut other = MemoryStore::with_default_rules();
    other
        .create(record(2, "Old", "Entry", (1980, 1, 1), 46, 500, 'M'))
        .unwrap();

    let report = other.restore(&snapshot);
    assert_eq!(report.applied, vec![1, 2, 3]);
    assert!(report.failures.is_empty());

    // Id 2 was edited to the snapshot's values, the others created.
    assert_eq!(other.stat().total, 3);
    assert!(other.find_by_first_name("Old").is_empty());
    assert_eq!(other.find_by_first_name("Jane").len(), 1);
    assert!(other.indexes_consistent());
}

#[test]
fn test_restore_keeps_earlier_upserts_on_later_failure() {
    let mut store = MemoryStore::with_default_rules();

    let mut invalid = record(2, "Bad", "Record", (1990, 1, 1), 30, 1000, 'M');
    invalid.first_name = None;
    let snapshot = filecab_store::Snapshot::new(vec![
        record(1, "Anna", "Smith", (1990, 5, 1), 30, 1000, 'W'),
        invalid,
        record(3, "John", "Doe", (1978, 11, 30), 42, 2500, 'M'),
    ]);

    let report = store.restore(&snapshot);
    assert_eq!(report.applied, vec![1, 3]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, 2);

    assert_eq!(store.stat().total, 2);
    assert!(store.indexes_consistent());
}

#[test]
fn test_last_index_on_empty_store_is_zero() {
    let store = MemoryStore::with_default_rules();
    assert_eq!(store.last_index(), 0);
}

#[test]
fn test_index_consistency_over_a_mixed_operation_sequence() {
    let mut store = MemoryStore::with_default_rules();

    for record in sample_records() {
        store.create(record).unwrap();
        assert!(store.indexes_consistent());
    }

    let mut anna = record(1, "Anne", "Smith", (1990, 5, 1), 30, 1000, 'W');
    anna.id = 1;
    store.edit(anna).unwrap();
    assert!(store.indexes_consistent());

    store.remove(3);
    assert!(store.indexes_consistent());

    store
        .insert(record(5, "Pete", "Stone", (1995, 2, 2), 31, 1200, 'M'))
        .unwrap();
    assert!(store.indexes_consistent());

    store
        .delete(&clause(&[(RecordField::LastName, text("Smith"))]))
        .unwrap();
    assert!(store.indexes_consistent());
    assert_eq!(store.stat().total, 1);
}
