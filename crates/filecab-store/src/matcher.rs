//! Field-subset equality matching.
//!
//! The predicate behind delete, update and select: two records match over a
//! field subset iff every listed field extracts to a structurally equal
//! value. A missing name equals a missing name; a missing name never equals
//! a present one. No coercion is performed.

use filecab_types::{Record, RecordField};

/// True iff `pattern` and `candidate` agree on every field in `fields`.
///
/// Cost is O(|fields|) per comparison. An empty subset matches everything.
pub fn matches(fields: &[RecordField], pattern: &Record, candidate: &Record) -> bool {
    fields
        .iter()
        .all(|field| field.value(pattern) == field.value(candidate))
}
