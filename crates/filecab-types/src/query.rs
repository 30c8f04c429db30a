use crate::error::FieldError;
use crate::field::{FieldValue, RecordField};
use crate::record::Record;

/// One equality clause of a query: a field subset plus a pattern record
/// carrying the values to match on those fields.
///
/// Within a clause every listed field must match; a query is a list of
/// clauses combined with OR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryClause {
    pub fields: Vec<RecordField>,
    pub pattern: Record,
}

impl QueryClause {
    pub fn new(fields: Vec<RecordField>, pattern: Record) -> Self {
        Self { fields, pattern }
    }

    /// Build a clause from parsed `(field, value)` pairs.
    ///
    /// Pattern fields outside the subset are left at their defaults; they
    /// play no part in matching.
    pub fn from_pairs(pairs: Vec<(RecordField, FieldValue)>) -> Result<Self, FieldError> {
        let mut pattern = Record::default();
        let mut fields = Vec::with_capacity(pairs.len());
        for (field, value) in pairs {
            field.apply(&mut pattern, &value)?;
            fields.push(field);
        }
        Ok(Self { fields, pattern })
    }

    /// The clause's content signature: its `(field, value)` pairs in subset
    /// order. Two clauses with equal signatures select the same records.
    pub fn signature(&self) -> Vec<(RecordField, FieldValue)> {
        self.fields
            .iter()
            .map(|field| (*field, field.value(&self.pattern)))
            .collect()
    }
}

/// A single `field = value` assignment in an update set-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field: RecordField,
    pub value: FieldValue,
}

impl FieldAssignment {
    pub fn new(field: RecordField, value: FieldValue) -> Self {
        Self { field, value }
    }
}
