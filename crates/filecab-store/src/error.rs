use thiserror::Error;

use filecab_types::{FieldError, RecordId};
use filecab_validation::ValidationError;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy of the record store.
///
/// Every error is raised synchronously, before any partial mutation of the
/// record list or the indexes.
#[derive(Debug, Error)]
pub enum Error {
    /// Edit targeted an id that is not in the store
    #[error("record #{0} was not found")]
    NotFound(RecordId),

    /// The record failed a field range or format check
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A query or set-list named no fields at all
    #[error("the query must name at least one field")]
    EmptyQuery,

    /// An update tried to change the id field
    #[error("the id field cannot be updated")]
    IdImmutable,

    /// A field-level assignment or parse failed
    #[error(transparent)]
    Field(#[from] FieldError),
}
