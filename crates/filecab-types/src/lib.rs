pub mod error;
pub mod field;
pub mod query;
pub mod record;

pub use error::FieldError;
pub use field::{FieldValue, RecordField};
pub use query::{FieldAssignment, QueryClause};
pub use record::{Record, RecordId};
