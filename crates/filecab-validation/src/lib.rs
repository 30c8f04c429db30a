pub mod config;
pub mod rules;

pub use config::{RuleSet, ValidationConfig};
pub use rules::{RuleSetValidator, ValidationError};

use filecab_types::Record;

/// Capability consumed by the store on every create/edit: accept or reject
/// a record before it touches the record list or the indexes.
pub trait RecordValidator {
    fn validate(&self, record: &Record) -> Result<(), ValidationError>;
}
