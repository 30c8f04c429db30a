use std::fmt;

use crate::field::RecordField;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field name does not match any record field
    UnknownField(String),

    /// A value of the wrong kind was assigned to a field
    TypeMismatch { field: RecordField },

    /// Raw text could not be parsed as a value for the field
    InvalidValue { field: RecordField, value: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "Unknown field: {}", name),
            FieldError::TypeMismatch { field } => {
                write!(f, "Value has the wrong type for field '{}'", field)
            }
            FieldError::InvalidValue { field, value } => {
                write!(f, "Invalid value for field '{}': {}", field, value)
            }
        }
    }
}

impl std::error::Error for FieldError {}
