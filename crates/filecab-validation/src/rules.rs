use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use filecab_types::{Record, RecordField};

use crate::config::RuleSet;
use crate::RecordValidator;

/// A record failing a field range or format check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingName { field: RecordField },

    #[error("{field} length must be between {min} and {max} characters")]
    NameLength {
        field: RecordField,
        min: usize,
        max: usize,
    },

    #[error("date of birth must be between {from} and {to}")]
    BirthDateOutOfRange { from: NaiveDate, to: NaiveDate },

    #[error("age must be between {min} and {max}")]
    AgeOutOfRange { min: u16, max: u16 },

    #[error("salary must not be less than {min}")]
    SalaryTooSmall { min: Decimal },

    #[error("salary must not exceed {max}")]
    SalaryTooLarge { max: Decimal },

    #[error("gender '{0}' is not allowed")]
    GenderNotAllowed(char),
}

/// Validator interpreting one rule set against every field of a record.
#[derive(Debug, Clone)]
pub struct RuleSetValidator {
    rules: RuleSet,
}

impl RuleSetValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    fn check_name(
        &self,
        field: RecordField,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) -> Result<(), ValidationError> {
        let name = value.ok_or(ValidationError::MissingName { field })?;
        let len = name.chars().count();
        if len < min || len > max {
            return Err(ValidationError::NameLength { field, min, max });
        }
        Ok(())
    }
}

impl RecordValidator for RuleSetValidator {
    fn validate(&self, record: &Record) -> Result<(), ValidationError> {
        self.check_name(
            RecordField::FirstName,
            record.first_name.as_deref(),
            self.rules.first_name.min,
            self.rules.first_name.max,
        )?;
        self.check_name(
            RecordField::LastName,
            record.last_name.as_deref(),
            self.rules.last_name.min,
            self.rules.last_name.max,
        )?;

        let to = self
            .rules
            .date_of_birth
            .to
            .unwrap_or_else(|| Utc::now().date_naive());
        if record.birth_date < self.rules.date_of_birth.from || record.birth_date > to {
            return Err(ValidationError::BirthDateOutOfRange {
                from: self.rules.date_of_birth.from,
                to,
            });
        }

        if record.age < self.rules.age.min || record.age > self.rules.age.max {
            return Err(ValidationError::AgeOutOfRange {
                min: self.rules.age.min,
                max: self.rules.age.max,
            });
        }

        if record.salary < self.rules.salary.min {
            return Err(ValidationError::SalaryTooSmall {
                min: self.rules.salary.min,
            });
        }
        if let Some(max) = self.rules.salary.max {
            if record.salary > max {
                return Err(ValidationError::SalaryTooLarge { max });
            }
        }

        let gender = record.gender.to_ascii_uppercase();
        let allowed = if self.rules.gender.is_empty() {
            record.gender.is_ascii_alphabetic()
        } else {
            self.rules
                .gender
                .iter()
                .any(|c| c.to_ascii_uppercase() == gender)
        };
        if !allowed {
            return Err(ValidationError::GenderNotAllowed(record.gender));
        }

        Ok(())
    }
}
