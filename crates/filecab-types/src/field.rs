use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::FieldError;
use crate::record::{Record, RecordId};

/// Closed enumeration of record fields.
///
/// Replaces the dynamic field access of the source system with a fixed set
/// of descriptors whose getters and setters resolve at compile time.
/// Operations that act on "an arbitrary subset of fields" take a slice of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    Age,
    Salary,
    Gender,
}

/// A value extracted from (or assignable to) one record field.
///
/// `Text` carries an `Option` because the name fields are nullable; two
/// missing names compare equal, a missing name never equals a present one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Id(RecordId),
    Text(Option<String>),
    Date(NaiveDate),
    Age(u16),
    Salary(Decimal),
    Gender(char),
}

impl RecordField {
    /// Every field, in declaration order.
    pub const ALL: [RecordField; 7] = [
        RecordField::Id,
        RecordField::FirstName,
        RecordField::LastName,
        RecordField::DateOfBirth,
        RecordField::Age,
        RecordField::Salary,
        RecordField::Gender,
    ];

    /// Extract this field's value from a record.
    pub fn value(&self, record: &Record) -> FieldValue {
        match self {
            RecordField::Id => FieldValue::Id(record.id),
            RecordField::FirstName => FieldValue::Text(record.first_name.clone()),
            RecordField::LastName => FieldValue::Text(record.last_name.clone()),
            RecordField::DateOfBirth => FieldValue::Date(record.birth_date),
            RecordField::Age => FieldValue::Age(record.age),
            RecordField::Salary => FieldValue::Salary(record.salary),
            RecordField::Gender => FieldValue::Gender(record.gender),
        }
    }

    /// Assign a value to this field on a record.
    ///
    /// The value must be of the field's own kind; no coercion is performed.
    pub fn apply(&self, record: &mut Record, value: &FieldValue) -> Result<(), FieldError> {
        match (self, value) {
            (RecordField::Id, FieldValue::Id(v)) => record.id = *v,
            (RecordField::FirstName, FieldValue::Text(v)) => record.first_name = v.clone(),
            (RecordField::LastName, FieldValue::Text(v)) => record.last_name = v.clone(),
            (RecordField::DateOfBirth, FieldValue::Date(v)) => record.birth_date = *v,
            (RecordField::Age, FieldValue::Age(v)) => record.age = *v,
            (RecordField::Salary, FieldValue::Salary(v)) => record.salary = *v,
            (RecordField::Gender, FieldValue::Gender(v)) => record.gender = *v,
            _ => return Err(FieldError::TypeMismatch { field: *self }),
        }
        Ok(())
    }

    /// Parse raw command text into a value of this field's kind.
    ///
    /// Dates accept ISO `YYYY-MM-DD` and the legacy `MM/DD/YYYY` form.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, FieldError> {
        let raw = raw.trim();
        let invalid = || FieldError::InvalidValue {
            field: *self,
            value: raw.to_string(),
        };

        match self {
            RecordField::Id => raw
                .parse::<RecordId>()
                .map(FieldValue::Id)
                .map_err(|_| invalid()),
            RecordField::FirstName | RecordField::LastName => {
                if raw.is_empty() {
                    Ok(FieldValue::Text(None))
                } else {
                    Ok(FieldValue::Text(Some(raw.to_string())))
                }
            }
            RecordField::DateOfBirth => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
                .map(FieldValue::Date)
                .map_err(|_| invalid()),
            RecordField::Age => raw
                .parse::<u16>()
                .map(FieldValue::Age)
                .map_err(|_| invalid()),
            RecordField::Salary => Decimal::from_str(raw)
                .map(FieldValue::Salary)
                .map_err(|_| invalid()),
            RecordField::Gender => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(FieldValue::Gender(c)),
                    _ => Err(invalid()),
                }
            }
        }
    }

    /// Canonical lowercase name, as written in shell commands.
    pub fn name(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::FirstName => "firstname",
            RecordField::LastName => "lastname",
            RecordField::DateOfBirth => "dateofbirth",
            RecordField::Age => "age",
            RecordField::Salary => "salary",
            RecordField::Gender => "gender",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "id" => Ok(RecordField::Id),
            "firstname" => Ok(RecordField::FirstName),
            "lastname" => Ok(RecordField::LastName),
            "dateofbirth" | "birthdate" => Ok(RecordField::DateOfBirth),
            "age" => Ok(RecordField::Age),
            "salary" => Ok(RecordField::Salary),
            "gender" => Ok(RecordField::Gender),
            _ => Err(FieldError::UnknownField(s.trim().to_string())),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Id(v) => write!(f, "{}", v),
            FieldValue::Text(Some(v)) => f.write_str(v),
            FieldValue::Text(None) => Ok(()),
            FieldValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            FieldValue::Age(v) => write!(f, "{}", v),
            FieldValue::Salary(v) => write!(f, "{}", v),
            FieldValue::Gender(v) => write!(f, "{}", v),
        }
    }
}
