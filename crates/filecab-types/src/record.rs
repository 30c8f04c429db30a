use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a record.
///
/// The store never assigns ids; callers synthesize the next one from
/// `last_index() + 1`.
pub type RecordId = u32;

/// A single stored entity: id plus six user-facing fields.
///
/// The two name fields are optional to model records arriving from the
/// outside with a name missing. Validation rejects nameless records on
/// create/edit, so records held by the store always carry both names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique id, stable once assigned.
    pub id: RecordId,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Date of birth.
    #[serde(rename = "dateOfBirth")]
    pub birth_date: NaiveDate,
    /// Age in years.
    pub age: u16,
    /// Monthly salary.
    pub salary: Decimal,
    /// Gender marker, a single character.
    pub gender: char,
}
