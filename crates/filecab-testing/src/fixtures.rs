//! Record builders and sample data.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use filecab_types::{Record, RecordId};

/// Build a record from plain values. Dates are `(year, month, day)`,
/// salary is whole units.
pub fn record(
    id: RecordId,
    first: &str,
    last: &str,
    birth: (i32, u32, u32),
    age: u16,
    salary: i64,
    gender: char,
) -> Record {
    Record {
        id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2)
            .expect("fixture date must be valid"),
        age,
        salary: Decimal::new(salary, 0),
        gender,
    }
}

/// The standard sample set: two Smiths sharing a last name, distinct
/// first names and birth dates, one unrelated record.
pub fn sample_records() -> Vec<Record> {
    vec![
        record(1, "Anna", "Smith", (1990, 5, 1), 30, 1000, 'W'),
        record(2, "Jane", "Smith", (1985, 3, 12), 35, 1800, 'F'),
        record(3, "John", "Doe", (1978, 11, 30), 42, 2500, 'M'),
    ]
}
