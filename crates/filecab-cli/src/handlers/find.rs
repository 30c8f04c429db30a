use anyhow::{bail, Result};

use filecab_store::RecordService;
use filecab_types::{FieldValue, RecordField};

use crate::table;

/// Indexed lookup by one of the three indexed fields.
pub fn handle(service: &dyn RecordService, field: RecordField, raw: &str) -> Result<()> {
    let records = match field {
        RecordField::FirstName => service.find_by_first_name(raw),
        RecordField::LastName => service.find_by_last_name(raw),
        RecordField::DateOfBirth => {
            let FieldValue::Date(date) = field.parse_value(raw)? else {
                bail!("'{}' is not a date", raw);
            };
            service.find_by_birth_date(date)
        }
        other => bail!(
            "find supports firstname, lastname and dateofbirth, not {}",
            other
        ),
    };

    if records.is_empty() {
        println!("No records found.");
    } else {
        println!("{}", table::render(&records, &[]));
    }
    Ok(())
}
