use anyhow::{bail, Result};

use filecab_store::RecordService;
use filecab_types::{FieldValue, Record, RecordField};

/// Create a record with a store-assigned id.
pub fn handle(
    service: &mut dyn RecordService,
    pairs: Vec<(RecordField, FieldValue)>,
) -> Result<()> {
    if pairs.iter().any(|(field, _)| *field == RecordField::Id) {
        bail!("create assigns the id itself; use insert to supply one");
    }

    let mut record = Record::default();
    record.id = service.last_index() + 1;
    for (field, value) in &pairs {
        field.apply(&mut record, value)?;
    }

    let id = service.create(record)?;
    println!("Record #{} is created.", id);
    Ok(())
}
