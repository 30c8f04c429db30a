use anyhow::Result;

use filecab_store::RecordService;
use filecab_types::{FieldValue, Record, RecordField};

/// Upsert a record under a caller-supplied id.
pub fn handle(
    service: &mut dyn RecordService,
    pairs: Vec<(RecordField, FieldValue)>,
) -> Result<()> {
    let mut record = Record::default();
    for (field, value) in &pairs {
        field.apply(&mut record, value)?;
    }

    let id = service.insert(record)?;
    println!("Record #{} is inserted.", id);
    Ok(())
}
