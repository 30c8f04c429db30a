use anyhow::{bail, Result};

use filecab_store::RecordService;
use filecab_types::{FieldValue, QueryClause, RecordField, RecordId};

/// Overwrite fields of one record, looked up by id.
pub fn handle(
    service: &mut dyn RecordService,
    id: RecordId,
    pairs: Vec<(RecordField, FieldValue)>,
) -> Result<()> {
    if pairs.iter().any(|(field, _)| *field == RecordField::Id) {
        bail!("the id field cannot be updated");
    }

    let by_id = QueryClause::from_pairs(vec![(RecordField::Id, FieldValue::Id(id))])?;
    let mut found = service.select(&[by_id]);
    let Some(mut record) = found.pop() else {
        println!("Record #{} doesn't exist.", id);
        return Ok(());
    };

    for (field, value) in &pairs {
        field.apply(&mut record, value)?;
    }

    service.edit(record)?;
    println!("Record #{} is updated.", id);
    Ok(())
}
