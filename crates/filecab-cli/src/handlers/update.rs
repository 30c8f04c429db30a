use anyhow::Result;

use filecab_store::RecordService;
use filecab_types::{FieldAssignment, QueryClause};

use super::format_ids;

/// Overwrite the assigned fields on every record matching the condition.
pub fn handle(
    service: &mut dyn RecordService,
    assignments: &[FieldAssignment],
    query: &QueryClause,
) -> Result<()> {
    let ids = service.update(assignments, query)?;

    match ids.as_slice() {
        [] => println!("No records are updated."),
        [id] => println!("Record #{} is updated.", id),
        ids => println!("Records {} are updated.", format_ids(ids)),
    }
    Ok(())
}
