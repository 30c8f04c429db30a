use anyhow::Result;

use filecab_store::RecordService;
use filecab_types::RecordId;

/// Remove one record by id.
pub fn handle(service: &mut dyn RecordService, id: RecordId) -> Result<()> {
    if service.remove(id) {
        println!("Record #{} is removed.", id);
    } else {
        println!("Record #{} doesn't exist.", id);
    }
    Ok(())
}
