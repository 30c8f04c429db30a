use anyhow::Result;

use filecab_store::RecordService;

/// Reclaim space after logical deletes. A no-op for the in-memory store.
pub fn handle(service: &mut dyn RecordService) -> Result<()> {
    let total = service.stat().total;
    let purged = service.purge();
    println!("{} of {} records were purged.", purged, total);
    Ok(())
}
