use anyhow::Result;

use filecab_store::RecordService;

/// Report record counts.
pub fn handle(service: &dyn RecordService) -> Result<()> {
    let stat = service.stat();
    println!(
        "{} record(s). {} record(s) are ready for purging.",
        stat.total, stat.purgeable
    );
    Ok(())
}
