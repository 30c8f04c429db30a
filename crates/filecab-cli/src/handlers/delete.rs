use anyhow::Result;

use filecab_store::RecordService;
use filecab_types::QueryClause;

/// Delete every record matching the condition.
pub fn handle(service: &mut dyn RecordService, query: &QueryClause) -> Result<()> {
    let report = service.delete(query)?;
    println!("{}", report);
    Ok(())
}
