use anyhow::Result;

use filecab_store::RecordService;
use filecab_types::{QueryClause, RecordField};

use crate::table;

/// Query with an optional projection and an optional where expression.
pub fn handle(
    service: &mut dyn RecordService,
    projection: &[RecordField],
    clauses: &[QueryClause],
) -> Result<()> {
    let records = service.select(clauses);

    if records.is_empty() {
        println!("No records found.");
    } else {
        println!("{}", table::render(&records, projection));
    }
    Ok(())
}
