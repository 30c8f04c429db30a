use anyhow::Result;

use filecab_store::RecordService;

use crate::table;

/// List every record, as a table or as JSON.
pub fn handle(service: &mut dyn RecordService, format: &str) -> Result<()> {
    let records = service.select(&[]);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&records)?),
        _ => {
            if records.is_empty() {
                println!("No records found.");
            } else {
                println!("{}", table::render(&records, &[]));
            }
        }
    }
    Ok(())
}
