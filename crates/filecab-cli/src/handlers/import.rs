use std::path::Path;

use anyhow::Result;

use filecab_store::{RecordService, Snapshot};

use crate::io::{self, FileFormat};

/// Read records from a file and upsert-merge them into the store.
pub fn handle(service: &mut dyn RecordService, format: FileFormat, path: &Path) -> Result<()> {
    let records = io::import_records(format, path)?;
    let report = service.restore(&Snapshot::new(records));

    println!("Imported {} record(s).", report.applied.len());
    for (id, error) in &report.failures {
        println!("Record #{} was not imported: {}", id, error);
    }
    Ok(())
}
