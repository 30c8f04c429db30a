use std::path::Path;

use anyhow::Result;

use filecab_store::RecordService;

use crate::io::{self, FileFormat};

/// Write a snapshot of the store to a file.
pub fn handle(service: &dyn RecordService, format: FileFormat, path: &Path) -> Result<()> {
    let snapshot = service.make_snapshot();
    io::export_records(snapshot.records(), format, path)?;
    println!(
        "Exported {} record(s) to {}.",
        snapshot.len(),
        path.display()
    );
    Ok(())
}
