//! Record import and export in CSV and XML.

mod csv;
mod xml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use filecab_types::Record;

/// Supported exchange file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xml,
}

impl FromStr for FileFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xml" => Ok(FileFormat::Xml),
            other => bail!("unsupported format '{}', expected csv or xml", other),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => f.write_str("csv"),
            FileFormat::Xml => f.write_str("xml"),
        }
    }
}

/// Write records to `path` in the given format.
pub fn export_records(records: &[Record], format: FileFormat, path: &Path) -> Result<()> {
    match format {
        FileFormat::Csv => csv::write_records(records, path),
        FileFormat::Xml => xml::write_records(records, path),
    }
    .with_context(|| format!("failed to export records to {}", path.display()))
}

/// Read records from `path` in the given format.
pub fn import_records(format: FileFormat, path: &Path) -> Result<Vec<Record>> {
    match format {
        FileFormat::Csv => csv::read_records(path),
        FileFormat::Xml => xml::read_records(path),
    }
    .with_context(|| format!("failed to import records from {}", path.display()))
}
