//! CSV exchange format.
//!
//! One header row naming every field in declaration order, then one row
//! per record. Values use the same textual forms the shell accepts, so a
//! file edited by hand round-trips through `RecordField::parse_value`.

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use filecab_types::{Record, RecordField};

pub fn write_records(records: &[Record], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(RecordField::ALL.iter().map(|field| field.name()))?;
    for record in records {
        writer.write_record(
            RecordField::ALL
                .iter()
                .map(|field| field.value(record).to_string()),
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let fields: Vec<RecordField> = headers
        .iter()
        .map(|name| name.parse::<RecordField>())
        .collect::<Result<_, _>>()
        .context("unrecognized column in the CSV header")?;

    let mut records = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() != fields.len() {
            return Err(anyhow!(
                "row {} has {} values, expected {}",
                row_number + 2,
                row.len(),
                fields.len()
            ));
        }

        let mut record = Record::default();
        for (field, raw) in fields.iter().zip(row.iter()) {
            let value = field
                .parse_value(raw)
                .with_context(|| format!("row {}", row_number + 2))?;
            field.apply(&mut record, &value)?;
        }
        records.push(record);
    }
    Ok(records)
}
