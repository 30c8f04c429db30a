//! Plain-text table rendering for record listings.

use filecab_types::{Record, RecordField};

/// Render records as an ASCII table with one column per projected field.
/// An empty projection shows every field.
pub fn render(records: &[Record], projection: &[RecordField]) -> String {
    let fields: Vec<RecordField> = if projection.is_empty() {
        RecordField::ALL.to_vec()
    } else {
        projection.to_vec()
    };

    let headers: Vec<String> = fields.iter().map(header).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            fields
                .iter()
                .map(|field| field.value(record).to_string())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&headers, &widths));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.len()));
        line.push_str(" |");
    }
    line
}

fn header(field: &RecordField) -> String {
    match field {
        RecordField::Id => "Id",
        RecordField::FirstName => "FirstName",
        RecordField::LastName => "LastName",
        RecordField::DateOfBirth => "DateOfBirth",
        RecordField::Age => "Age",
        RecordField::Salary => "Salary",
        RecordField::Gender => "Gender",
    }
    .to_string()
}
