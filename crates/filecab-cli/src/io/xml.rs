//! XML exchange format.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <records>
//!   <record id="1">
//!     <name first="Anna" last="Smith"/>
//!     <dateOfBirth>1990-05-01</dateOfBirth>
//!     <age>30</age>
//!     <salary>1000</salary>
//!     <gender>W</gender>
//!   </record>
//! </records>
//! ```
//!
//! A missing name drops the corresponding attribute from `<name/>`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use filecab_types::{Record, RecordField};

pub fn write_records(records: &[Record], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("records")))?;

    for record in records {
        let mut open = BytesStart::new("record");
        open.push_attribute(("id", record.id.to_string().as_str()));
        writer.write_event(Event::Start(open))?;

        let mut name = BytesStart::new("name");
        if let Some(first) = &record.first_name {
            name.push_attribute(("first", first.as_str()));
        }
        if let Some(last) = &record.last_name {
            name.push_attribute(("last", last.as_str()));
        }
        writer.write_event(Event::Empty(name))?;

        write_text_element(
            &mut writer,
            "dateOfBirth",
            &record.birth_date.format("%Y-%m-%d").to_string(),
        )?;
        write_text_element(&mut writer, "age", &record.age.to_string())?;
        write_text_element(&mut writer, "salary", &record.salary.to_string())?;
        write_text_element(&mut writer, "gender", &record.gender.to_string())?;

        writer.write_event(Event::End(BytesEnd::new("record")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("records")))?;
    writer.into_inner().flush()?;
    Ok(())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path)?;
    let mut reader = Reader::from_str(&text);

    let mut records = Vec::new();
    let mut current: Option<Record> = None;
    let mut text_field: Option<RecordField> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"record" => {
                let mut record = Record::default();
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"id" {
                        let raw = attr.unescape_value()?;
                        let value = RecordField::Id.parse_value(&raw)?;
                        RecordField::Id.apply(&mut record, &value)?;
                    }
                }
                current = Some(record);
            }
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"name" => {
                let record = current
                    .as_mut()
                    .ok_or_else(|| anyhow!("<name> outside of a <record> element"))?;
                for attr in e.attributes() {
                    let attr = attr?;
                    let raw = attr.unescape_value()?;
                    match attr.key.as_ref() {
                        b"first" => record.first_name = Some(raw.into_owned()),
                        b"last" => record.last_name = Some(raw.into_owned()),
                        other => bail!(
                            "unknown <name> attribute '{}'",
                            String::from_utf8_lossy(other)
                        ),
                    }
                }
            }
            Event::Start(e) => {
                text_field = match e.name().as_ref() {
                    b"records" => None,
                    b"dateOfBirth" => Some(RecordField::DateOfBirth),
                    b"age" => Some(RecordField::Age),
                    b"salary" => Some(RecordField::Salary),
                    b"gender" => Some(RecordField::Gender),
                    other => bail!("unknown element <{}>", String::from_utf8_lossy(other)),
                };
            }
            Event::Text(e) => {
                let raw = e.unescape()?;
                let raw = raw.trim();
                if raw.is_empty() {
                    continue;
                }
                let field = text_field
                    .ok_or_else(|| anyhow!("unexpected text outside of a field element"))?;
                let record = current
                    .as_mut()
                    .ok_or_else(|| anyhow!("field text outside of a <record> element"))?;
                let value = field.parse_value(raw)?;
                field.apply(record, &value)?;
            }
            Event::End(e) => {
                text_field = None;
                if e.name().as_ref() == b"record" {
                    let record = current
                        .take()
                        .ok_or_else(|| anyhow!("unbalanced </record>"))?;
                    records.push(record);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        bail!("unterminated <record> element");
    }
    Ok(records)
}
