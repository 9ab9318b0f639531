//! Dublin Core XML exporter
//!
//! Uses quick-xml to write a `<collection>` of `<record>` elements. Labels
//! that are Dublin Core elements (exact match) become `dc:` elements; any
//! other label is written as `<field name="...">`.

use crate::error::ExportError;
use crate::types::{Collection, MetadataRecord, DUBLIN_CORE_ELEMENTS};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const NS_DC: &str = "http://purl.org/dc/elements/1.1/";

/// Exporter for namespaced Dublin Core XML
#[derive(Debug, Default)]
pub struct XmlExporter;

impl XmlExporter {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, collection: &Collection) -> Result<Vec<u8>, quick_xml::Error> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("collection");
        root.push_attribute(("xmlns:dc", NS_DC));
        writer.write_event(Event::Start(root))?;

        for record in collection {
            write_record(&mut writer, record)?;
        }

        writer.write_event(Event::End(BytesEnd::new("collection")))?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl super::Exporter for XmlExporter {
    fn process_collection(
        &self,
        collection: &Collection,
        writer: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let bytes = self
            .render(collection)
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Dublin Core XML"
    }

    fn file_extension(&self) -> &str {
        "xml"
    }

    fn mime_type(&self) -> &str {
        "application/xml"
    }
}

fn write_record<W: std::io::Write>(
    writer: &mut Writer<W>,
    record: &MetadataRecord,
) -> Result<(), quick_xml::Error> {
    let id = record.id().to_string();
    let mut elem = BytesStart::new("record");
    elem.push_attribute(("id", id.as_str()));
    elem.push_attribute(("source", record.source()));
    writer.write_event(Event::Start(elem))?;

    for (label, value) in record.fields() {
        if DUBLIN_CORE_ELEMENTS.contains(&label.as_str()) {
            let name = format!("dc:{}", label);
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        } else {
            let mut field = BytesStart::new("field");
            field.push_attribute(("name", label.as_str()));
            writer.write_event(Event::Start(field))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new("field")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("record")))?;
    Ok(())
}
