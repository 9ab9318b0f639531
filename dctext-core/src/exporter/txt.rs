//! Plain-text exporter
//!
//! One block per record: `id`, `file`, then a `label: value` line for every
//! column of the collection. Unset fields keep their line with nothing after
//! the colon. Blocks are separated by a blank line.

use crate::error::ExportError;
use crate::types::{Collection, MetadataRecord, FILE_COLUMN, ID_COLUMN};
use std::io::Write;

/// Exporter for human-readable text blocks
#[derive(Debug, Default)]
pub struct TxtExporter;

impl TxtExporter {
    pub fn new() -> Self {
        Self
    }

    fn record_to_text(&self, record: &MetadataRecord, columns: &[String]) -> String {
        let mut text = format!(
            "{}: {}\n{}: {}\n",
            ID_COLUMN,
            record.id(),
            FILE_COLUMN,
            record.source()
        );
        for label in columns {
            let value = record.slot(label);
            if value.is_empty() {
                text.push_str(&format!("{}:\n", label));
            } else {
                text.push_str(&format!("{}: {}\n", label, one_line(value)));
            }
        }
        text
    }
}

impl super::Exporter for TxtExporter {
    fn process_collection(
        &self,
        collection: &Collection,
        writer: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let blocks: Vec<String> = collection
            .iter()
            .map(|record| self.record_to_text(record, collection.columns()))
            .collect();

        writer.write_all(blocks.join("\n").as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Plain Text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }
}

/// Keep each value on its own line
fn one_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::Exporter;
    use crate::parser::MetadataParser;

    #[test]
    fn test_unset_field_keeps_its_line() {
        let mut parser = MetadataParser::new();
        parser.set_header_options(&["title", "creator"]).unwrap();
        parser.process_metadata_file(&["Moby Dick"], 1, "moby.txt");

        let mut out = Vec::new();
        TxtExporter::new()
            .process_collection(parser.collection(), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id: 1\nfile: moby.txt\ntitle: Moby Dick\ncreator:\n"
        );
    }

    #[test]
    fn test_empty_collection_writes_nothing() {
        let parser = MetadataParser::new();
        let mut out = Vec::new();
        TxtExporter::new()
            .process_collection(parser.collection(), &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_line_does_not_clash_with_source_element() {
        let mut parser = MetadataParser::new();
        let lines: Vec<String> = (1..=15).map(|i| format!("v{i}")).collect();
        parser.process_metadata_file(&lines, 1, "moby.txt");

        let mut out = Vec::new();
        TxtExporter::new()
            .process_collection(parser.collection(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        let keys: Vec<&str> = text.lines().filter_map(|l| l.split(':').next()).collect();
        assert_eq!(keys.iter().filter(|k| **k == "source").count(), 1);
        assert!(text.contains("file: moby.txt\n"));
        assert!(text.contains("source: v11\n"));
    }
}
