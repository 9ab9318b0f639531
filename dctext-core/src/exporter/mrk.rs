//! MARC mnemonic (`.mrk`) exporter
//!
//! Writes the line-oriented text form of MARC used by MarcEdit:
//!
//! ```text
//! =LDR  00000nam a2200000 a 4500
//! =001  1
//! =245  10$aMoby Dick
//! =100  1\$aMelville
//! ```
//!
//! Dublin Core labels are mapped with a simple crosswalk; anything else goes
//! to a general note (`500`). Labels match exactly, as in the XML exporter. MARC has no empty data fields, so unset and
//! empty values are both omitted.

use crate::error::ExportError;
use crate::types::{Collection, MetadataRecord};
use std::io::Write;

const LEADER: &str = "00000nam a2200000 a 4500";

/// Target of one Dublin Core element: tag, indicators, subfield code
struct Crosswalk {
    tag: &'static str,
    indicators: &'static str,
    code: char,
}

fn crosswalk(label: &str) -> Option<Crosswalk> {
    let (tag, indicators, code) = match label {
        "identifier" => ("024", "8\\", 'a'),
        "creator" => ("100", "1\\", 'a'),
        "title" => ("245", "10", 'a'),
        "publisher" => ("260", "\\\\", 'b'),
        "date" => ("260", "\\\\", 'c'),
        "format" => ("340", "\\\\", 'a'),
        "description" => ("520", "\\\\", 'a'),
        "coverage" => ("522", "\\\\", 'a'),
        "rights" => ("540", "\\\\", 'a'),
        "language" => ("546", "\\\\", 'a'),
        "subject" => ("653", "\\\\", 'a'),
        "type" => ("655", "\\4", 'a'),
        "contributor" => ("720", "\\\\", 'a'),
        "source" => ("786", "0\\", 'n'),
        "relation" => ("787", "0\\", 'n'),
        _ => return None,
    };
    Some(Crosswalk {
        tag,
        indicators,
        code,
    })
}

/// Exporter for MARC mnemonic text
#[derive(Debug, Default)]
pub struct MrkExporter;

impl MrkExporter {
    pub fn new() -> Self {
        Self
    }

    fn record_to_mrk(&self, record: &MetadataRecord) -> String {
        let mut lines: Vec<(String, String)> = Vec::new();
        let mut imprint: Vec<String> = Vec::new();

        for (label, value) in record.fields() {
            if value.is_empty() {
                continue;
            }
            let value = escape_mrk(value);
            match crosswalk(label) {
                // publisher and date share one 260 field
                Some(cw) if cw.tag == "260" => imprint.push(format!("${}{}", cw.code, value)),
                Some(cw) => lines.push((
                    cw.tag.to_string(),
                    format!("{}${}{}", cw.indicators, cw.code, value),
                )),
                None => lines.push((
                    "500".to_string(),
                    format!("\\\\$a{}: {}", escape_mrk(label), value),
                )),
            }
        }

        if !imprint.is_empty() {
            imprint.sort_by_key(|sub| sub.starts_with("$c"));
            lines.push(("260".to_string(), format!("\\\\{}", imprint.concat())));
        }

        // stable: same-tag fields keep record order
        lines.sort_by(|a, b| a.0.cmp(&b.0));

        let mut text = format!("=LDR  {}\n=001  {}\n", LEADER, record.id());
        for (tag, data) in lines {
            text.push_str(&format!("={}  {}\n", tag, data));
        }
        text
    }
}

impl super::Exporter for MrkExporter {
    fn process_collection(
        &self,
        collection: &Collection,
        writer: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let records: Vec<String> = collection
            .iter()
            .map(|record| self.record_to_mrk(record))
            .collect();

        writer.write_all(records.join("\n").as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "MARC Mnemonic"
    }

    fn file_extension(&self) -> &str {
        "mrk"
    }

    fn mime_type(&self) -> &str {
        "text/x-marc-mnemonic"
    }
}

/// Escape the subfield delimiter and flatten line breaks
fn escape_mrk(s: &str) -> String {
    s.replace('$', "{dollar}").replace(['\r', '\n'], " ")
}
