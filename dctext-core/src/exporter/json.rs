//! JSON exporter

use crate::error::ExportError;
use crate::types::Collection;
use std::io::Write;

/// Exporter for a pretty-printed JSON array of records.
///
/// Each element is `{"id", "source", "fields"}`; unset fields are absent from
/// `fields`, empty ones are present as `""`.
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl super::Exporter for JsonExporter {
    fn process_collection(
        &self,
        collection: &Collection,
        writer: &mut dyn Write,
    ) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, collection.records())
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }
}
