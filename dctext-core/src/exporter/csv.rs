//! CSV exporter
//!
//! Header row `id,file,<columns>`, then one row per record. Every row has
//! the same width; unset fields become empty cells.

use crate::error::ExportError;
use crate::types::{Collection, FILE_COLUMN, ID_COLUMN};
use std::io::Write;

/// Exporter for comma-separated values
#[derive(Debug)]
pub struct CsvExporter {
    delimiter: u8,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use another field delimiter (e.g. `b'\t'` for TSV)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Exporter for CsvExporter {
    fn process_collection(
        &self,
        collection: &Collection,
        writer: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let mut csv_writer = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        let mut header = vec![ID_COLUMN, FILE_COLUMN];
        header.extend(collection.columns().iter().map(String::as_str));
        csv_writer
            .write_record(&header)
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

        for record in collection {
            let id = record.id().to_string();
            let mut row = vec![id.as_str(), record.source()];
            row.extend(collection.columns().iter().map(|label| record.slot(label)));
            csv_writer
                .write_record(&row)
                .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "CSV"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn mime_type(&self) -> &str {
        "text/csv"
    }
}
