//! Exporters for rendering a collection to output formats

mod csv;
mod json;
mod mrk;
mod txt;
mod xml;

pub use self::csv::CsvExporter;
pub use json::JsonExporter;
pub use mrk::MrkExporter;
pub use txt::TxtExporter;
pub use xml::XmlExporter;

use crate::error::ExportError;
use crate::types::Collection;
use std::io::Write;

/// Format names accepted by [`exporter_for_format`], in registry order
pub const SUPPORTED_FORMATS: &[&str] = &["txt", "csv", "json", "xml", "mrk"];

/// Trait for rendering a collection to one output format.
///
/// Implementations must write every record exactly once, in collection
/// order, and produce identical bytes for an identical collection. Positional
/// layouts give unset fields an empty slot rather than dropping the column.
pub trait Exporter: Send + Sync {
    /// Render the whole collection to a writer
    fn process_collection(
        &self,
        collection: &Collection,
        writer: &mut dyn Write,
    ) -> Result<(), ExportError>;

    /// Format name (e.g., "CSV", "MARC Mnemonic")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;
}

/// Get an exporter by format name
pub fn exporter_for_format(format: &str) -> Option<Box<dyn Exporter>> {
    match format.to_lowercase().as_str() {
        "txt" | "text" => Some(Box::new(TxtExporter::new())),
        "csv" => Some(Box::new(CsvExporter::new())),
        "json" => Some(Box::new(JsonExporter::new())),
        "xml" | "dc" | "oai_dc" => Some(Box::new(XmlExporter::new())),
        "mrk" | "marc" => Some(Box::new(MrkExporter::new())),
        _ => None,
    }
}
