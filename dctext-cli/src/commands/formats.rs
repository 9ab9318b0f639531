//! Formats command implementation

use anyhow::Result;
use dctext_core::exporter::{exporter_for_format, SUPPORTED_FORMATS};

/// List the registered exporters
pub fn formats() -> Result<()> {
    for name in SUPPORTED_FORMATS {
        if let Some(exporter) = exporter_for_format(name) {
            println!(
                "{:<5} {:<16} .{:<5} {}",
                name,
                exporter.format_name(),
                exporter.file_extension(),
                exporter.mime_type()
            );
        }
    }
    Ok(())
}
