//! Inspect command implementation

use anyhow::{Context, Result};
use dctext_core::pipeline::load_parser;
use dctext_core::source::read_lines;
use std::path::{Path, PathBuf};

/// Parse one raw metadata file and display the resulting record
pub fn inspect(
    input: &Path,
    header_config: Option<PathBuf>,
    shared_fields: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut parser = load_parser(header_config.as_deref(), shared_fields.as_deref())
        .context("Invalid configuration! Please check spelling and documentation.")?;

    let lines = read_lines(input)
        .with_context(|| format!("Failed to read metadata file: {}", input.display()))?;

    let columns = parser.collection().columns().to_vec();
    let schema_len = parser.schema().len();
    let record = parser.process_metadata_file(&lines, 1, input.display().to_string());

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("Source: {}", record.source());
    let width = columns.iter().map(String::len).max().unwrap_or(0);
    for label in &columns {
        match record.get(label) {
            Some(value) => println!("  {:<width$}  {}", label, value, width = width),
            None => println!("  {:<width$}  (unset)", label, width = width),
        }
    }

    if lines.len() > schema_len {
        println!("  ({} extra lines ignored)", lines.len() - schema_len);
    }

    Ok(())
}
