//! Validate command implementation

use anyhow::{bail, Result};
use dctext_core::pipeline::load_parser;
use std::path::PathBuf;

/// Check header and shared-field configuration files
pub fn validate(header_config: Option<PathBuf>, shared_fields: Option<PathBuf>) -> Result<()> {
    match load_parser(header_config.as_deref(), shared_fields.as_deref()) {
        Ok(parser) => {
            println!("Valid configuration");
            match &header_config {
                Some(path) => println!(
                    "  Header schema: {} fields from {}",
                    parser.schema().len(),
                    path.display()
                ),
                None => println!(
                    "  Header schema: {} fields (default Dublin Core)",
                    parser.schema().len()
                ),
            }
            println!("    {}", parser.schema().labels().join(", "));
            println!("  Shared fields: {}", parser.shared().len());
            for (label, value) in parser.shared().iter() {
                println!("    {} = {}", label, value);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            bail!("Validation failed");
        }
    }
}
