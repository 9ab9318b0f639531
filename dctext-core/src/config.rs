//! Run configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default base name of exported artifacts
pub const DEFAULT_EXPORT_NAME: &str = "export";

/// Everything one run needs, passed explicitly to the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory holding the raw metadata files
    pub input_dir: PathBuf,

    /// Directory the exported artifacts are written to
    pub output_dir: PathBuf,

    /// Header-configuration file; the default Dublin Core schema when absent
    pub header_config: Option<PathBuf>,

    /// Shared-fields file (`label,value` lines)
    pub shared_fields: Option<PathBuf>,

    /// Base name of every artifact (`<name>.<ext>`)
    pub export_name: String,

    /// Requested formats, in order. Plain text is always produced.
    pub formats: Vec<String>,
}

impl RunConfig {
    /// Create a configuration with required fields
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            header_config: None,
            shared_fields: None,
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            formats: Vec::new(),
        }
    }

    /// Set the header-configuration file
    pub fn with_header_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_config = Some(path.into());
        self
    }

    /// Set the shared-fields file
    pub fn with_shared_fields(mut self, path: impl Into<PathBuf>) -> Self {
        self.shared_fields = Some(path.into());
        self
    }

    /// Set the artifact base name
    pub fn with_export_name(mut self, name: impl Into<String>) -> Self {
        self.export_name = name.into();
        self
    }

    /// Request an additional output format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.formats.push(format.into());
        self
    }

    /// Requested formats with `txt` first and duplicates removed
    pub fn selected_formats(&self) -> Vec<String> {
        let mut selected = vec!["txt".to_string()];
        for format in &self.formats {
            let format = format.to_lowercase();
            if !selected.contains(&format) {
                selected.push(format);
            }
        }
        selected
    }

    /// Path of the artifact for a file extension
    pub fn artifact_path(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.export_name, extension))
    }
}
