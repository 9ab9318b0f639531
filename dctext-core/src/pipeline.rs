//! One run: configuration, parsing, export
//!
//! Configuration errors abort the run before any raw file is read. After
//! that, failures are isolated: an unreadable file is skipped, a failing
//! exporter is reported, and everything else still completes.

use crate::config::RunConfig;
use crate::error::{ConfigError, ExportError, ParseError, Result};
use crate::exporter::{exporter_for_format, Exporter};
use crate::parser::MetadataParser;
use crate::source;
use crate::types::{Collection, SharedFields};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A raw file that produced no record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one exporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub format: String,
    pub path: Option<PathBuf>,
    pub error: Option<String>,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub parsed: usize,
    pub skipped: Vec<SkippedFile>,
    pub exports: Vec<ExportOutcome>,
}

impl RunReport {
    /// Whether every file was parsed and every exporter succeeded
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.exports.iter().all(ExportOutcome::is_success)
    }
}

/// Drives one run over a [`RunConfig`]
#[derive(Debug)]
pub struct Pipeline {
    config: RunConfig,
    parser: MetadataParser,
    skipped: Vec<SkippedFile>,
    next_id: u32,
}

impl Pipeline {
    /// Load the header schema and shared fields named by the configuration.
    ///
    /// Any error here is fatal for the run.
    pub fn new(config: RunConfig) -> std::result::Result<Self, ConfigError> {
        let parser = load_parser(
            config.header_config.as_deref(),
            config.shared_fields.as_deref(),
        )?;
        Ok(Self {
            config,
            parser,
            skipped: Vec::new(),
            next_id: 1,
        })
    }

    /// Run every stage and return the report
    pub fn run(config: RunConfig) -> Result<RunReport> {
        let mut pipeline = Self::new(config)?;
        for path in pipeline.input_files()? {
            // failures are recorded in the report
            let _ = pipeline.ingest(&path);
        }
        Ok(pipeline.finish())
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn parser(&self) -> &MetadataParser {
        &self.parser
    }

    pub fn collection(&self) -> &Collection {
        self.parser.collection()
    }

    /// Raw files of the input directory, in processing order
    pub fn input_files(&self) -> Result<Vec<PathBuf>> {
        Ok(source::list_input_files(&self.config.input_dir)?)
    }

    /// Parse one raw file into the collection.
    ///
    /// Ids are assigned to parsed files only, so they stay contiguous when a
    /// file is skipped.
    pub fn ingest(&mut self, path: &Path) -> std::result::Result<u32, ParseError> {
        match source::read_lines(path) {
            Ok(lines) => {
                let id = self.next_id;
                self.parser.process_metadata_file(&lines, id, path.display().to_string());
                self.next_id += 1;
                Ok(id)
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                self.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Run every selected exporter over the collection.
    ///
    /// Exporters share the collection read-only and run in parallel; outcomes
    /// come back in the requested order.
    pub fn export(&self) -> Vec<ExportOutcome> {
        let mut seen_extensions = Vec::new();
        let mut jobs: Vec<(String, Option<Box<dyn Exporter>>)> = Vec::new();

        for format in self.config.selected_formats() {
            let exporter = exporter_for_format(&format);
            if let Some(exporter) = &exporter {
                let ext = exporter.file_extension().to_string();
                if seen_extensions.contains(&ext) {
                    continue;
                }
                seen_extensions.push(ext);
            }
            jobs.push((format, exporter));
        }

        jobs.par_iter()
            .map(|(format, exporter)| {
                let result = match exporter {
                    Some(exporter) => self.export_one(exporter.as_ref()),
                    None => Err(ExportError::UnsupportedFormat(format.clone())),
                };
                match result {
                    Ok(path) => {
                        tracing::info!("Exported {} -> {:?}", format, path);
                        ExportOutcome {
                            format: format.clone(),
                            path: Some(path),
                            error: None,
                        }
                    }
                    Err(e) => {
                        tracing::error!("Export to {} failed: {}", format, e);
                        ExportOutcome {
                            format: format.clone(),
                            path: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect()
    }

    /// Export and summarize the run
    pub fn finish(self) -> RunReport {
        let exports = self.export();
        RunReport {
            parsed: self.collection().len(),
            skipped: self.skipped,
            exports,
        }
    }

    fn export_one(&self, exporter: &dyn Exporter) -> std::result::Result<PathBuf, ExportError> {
        let path = self.config.artifact_path(exporter.file_extension());
        let unwritable = |source| ExportError::DestinationUnwritable {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.config.output_dir).map_err(unwritable)?;
        let file = File::create(&path).map_err(unwritable)?;

        write_artifact(exporter, self.collection(), &path, BufWriter::new(file))?;
        Ok(path)
    }
}

/// Render the collection in memory, then write it to `writer`.
///
/// Any I/O failure here belongs to the destination, never to the encoding.
fn write_artifact<W: Write>(
    exporter: &dyn Exporter,
    collection: &Collection,
    path: &Path,
    mut writer: W,
) -> std::result::Result<(), ExportError> {
    let mut rendered = Vec::new();
    exporter.process_collection(collection, &mut rendered)?;

    writer
        .write_all(&rendered)
        .and_then(|()| writer.flush())
        .map_err(|source| ExportError::DestinationUnwritable {
            path: path.to_path_buf(),
            source,
        })
}

/// Build a parser from a header-configuration file and a shared-fields file
pub fn load_parser(
    header_config: Option<&Path>,
    shared_fields: Option<&Path>,
) -> std::result::Result<MetadataParser, ConfigError> {
    let mut parser = MetadataParser::new();

    if let Some(path) = header_config {
        let text = source::read_config(path)?;
        parser.set_header_options(&source::split_lines(&text))?;
        tracing::info!(
            "Loaded header schema with {} fields from {}",
            parser.schema().len(),
            path.display()
        );
    } else {
        tracing::info!("No header configuration given, using the Dublin Core schema");
    }

    if let Some(path) = shared_fields {
        let text = source::read_config(path)?;
        parser.set_shared(SharedFields::parse_pairs(&text)?)?;
        tracing::info!(
            "Loaded {} shared fields from {}",
            parser.shared().len(),
            path.display()
        );
    }

    Ok(parser)
}
