//! dctext Core Library
//!
//! This crate turns positional plain-text Dublin Core files into normalized
//! records and renders the resulting collection through interchangeable
//! exporters. Each line of a raw file is bound to a label of the active
//! [`HeaderSchema`]; collection-wide [`SharedFields`] fill whatever the file
//! leaves unset.

pub mod config;
pub mod error;
pub mod exporter;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod types;

pub use config::RunConfig;
pub use error::{ConfigError, DctextError, ExportError, ParseError, Result};
pub use exporter::{exporter_for_format, Exporter, SUPPORTED_FORMATS};
pub use parser::MetadataParser;
pub use pipeline::{ExportOutcome, Pipeline, RunReport, SkippedFile};
pub use types::{Collection, FieldLabel, HeaderSchema, MetadataRecord, SharedFields};
