//! Error types for dctext Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DctextError
pub type Result<T> = std::result::Result<T, DctextError>;

/// Top-level error type for all dctext operations
#[derive(Debug, Error)]
pub enum DctextError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in the header layout or shared-field configuration.
///
/// Any of these is fatal to a run: a wrong schema would corrupt every record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("header schema is empty")]
    EmptySchema,

    #[error("blank field label on line {line}")]
    BlankLabel { line: usize },

    #[error("duplicate field label: {label}")]
    DuplicateLabel { label: String },

    #[error("field label '{label}' is reserved for record provenance")]
    ReservedLabel { label: String },

    #[error("shared field with blank label")]
    BlankSharedLabel,

    #[error("line {line} is not a 'label,value' pair: {content:?}")]
    MalformedSharedLine { line: usize, content: String },

    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while turning one raw metadata file into a record.
///
/// These only skip the affected file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file unavailable: {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record in {}: {reason}", .path.display())]
    MalformedRecord { path: PathBuf, reason: String },
}

/// Errors raised by an exporter; reported per format
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("cannot write {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// I/O failures inside an exporter's own writer calls. The pipeline renders
/// in memory, so there these can only come from encoding.
impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::EncodingFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps_as_invalid_configuration() {
        let err: DctextError = ConfigError::EmptySchema.into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: header schema is empty"
        );
    }

    #[test]
    fn test_shared_line_error_mentions_content() {
        let err = ConfigError::MalformedSharedLine {
            line: 3,
            content: "publisher".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 3 is not a 'label,value' pair: \"publisher\""
        );
    }
}
