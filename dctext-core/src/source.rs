//! Reading raw metadata files and configuration files from disk

use crate::error::{ConfigError, ParseError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a raw metadata file into its lines.
///
/// I/O failures are [`ParseError::FileUnavailable`]; content that is not
/// UTF-8 text is [`ParseError::MalformedRecord`].
pub fn read_lines(path: &Path) -> Result<Vec<String>, ParseError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => ParseError::MalformedRecord {
            path: path.to_path_buf(),
            reason: "content is not valid UTF-8 text".to_string(),
        },
        _ => ParseError::FileUnavailable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(split_lines(&text))
}

/// Read a header-configuration or shared-fields file
pub fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Split text into lines, dropping a leading byte-order mark
pub fn split_lines(text: &str) -> Vec<String> {
    text.strip_prefix('\u{feff}')
        .unwrap_or(text)
        .lines()
        .map(str::to_string)
        .collect()
}

/// List the raw metadata files of a directory, sorted by file name.
///
/// Only regular files are returned; hidden files (leading `.`) are skipped.
pub fn list_input_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| !n.starts_with('.'))
                .unwrap_or(false)
        })
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
