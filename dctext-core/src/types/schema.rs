//! Header schema: the positional layout of a raw metadata file

use super::RESERVED_LABELS;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifying name of one metadata field (e.g. "title")
pub type FieldLabel = String;

/// The fifteen elements of the Dublin Core Metadata Element Set, in canonical order.
pub const DUBLIN_CORE_ELEMENTS: [&str; 15] = [
    "title",
    "creator",
    "subject",
    "description",
    "publisher",
    "contributor",
    "date",
    "type",
    "format",
    "identifier",
    "source",
    "language",
    "relation",
    "coverage",
    "rights",
];

/// Ordered list of field labels; label `i` names line `i` of every raw file.
///
/// A schema is never empty and never holds blank or duplicate labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSchema {
    labels: Vec<FieldLabel>,
}

impl HeaderSchema {
    /// Build a schema from configuration lines, one label per line.
    ///
    /// Labels are trimmed and compared case-sensitively. Blank lines at the
    /// end of the input are ignored; a blank line between labels is an error,
    /// as is any of [`RESERVED_LABELS`].
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, ConfigError> {
        let mut labels: Vec<&str> = lines.iter().map(|l| l.as_ref().trim()).collect();
        while labels.last().is_some_and(|l| l.is_empty()) {
            labels.pop();
        }

        if labels.is_empty() {
            return Err(ConfigError::EmptySchema);
        }

        let mut seen = HashSet::new();
        for (idx, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(ConfigError::BlankLabel { line: idx + 1 });
            }
            if RESERVED_LABELS.contains(label) {
                return Err(ConfigError::ReservedLabel {
                    label: label.to_string(),
                });
            }
            if !seen.insert(*label) {
                return Err(ConfigError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
        }

        Ok(Self {
            labels: labels.into_iter().map(str::to_string).collect(),
        })
    }

    /// The baked-in schema used until a header configuration is supplied
    pub fn dublin_core() -> Self {
        Self {
            labels: DUBLIN_CORE_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[FieldLabel] {
        &self.labels
    }

    /// Number of lines a well-formed raw file carries
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl Default for HeaderSchema {
    fn default() -> Self {
        Self::dublin_core()
    }
}
