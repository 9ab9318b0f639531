//! Normalized metadata for one raw file

use super::FieldLabel;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column carrying the record id in positional exports
pub const ID_COLUMN: &str = "id";

/// Column carrying the originating file in positional exports
pub const FILE_COLUMN: &str = "file";

/// Labels that would collide with the provenance columns
pub const RESERVED_LABELS: [&str; 2] = [ID_COLUMN, FILE_COLUMN];

/// One record per raw metadata file, keyed by field label.
///
/// Records are built by the parser and read-only afterwards. A label missing
/// from [`fields`](Self::fields) is *unset*; a label mapped to `""` is *empty*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    id: u32,
    source: String,
    fields: IndexMap<FieldLabel, String>,
}

impl MetadataRecord {
    pub(crate) fn new(
        id: u32,
        source: impl Into<String>,
        fields: IndexMap<FieldLabel, String>,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            fields,
        }
    }

    /// Sequential, 1-based position in processing order
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Path or identifier of the originating raw file
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Value for a label, `None` when unset
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn fields(&self) -> &IndexMap<FieldLabel, String> {
        &self.fields
    }

    /// Value for a positional slot; unset fields render as empty
    pub fn slot(&self, label: &str) -> &str {
        self.get(label).unwrap_or_default()
    }
}
