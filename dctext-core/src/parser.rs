//! Metadata parser: positional raw lines to normalized records
//!
//! The parser owns the active [`HeaderSchema`], the [`SharedFields`] and the
//! [`Collection`] being built. Each raw file is bound line-by-line to the
//! schema, then shared defaults fill whichever labels the file did not set.
//!
//! Until a header configuration is supplied the parser uses the fifteen
//! Dublin Core elements as its schema.

use crate::error::ConfigError;
use crate::types::{Collection, HeaderSchema, MetadataRecord, SharedFields};
use indexmap::IndexMap;

/// Builds one [`MetadataRecord`] per raw file and accumulates them
#[derive(Debug, Clone)]
pub struct MetadataParser {
    schema: HeaderSchema,
    shared: SharedFields,
    collection: Collection,
}

impl MetadataParser {
    /// Create a parser with the default Dublin Core schema and no shared fields
    pub fn new() -> Self {
        Self::with_schema(HeaderSchema::default())
    }

    pub fn with_schema(schema: HeaderSchema) -> Self {
        let shared = SharedFields::new();
        let collection = Collection::new(&schema, &shared);
        Self {
            schema,
            shared,
            collection,
        }
    }

    /// Replace the active schema from header-configuration lines.
    ///
    /// On error the previous schema stays active.
    pub fn set_header_options<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), ConfigError> {
        self.schema = HeaderSchema::from_lines(lines)?;
        self.collection.set_columns(&self.schema, &self.shared);
        tracing::debug!(labels = self.schema.len(), "Header schema configured");
        Ok(())
    }

    /// Replace the shared field set wholesale.
    ///
    /// On error the previous set stays active.
    pub fn set_shared<I, L, V>(&mut self, pairs: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        self.shared = SharedFields::from_pairs(pairs)?;
        self.collection.set_columns(&self.schema, &self.shared);
        tracing::debug!(fields = self.shared.len(), "Shared fields configured");
        Ok(())
    }

    pub fn schema(&self) -> &HeaderSchema {
        &self.schema
    }

    pub fn shared(&self) -> &SharedFields {
        &self.shared
    }

    /// Normalize one raw file and append the record to the collection.
    ///
    /// Line `i` binds to schema label `i` after trimming. Lines past the end
    /// of the schema are ignored; missing lines leave their labels unset.
    /// Shared values are added only for labels the file did not bind, so a
    /// blank line in the file still wins over a shared default.
    pub fn process_metadata_file<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        id: u32,
        source: impl Into<String>,
    ) -> &MetadataRecord {
        let source = source.into();

        let mut fields: IndexMap<String, String> = self
            .schema
            .iter()
            .zip(lines)
            .map(|(label, line)| (label.to_string(), line.as_ref().trim().to_string()))
            .collect();

        if lines.len() < self.schema.len() {
            tracing::warn!(
                source = %source,
                lines = lines.len(),
                expected = self.schema.len(),
                "Raw file is shorter than the header schema; trailing fields left unset"
            );
        }

        for (label, value) in self.shared.iter() {
            if !fields.contains_key(label) {
                fields.insert(label.to_string(), value.to_string());
            }
        }

        tracing::debug!(id, source = %source, fields = fields.len(), "Parsed metadata file");

        self.collection.push(MetadataRecord::new(id, source, fields))
    }

    /// Read-only view of every record produced so far, in processing order
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn into_collection(self) -> Collection {
        self.collection
    }
}

impl Default for MetadataParser {
    fn default() -> Self {
        Self::new()
    }
}
