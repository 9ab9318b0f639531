//! The ordered set of records produced by one run

use super::{FieldLabel, HeaderSchema, MetadataRecord, SharedFields};
use serde::{Deserialize, Serialize};

/// Records in processing order, plus the column set exporters lay them out by.
///
/// The column set is the schema's labels followed by any shared labels the
/// schema does not already name. Once records exist the set only grows, so
/// no record loses a slot when the configuration changes mid-run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    columns: Vec<FieldLabel>,
    records: Vec<MetadataRecord>,
}

impl Collection {
    pub(crate) fn new(schema: &HeaderSchema, shared: &SharedFields) -> Self {
        let mut collection = Self::default();
        collection.set_columns(schema, shared);
        collection
    }

    pub(crate) fn set_columns(&mut self, schema: &HeaderSchema, shared: &SharedFields) {
        let labels = schema
            .iter()
            .chain(shared.labels().filter(|label| !schema.contains(label)));

        if self.records.is_empty() {
            self.columns = labels.map(str::to_string).collect();
            return;
        }

        for label in labels {
            if !self.columns.iter().any(|column| column == label) {
                self.columns.push(label.to_string());
            }
        }
    }

    pub(crate) fn push(&mut self, record: MetadataRecord) -> &MetadataRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn columns(&self) -> &[FieldLabel] {
        &self.columns
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a MetadataRecord;
    type IntoIter = std::slice::Iter<'a, MetadataRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
