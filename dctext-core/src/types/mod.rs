//! Core types: header schema, shared fields, records and the collection

mod collection;
mod record;
mod schema;
mod shared;

pub use collection::Collection;
pub use record::{MetadataRecord, FILE_COLUMN, ID_COLUMN, RESERVED_LABELS};
pub use schema::{FieldLabel, HeaderSchema, DUBLIN_CORE_ELEMENTS};
pub use shared::SharedFields;
