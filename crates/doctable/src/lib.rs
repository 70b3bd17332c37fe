pub mod registry;
pub use registry::Registry;

pub use doctable_core::{
    doc::{self, Document, DocumentType, Marker, Member},
    schema::{self, DocumentMapping, Field},
    Error, Result,
};

pub use doctable_sql as sql;
