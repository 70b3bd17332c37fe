pub mod doc;
pub use doc::{Document, DocumentType};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{DocumentMapping, Field, SchemaObjects};

/// A Result type alias that uses doctable's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
