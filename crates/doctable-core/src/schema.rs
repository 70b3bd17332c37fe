mod builder;
pub use builder::SchemaObjects;

pub mod columns;

pub mod db;

mod field;
pub use field::{Field, FieldKind};

mod mapping;
pub use mapping::DocumentMapping;

pub mod name;
