use super::Type;
use crate::{schema::name, DocumentMapping};

/// Signature of the routine that inserts or updates a document row.
///
/// Arguments are positional: the write path binds parameters in exactly the
/// order of [`UpsertFunction::arguments`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpsertFunction {
    /// Lowercase schema the function lives in
    pub schema_name: String,

    /// Unqualified name of the function
    pub name: String,

    /// Qualified name of the table the function writes to
    pub table: String,

    /// Ordered arguments
    pub arguments: Vec<UpsertArgument>,

    /// Copied from the mapping. The version argument is compared against the
    /// stored row by the write-path executor when this is set.
    pub use_optimistic_concurrency: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpsertArgument {
    /// Parameter name in the routine signature
    pub arg: String,

    /// Column the argument is written to
    pub column: String,

    pub ty: Type,
}

impl UpsertFunction {
    /// Derives the upsert function for the mapping's current state.
    pub fn new(mapping: &DocumentMapping) -> UpsertFunction {
        mapping.schema_objects().upsert_function()
    }

    /// `schema.name`
    pub fn qualified_name(&self) -> String {
        name::qualified_name(&self.schema_name, &self.name)
    }

    pub fn argument(&self, column: &str) -> Option<&UpsertArgument> {
        self.arguments.iter().find(|arg| arg.column == column)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.arguments.iter().map(|arg| arg.column.as_str())
    }
}
