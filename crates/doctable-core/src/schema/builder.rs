mod table;
mod upsert;

use super::{
    db::{Table, UpsertFunction},
    DocumentMapping,
};

/// Schema objects derived from a [`DocumentMapping`].
///
/// Each call rebuilds its object from the mapping's current state; nothing is
/// memoized.
#[derive(Debug, Clone, Copy)]
pub struct SchemaObjects<'a> {
    mapping: &'a DocumentMapping,
}

impl<'a> SchemaObjects<'a> {
    pub fn new(mapping: &'a DocumentMapping) -> SchemaObjects<'a> {
        SchemaObjects { mapping }
    }

    pub fn mapping(&self) -> &'a DocumentMapping {
        self.mapping
    }

    /// The table storing the mapping's documents.
    pub fn storage_table(&self) -> Table {
        table::BuildTable::new(self.mapping).build()
    }

    /// The signature of the routine writing the mapping's documents.
    pub fn upsert_function(&self) -> UpsertFunction {
        upsert::BuildUpsert::new(self.mapping).build()
    }
}
