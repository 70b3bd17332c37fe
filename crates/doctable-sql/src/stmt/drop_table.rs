use super::*;

use doctable_core::schema::db::Table;

/// A statement to drop a document table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Qualified name of the table.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,

    /// Whether or not to also drop dependent objects.
    pub cascade: bool,
}

impl Statement {
    /// Drops a table together with its dependents, if the table exists.
    pub fn drop_table(table: &Table) -> Self {
        DropTable {
            name: Name::qualified(&table.schema_name, &table.name),
            if_exists: true,
            cascade: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
