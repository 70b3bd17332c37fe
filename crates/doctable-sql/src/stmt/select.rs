use super::*;

use doctable_core::{schema::columns, DocumentMapping};

/// Projection used to load documents back from their table.
#[derive(Debug, Clone)]
pub struct Select {
    pub columns: Vec<String>,
    pub from: Name,

    /// Alias the table is bound to, referenced by field locators
    pub alias: String,
}

impl Statement {
    pub fn select(mapping: &DocumentMapping) -> Self {
        Select {
            columns: mapping
                .select_fields()
                .into_iter()
                .map(str::to_string)
                .collect(),
            from: Name::qualified(mapping.schema_name(), &mapping.table_name()),
            alias: columns::TABLE_ALIAS.to_string(),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
