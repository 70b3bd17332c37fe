use crate::schema::{
    columns,
    db::{Table, Type},
    DocumentMapping,
};

/// Default of the last-modified column
const LAST_MODIFIED_DEFAULT: &str = "transaction_timestamp()";

/// Default of the version column: a random uuid
const VERSION_DEFAULT: &str = "(md5(random()::text || clock_timestamp()::text)::uuid)";

pub(super) struct BuildTable<'a> {
    mapping: &'a DocumentMapping,

    /// The table being built
    table: Table,
}

impl<'a> BuildTable<'a> {
    pub(super) fn new(mapping: &'a DocumentMapping) -> BuildTable<'a> {
        BuildTable {
            mapping,
            table: Table::new(mapping.schema_name(), mapping.table_name()),
        }
    }

    pub(super) fn build(mut self) -> Table {
        self.push_system_columns();
        self.push_duplicated_columns();

        if self.mapping.is_hierarchy() {
            let default = format!("'{}'", columns::BASE_DISCRIMINATOR);
            self.table
                .push_column(columns::DOC_TYPE, Type::VarChar, true, Some(&default));
        }

        tracing::trace!(
            table = %self.table.qualified_name(),
            columns = self.table.columns.len(),
            "derived storage table"
        );

        self.table
    }

    fn push_system_columns(&mut self) {
        let id_ty = Type::from_member(&self.mapping.id_member().ty);

        let id = self.table.push_column(columns::ID, id_ty, false, None);
        self.table.columns[id].primary_key = true;
        self.table.primary_key.columns.push(id);

        self.table
            .push_column(columns::DATA, Type::Jsonb, false, None);
        self.table.push_column(
            columns::LAST_MODIFIED,
            Type::TimestampTz,
            true,
            Some(LAST_MODIFIED_DEFAULT),
        );
        self.table
            .push_column(columns::VERSION, Type::Uuid, false, Some(VERSION_DEFAULT));
        self.table
            .push_column(columns::HOST_TYPE, Type::VarChar, true, None);
    }

    fn push_duplicated_columns(&mut self) {
        for field in self.mapping.duplicated_fields() {
            self.table
                .push_column(&field.column_name, field.storage_ty(), true, None);
        }
    }
}
