use doctable_core::schema::db::{self, Column};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,
    pub not_null: bool,

    /// SQL expression emitted after `DEFAULT`
    pub default: Option<String>,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.ty,
            not_null: !column.nullable,
            default: column.default.clone(),
        }
    }
}
