use super::*;

use doctable_core::schema::{
    columns,
    db::{self, UpsertArgument, UpsertFunction},
};

/// `CREATE OR REPLACE FUNCTION` for a document upsert routine.
///
/// The routine inserts a row from its arguments, falls back to updating every
/// non-key column on conflict, and returns the version it wrote. That value
/// always equals the version argument, so it confirms the write and carries no
/// information for a concurrency check.
#[derive(Debug, Clone)]
pub struct CreateFunction {
    /// Qualified name of the function
    pub name: Name,

    /// Qualified name of the table written to
    pub table: Name,

    /// Positional parameters
    pub arguments: Vec<FunctionArg>,

    /// Conflict target
    pub key: String,

    /// Column set to the transaction timestamp on every write
    pub touch: String,

    /// Column read back and returned by the function
    pub returning: String,

    pub returns_ty: db::Type,
}

#[derive(Debug, Clone)]
pub struct FunctionArg {
    pub name: String,
    pub column: String,
    pub ty: db::Type,
}

impl FunctionArg {
    fn from_schema(arg: &UpsertArgument) -> FunctionArg {
        FunctionArg {
            name: arg.arg.clone(),
            column: arg.column.clone(),
            ty: arg.ty,
        }
    }
}

impl Statement {
    pub fn create_upsert(function: &UpsertFunction) -> Self {
        CreateFunction {
            name: Name::qualified(&function.schema_name, &function.name),
            table: Name::from(&function.table),
            arguments: function
                .arguments
                .iter()
                .map(FunctionArg::from_schema)
                .collect(),
            key: columns::ID.to_string(),
            touch: columns::LAST_MODIFIED.to_string(),
            returning: columns::VERSION.to_string(),
            returns_ty: db::Type::Uuid,
        }
        .into()
    }
}

impl From<CreateFunction> for Statement {
    fn from(value: CreateFunction) -> Self {
        Self::CreateFunction(value)
    }
}
