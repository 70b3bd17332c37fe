mod column_def;
pub use column_def::ColumnDef;

mod create_function;
pub use create_function::{CreateFunction, FunctionArg};

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

mod select;
pub use select::Select;

/// A statement the serializer knows how to render.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateFunction(CreateFunction),
    CreateTable(CreateTable),
    DropTable(DropTable),
    Select(Select),
}

impl Statement {
    pub fn is_ddl(&self) -> bool {
        !matches!(self, Statement::Select(_))
    }
}
