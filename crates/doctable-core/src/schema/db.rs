mod column;
pub use column::Column;

mod function;
pub use function::{UpsertArgument, UpsertFunction};

mod table;
pub use table::{PrimaryKey, Table};

mod ty;
pub use ty::Type;
