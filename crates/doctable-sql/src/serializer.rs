#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod name;
mod statement;
mod ty;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone)]
pub struct Serializer {
    /// Prefix of each line nested inside a statement
    indent: &'static str,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// Serializer producing PostgreSQL, the only dialect with the `jsonb`
    /// storage documents rely on.
    pub fn postgresql() -> Serializer {
        Serializer { indent: "    " }
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::postgresql()
    }
}
