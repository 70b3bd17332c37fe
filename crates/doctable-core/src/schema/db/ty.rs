use crate::doc;

use std::fmt;

/// Database storage types, as they appear in `CREATE TABLE` statements and
/// function signatures.
///
/// The mapping from a member's declared type happens in [`Type::from_member`]:
///
/// ```text
/// doc::Type::String     →  varchar
/// doc::Type::I32        →  integer
/// doc::Type::I64        →  bigint
/// doc::Type::Uuid       →  uuid
/// doc::Type::Timestamp  →  timestamp with time zone
/// doc::Type::List(_)    →  jsonb
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Type {
    Boolean,
    Integer,
    BigInt,
    DoublePrecision,
    VarChar,
    Uuid,
    Jsonb,
    TimestampTz,
}

impl Type {
    /// Maps a member's declared type to the type of the column storing it.
    pub fn from_member(ty: &doc::Type) -> Type {
        match ty {
            doc::Type::Bool => Type::Boolean,
            doc::Type::I32 => Type::Integer,
            doc::Type::I64 => Type::BigInt,
            doc::Type::F64 => Type::DoublePrecision,
            doc::Type::String => Type::VarChar,
            doc::Type::Uuid => Type::Uuid,
            doc::Type::Timestamp => Type::TimestampTz,
            doc::Type::List(_) | doc::Type::Embedded(_) => Type::Jsonb,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Type::Boolean => "boolean",
            Type::Integer => "integer",
            Type::BigInt => "bigint",
            Type::DoublePrecision => "double precision",
            Type::VarChar => "varchar",
            Type::Uuid => "uuid",
            Type::Jsonb => "jsonb",
            Type::TimestampTz => "timestamp with time zone",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
