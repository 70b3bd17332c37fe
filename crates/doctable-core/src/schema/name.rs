//! Naming convention for everything derived from a document type.
//!
//! All functions are pure. Every generated identifier is ASCII-lowercase.

use std_util::str;

/// Schema used when a mapping does not name one.
pub const DEFAULT_SCHEMA: &str = "public";

/// Prefix of every document storage table.
pub const TABLE_PREFIX: &str = "mt_doc_";

/// Prefix of every document upsert function.
pub const UPSERT_PREFIX: &str = "mt_upsert_";

/// Alias derived from a type name: the simple name, lowercased.
///
/// Nested and generic type name mangling is left to the host's introspector,
/// which is expected to report a usable simple name.
pub fn alias(type_name: &str) -> String {
    str::simple_name(type_name).to_ascii_lowercase()
}

pub fn table_name(alias: &str) -> String {
    format!("{TABLE_PREFIX}{}", alias.to_ascii_lowercase())
}

pub fn upsert_name(alias: &str) -> String {
    format!("{UPSERT_PREFIX}{}", alias.to_ascii_lowercase())
}

/// `schema.local`, always qualified, even for [`DEFAULT_SCHEMA`].
pub fn qualified_name(schema: &str, local: &str) -> String {
    format!("{}.{}", schema.to_ascii_lowercase(), local)
}

/// Column (and JSON key) name for a member: the member name in `snake_case`.
pub fn column_name(member: &str) -> String {
    str::snake_case(member)
}
