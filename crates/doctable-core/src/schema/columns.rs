//! Reserved column names shared by every document table.
//!
//! None of these are configurable, and no duplicated field may use one.

/// Primary key
pub const ID: &str = "id";

/// JSON payload
pub const DATA: &str = "data";

/// Timestamp of the last write
pub const LAST_MODIFIED: &str = "mt_last_modified";

/// Row version, used by optimistic concurrency
pub const VERSION: &str = "mt_version";

/// Fully qualified name of the host type that was written
pub const HOST_TYPE: &str = "mt_host_type";

/// Hierarchy discriminator; only present on hierarchical mappings
pub const DOC_TYPE: &str = "mt_doc_type";

pub const RESERVED: [&str; 6] = [ID, DATA, LAST_MODIFIED, VERSION, HOST_TYPE, DOC_TYPE];

/// Discriminator value stored for rows of the hierarchy root itself.
pub const BASE_DISCRIMINATOR: &str = "BASE";

/// Table alias used by every generated locator and projection.
pub const TABLE_ALIAS: &str = "d";

pub fn is_reserved(name: &str) -> bool {
    RESERVED.iter().any(|reserved| reserved.eq_ignore_ascii_case(name))
}
