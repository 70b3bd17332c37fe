use super::Member;

/// Declared type of a document member, from the host's point of view.
///
/// The database storage type of a column is derived from this by
/// [`db::Type::from_member`](crate::schema::db::Type::from_member).
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Uuid,
    Timestamp,

    /// Homogeneous list, stored inside the JSON payload as an array
    List(Box<Type>),

    /// Nested object whose members can be addressed with dotted paths
    Embedded(Vec<Member>),
}

impl Type {
    /// True when the JSON text value can be compared without a cast.
    pub fn is_text(&self) -> bool {
        matches!(self, Type::String)
    }

    /// True when the value is a JSON object or array rather than a scalar.
    pub fn is_json(&self) -> bool {
        matches!(self, Type::List(_) | Type::Embedded(_))
    }
}
