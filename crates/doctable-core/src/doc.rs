//! Shape of host types mapped as documents.
//!
//! A [`DocumentType`] is the one-time description of a host type: its name,
//! whether it is concrete, abstract or an interface, its declared members,
//! the types it derives from, and its markers. Mapping code only ever
//! consults this description, never the host type itself.

mod document_type;
pub use document_type::{Builder, DocumentType, TypeKind};

mod marker;
pub use marker::Marker;

mod member;
pub use member::Member;

mod ty;
pub use ty::Type;

/// Implemented by host types that can be stored as documents.
///
/// ```
/// use doctable_core::doc::{Document, DocumentType, Type};
///
/// struct User;
///
/// impl Document for User {
///     fn document_type() -> DocumentType {
///         DocumentType::builder("app::User")
///             .member("Id", Type::Uuid)
///             .member("FirstName", Type::String)
///             .build()
///     }
/// }
///
/// assert_eq!(User::document_type().simple_name(), "User");
/// ```
pub trait Document {
    fn document_type() -> DocumentType;
}
