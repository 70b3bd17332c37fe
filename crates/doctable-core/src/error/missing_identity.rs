use super::Error;

/// Error when no member of a document type can serve as its primary key.
#[derive(Debug)]
pub(super) struct MissingIdentityError {
    document_type: Box<str>,
}

impl std::error::Error for MissingIdentityError {}

impl core::fmt::Display for MissingIdentityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "document type `{}` has no identity member; mark one as identity or name it `id`",
            self.document_type
        )
    }
}

impl Error {
    /// Creates a missing identity error.
    pub fn missing_identity(document_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentityError {
            document_type: document_type.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing identity error.
    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentity(_))
    }
}
