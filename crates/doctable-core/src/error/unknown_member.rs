use super::Error;

/// Error when a member path does not resolve against a document type.
#[derive(Debug)]
pub(super) struct UnknownMemberError {
    document_type: Box<str>,
    path: Box<str>,
}

impl std::error::Error for UnknownMemberError {}

impl core::fmt::Display for UnknownMemberError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown member `{}` on document type `{}`",
            self.path, self.document_type
        )
    }
}

impl Error {
    /// Creates an unknown member error.
    ///
    /// Raised by field resolution when any segment of `path` is not a
    /// declared member, including paths that descend through a scalar.
    pub fn unknown_member(document_type: impl Into<String>, path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownMember(UnknownMemberError {
            document_type: document_type.into().into(),
            path: path.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown member error.
    pub fn is_unknown_member(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownMember(_))
    }
}
